//! Character-level checks shared by several validators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// local-part "@" domain "." tld of at least two letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Why a name failed the identifier scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierFault {
    Empty,
    BadFirstChar,
    BadChar,
}

/// Checks that `name` starts with a letter and that every other character
/// is alphanumeric or accepted by `extra`.
pub(crate) fn scan_identifier(name: &str, extra: fn(char) -> bool) -> Result<(), IdentifierFault> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(IdentifierFault::Empty),
        Some(first) if !first.is_alphabetic() => return Err(IdentifierFault::BadFirstChar),
        Some(_) => {}
    }
    if chars.all(|c| c.is_alphanumeric() || extra(c)) {
        Ok(())
    } else {
        Err(IdentifierFault::BadChar)
    }
}

pub(crate) fn underscore(c: char) -> bool {
    c == '_'
}

/// Reads a JSON number as an integer, wide enough for both `i64` and `u64`.
/// Floats, strings, booleans and null are not integers.
pub(crate) fn as_integer(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
