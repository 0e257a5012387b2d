//! The result of running a validator.

use serde::Serialize;
use std::fmt;

/// Outcome of a single validation: a validity flag and a human-readable
/// message describing why the input was accepted or rejected.
///
/// A rejection is an ordinary value, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub message: String,
}

impl Verdict {
    /// An accepting verdict
    pub fn accept(message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("accepted: {message}");
        Self {
            is_valid: true,
            message,
        }
    }

    /// A rejecting verdict
    pub fn reject(message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("rejected: {message}");
        Self {
            is_valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Verdict> for (bool, String) {
    fn from(verdict: Verdict) -> Self {
        (verdict.is_valid, verdict.message)
    }
}

/// Prints the message only
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
