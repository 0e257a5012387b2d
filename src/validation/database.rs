//! Validators for identifiers, values and paging parameters sent to the database.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::constants::{DATE_FORMAT, MAX_EMAIL_LENGTH, MAX_QUERY_LIMIT, MAX_TABLE_NAME_LENGTH};
use super::patterns::{as_integer, char_len, is_email, scan_identifier, underscore, IdentifierFault};
use super::Verdict;

// chrono alone would accept unpadded fields such as "2024-1-5"
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex")
});

fn identifier_verdict(kind: &str, name: &str) -> Result<(), Verdict> {
    scan_identifier(name, underscore).map_err(|fault| {
        Verdict::reject(match fault {
            IdentifierFault::Empty => format!("{kind} name cannot be empty"),
            IdentifierFault::BadFirstChar => format!("{kind} name must start with a letter"),
            IdentifierFault::BadChar => {
                format!("{kind} name can only contain letters, numbers, and underscores")
            }
        })
    })
}

/// Checks a table name: a letter followed by letters, digits or underscores,
/// at most 64 characters long.
pub fn validate_table_name(name: &str) -> Verdict {
    if let Err(verdict) = identifier_verdict("Table", name) {
        return verdict;
    }
    if char_len(name) > MAX_TABLE_NAME_LENGTH {
        return Verdict::reject(format!(
            "Table name cannot exceed {MAX_TABLE_NAME_LENGTH} characters"
        ));
    }
    Verdict::accept("Table name is valid")
}

/// Same character rules as [`validate_table_name`], without a length cap
pub fn validate_column_name(name: &str) -> Verdict {
    match identifier_verdict("Column", name) {
        Ok(()) => Verdict::accept("Column name is valid"),
        Err(verdict) => verdict,
    }
}

pub fn validate_email_column_value(email: &str) -> Verdict {
    if !is_email(email) {
        return Verdict::reject("Invalid email format");
    }
    if char_len(email) > MAX_EMAIL_LENGTH {
        return Verdict::reject(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }
    Verdict::accept("Email is valid")
}

pub fn validate_record_id(record_id: &Value) -> Verdict {
    match as_integer(record_id) {
        None => Verdict::reject("Record ID must be an integer"),
        Some(id) if id <= 0 => Verdict::reject("Record ID must be positive"),
        Some(_) => Verdict::accept("Record ID is valid"),
    }
}

/// Accepts only real calendar dates written as `YYYY-MM-DD`
pub fn validate_date_format(date: &str) -> Verdict {
    let parsed = DATE_SHAPE_REGEX
        .is_match(date)
        .then(|| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
        .flatten()
        // chrono has a year 0, the calendar we accept starts at year 1
        .filter(|parsed| parsed.year() >= 1);

    match parsed {
        Some(_) => Verdict::accept("Date format is valid"),
        None => Verdict::reject("Date must be in format YYYY-MM-DD"),
    }
}

pub fn validate_query_limit(limit: &Value) -> Verdict {
    match as_integer(limit) {
        None => Verdict::reject("Limit must be an integer"),
        Some(n) if n <= 0 => Verdict::reject("Limit must be greater than 0"),
        Some(n) if n > MAX_QUERY_LIMIT => Verdict::reject(format!(
            "Limit cannot exceed {MAX_QUERY_LIMIT} records"
        )),
        Some(_) => Verdict::accept("Query limit is valid"),
    }
}

pub fn validate_query_offset(offset: &Value) -> Verdict {
    match as_integer(offset) {
        None => Verdict::reject("Offset must be an integer"),
        Some(n) if n < 0 => Verdict::reject("Offset cannot be negative"),
        Some(_) => Verdict::accept("Query offset is valid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod identifier_tests {
        use super::*;

        #[test]
        fn test_valid_table_names() {
            let valid_cases = vec!["users", "user_profiles", "Orders2024", "t"];

            for name in valid_cases {
                assert!(
                    validate_table_name(name).is_valid,
                    "Valid table name {} was rejected !",
                    name
                );
            }
        }

        #[test]
        fn test_invalid_table_names() {
            let too_long = "t".repeat(MAX_TABLE_NAME_LENGTH + 1);
            let invalid_cases = vec![
                ("", "Table name cannot be empty"),
                ("1users", "Table name must start with a letter"),
                ("_users", "Table name must start with a letter"),
                (
                    "user-profiles",
                    "Table name can only contain letters, numbers, and underscores",
                ),
                (
                    "user profiles",
                    "Table name can only contain letters, numbers, and underscores",
                ),
                (too_long.as_str(), "Table name cannot exceed 64 characters"),
            ];

            for (name, message) in invalid_cases {
                let verdict = validate_table_name(name);
                assert!(!verdict.is_valid, "Invalid table name {} was accepted !", name);
                assert_eq!(verdict.message, message);
            }
        }

        #[test]
        fn test_table_name_length_boundary() {
            let longest = "t".repeat(MAX_TABLE_NAME_LENGTH);
            assert!(validate_table_name(&longest).is_valid);
        }

        #[test]
        fn test_column_names() {
            assert_eq!(
                validate_column_name("first_name"),
                Verdict::accept("Column name is valid")
            );
            assert_eq!(
                validate_column_name(""),
                Verdict::reject("Column name cannot be empty")
            );
            assert!(!validate_column_name("2nd_name").is_valid);
            assert!(!validate_column_name("last.name").is_valid);
            // no length cap on columns
            assert!(validate_column_name(&"c".repeat(200)).is_valid);
        }
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_email_values() {
            assert_eq!(
                validate_email_column_value("user@example.com"),
                Verdict::accept("Email is valid")
            );
            assert_eq!(
                validate_email_column_value("invalid.email"),
                Verdict::reject("Invalid email format")
            );

            let long_email = format!("{}@example.com", "a".repeat(250));
            assert_eq!(
                validate_email_column_value(&long_email),
                Verdict::reject("Email exceeds maximum length of 255 characters")
            );
        }

        #[test]
        fn test_record_ids() {
            assert!(validate_record_id(&json!(1)).is_valid);
            assert!(validate_record_id(&json!(u64::MAX)).is_valid);
            assert_eq!(
                validate_record_id(&json!(0)),
                Verdict::reject("Record ID must be positive")
            );
            assert!(!validate_record_id(&json!(-5)).is_valid);
            assert_eq!(
                validate_record_id(&json!("1")),
                Verdict::reject("Record ID must be an integer")
            );
            assert!(!validate_record_id(&json!(1.5)).is_valid);
            // booleans are not integers here
            assert_eq!(
                validate_record_id(&json!(true)),
                Verdict::reject("Record ID must be an integer")
            );
        }

        #[test]
        fn test_valid_dates() {
            for date in ["2024-01-15", "2024-02-29", "1999-12-31", "2000-02-29"] {
                assert_eq!(
                    validate_date_format(date),
                    Verdict::accept("Date format is valid"),
                    "Valid date {} was rejected !",
                    date
                );
            }
        }

        #[test]
        fn test_invalid_dates() {
            let invalid_cases = vec![
                "15/01/2024",
                "2024-1-15",
                "2024-01-5",
                "24-01-15",
                "2023-02-29",
                "2024-13-01",
                "2024-04-31",
                "2024-01-15 ",
                " 2024-01-15",
                "0000-01-01",
                "0000-02-29",
                "",
            ];

            for date in invalid_cases {
                assert_eq!(
                    validate_date_format(date),
                    Verdict::reject("Date must be in format YYYY-MM-DD"),
                    "Invalid date {:?} was accepted !",
                    date
                );
            }
        }
    }

    mod paging_tests {
        use super::*;

        #[test]
        fn test_query_limits() {
            assert!(validate_query_limit(&json!(100)).is_valid);
            assert!(validate_query_limit(&json!(1)).is_valid);
            assert!(validate_query_limit(&json!(10_000)).is_valid);
            assert_eq!(
                validate_query_limit(&json!(15_000)),
                Verdict::reject("Limit cannot exceed 10000 records")
            );
            assert_eq!(
                validate_query_limit(&json!(0)),
                Verdict::reject("Limit must be greater than 0")
            );
            assert_eq!(
                validate_query_limit(&json!(10.0)),
                Verdict::reject("Limit must be an integer")
            );
            assert_eq!(
                validate_query_limit(&json!(true)),
                Verdict::reject("Limit must be an integer")
            );
        }

        #[test]
        fn test_query_offsets() {
            assert!(validate_query_offset(&json!(100)).is_valid);
            assert!(validate_query_offset(&json!(0)).is_valid);
            assert_eq!(
                validate_query_offset(&json!(-1)),
                Verdict::reject("Offset cannot be negative")
            );
            assert_eq!(
                validate_query_offset(&json!(null)),
                Verdict::reject("Offset must be an integer")
            );
        }
    }

    mod idempotence_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validators_are_idempotent(text in ".*", number in any::<i64>()) {
                prop_assert_eq!(validate_table_name(&text), validate_table_name(&text));
                prop_assert_eq!(validate_column_name(&text), validate_column_name(&text));
                prop_assert_eq!(
                    validate_email_column_value(&text),
                    validate_email_column_value(&text)
                );
                prop_assert_eq!(validate_date_format(&text), validate_date_format(&text));

                let value = json!(number);
                prop_assert_eq!(validate_record_id(&value), validate_record_id(&value));
                prop_assert_eq!(validate_query_limit(&value), validate_query_limit(&value));
                prop_assert_eq!(validate_query_offset(&value), validate_query_offset(&value));
            }
        }
    }
}
