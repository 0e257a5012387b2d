//! Constants used throughout the validation system

/// Accepted endpoint schemes
pub const ENDPOINT_SCHEMES: [&str; 2] = ["http://", "https://"];
/// Lowest HTTP status code considered valid
pub const MIN_STATUS_CODE: i128 = 100;
/// Highest HTTP status code considered valid
pub const MAX_STATUS_CODE: i128 = 599;
/// Default upper bound for a response time, in milliseconds
pub const DEFAULT_MAX_RESPONSE_TIME_MS: f64 = 5_000.0;

/// Maximum length of a table name
pub const MAX_TABLE_NAME_LENGTH: usize = 64;
/// Maximum length of an email stored in a column
pub const MAX_EMAIL_LENGTH: usize = 255;
/// Largest number of rows a single query may ask for
pub const MAX_QUERY_LIMIT: i128 = 10_000;
/// Format accepted for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum length for a password
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum length for a username
pub const MIN_USERNAME_LENGTH: usize = 3;
