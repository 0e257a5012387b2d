//! Validators for login credentials

use super::constants::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use super::patterns::{char_len, is_email};
use super::Verdict;

/// Same pattern as database email values, without the length cap
pub fn validate_email(email: &str) -> bool {
    is_email(email)
}

/// A password is strong enough when it has at least 8 characters,
/// one uppercase letter and one digit
pub fn validate_password_strength(password: &str) -> Verdict {
    if char_len(password) < MIN_PASSWORD_LENGTH {
        return Verdict::reject(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Verdict::reject("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Verdict::reject("Password must contain at least one digit");
    }
    Verdict::accept("Password is strong")
}

pub fn validate_username(username: &str) -> Verdict {
    if char_len(username) < MIN_USERNAME_LENGTH {
        return Verdict::reject(format!(
            "Username must be at least {MIN_USERNAME_LENGTH} characters long"
        ));
    }
    if !username.chars().all(char::is_alphanumeric) {
        return Verdict::reject("Username can only contain letters and numbers");
    }
    Verdict::accept("Username is valid")
}

/// Checks that both credentials were supplied. Nothing is looked up.
pub fn validate_login(username: &str, password: &str) -> Verdict {
    if username.is_empty() {
        return Verdict::reject("Username cannot be empty");
    }
    if password.is_empty() {
        return Verdict::reject("Password cannot be empty");
    }
    Verdict::accept("Credentials provided")
}
