//! Root module for the validation system.
//! Exposes the public API for input validation.

mod constants;
mod outcome;
mod patterns;

pub mod api;
pub mod credentials;
pub mod database;

// Re-export commonly used types and functions
pub use api::{HttpMethod, StatusCategory};
pub use constants::*;
pub use outcome::Verdict;
