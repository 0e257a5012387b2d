//! Validators for the fields of an HTTP API request and its response.

use derive_more::Display;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

use super::constants::{
    DEFAULT_MAX_RESPONSE_TIME_MS, ENDPOINT_SCHEMES, MAX_STATUS_CODE, MIN_STATUS_CODE,
};
use super::patterns::as_integer;
use super::Verdict;

/// The HTTP methods an endpoint may be called with.
/// Parsing is case-sensitive: only the upper-case spelling is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
    #[display("PATCH")]
    Patch,
    #[display("HEAD")]
    Head,
    #[display("OPTIONS")]
    Options,
}

/// Coarse class of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum StatusCategory {
    Success,
    Redirect,
    #[display("Client Error")]
    #[serde(rename = "Client Error")]
    ClientError,
    #[display("Server Error")]
    #[serde(rename = "Server Error")]
    ServerError,
    Unknown,
}

/// Checks that an endpoint is a non-empty http(s) URL without spaces
pub fn validate_endpoint(endpoint: &str) -> Verdict {
    if endpoint.is_empty() {
        return Verdict::reject("Endpoint cannot be empty");
    }
    if !ENDPOINT_SCHEMES
        .iter()
        .any(|scheme| endpoint.starts_with(scheme))
    {
        return Verdict::reject("Endpoint must start with http:// or https://");
    }
    if endpoint.contains(' ') {
        return Verdict::reject("Endpoint cannot contain spaces");
    }
    Verdict::accept("Endpoint is valid")
}

/// Checks that `method` is exactly one of the [`HttpMethod`] names
pub fn validate_http_method(method: &str) -> Verdict {
    match HttpMethod::from_str(method) {
        Ok(_) => Verdict::accept("HTTP method is valid"),
        Err(_) => {
            let valid = HttpMethod::iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Verdict::reject(format!("Invalid HTTP method. Must be one of: {valid}"))
        }
    }
}

pub fn validate_status_code(code: &Value) -> Verdict {
    let Some(code) = as_integer(code) else {
        return Verdict::reject("Status code must be an integer");
    };
    if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&code) {
        return Verdict::reject(format!(
            "Status code must be between {MIN_STATUS_CODE} and {MAX_STATUS_CODE}"
        ));
    }
    Verdict::accept("Status code is valid")
}

/// Checks a response time against the default maximum of 5000ms
pub fn validate_response_time(response_time_ms: f64) -> Verdict {
    validate_response_time_within(response_time_ms, DEFAULT_MAX_RESPONSE_TIME_MS)
}

/// Checks that a response time is non-negative and at most `max_time_ms`.
/// A time equal to the maximum is acceptable.
pub fn validate_response_time_within(response_time_ms: f64, max_time_ms: f64) -> Verdict {
    if response_time_ms.is_nan() {
        return Verdict::reject("Response time must be a number");
    }
    if response_time_ms < 0.0 {
        return Verdict::reject("Response time cannot be negative");
    }
    if response_time_ms > max_time_ms {
        return Verdict::reject(format!(
            "Response time {response_time_ms}ms exceeds maximum {max_time_ms}ms"
        ));
    }
    Verdict::accept(format!("Response time acceptable ({response_time_ms}ms)"))
}

/// Classifies a status code. Anything outside 200..600 is `Unknown`.
pub fn categorize_status_code(code: i64) -> StatusCategory {
    match code {
        200..=299 => StatusCategory::Success,
        300..=399 => StatusCategory::Redirect,
        400..=499 => StatusCategory::ClientError,
        500..=599 => StatusCategory::ServerError,
        _ => StatusCategory::Unknown,
    }
}
