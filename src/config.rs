//! Runtime settings, read from environment variables (optionally via a `.env` file)

use log::{warn, LevelFilter};
use std::str::FromStr;
use thiserror::Error;

use crate::validation::DEFAULT_MAX_RESPONSE_TIME_MS;

pub const MAX_RESPONSE_TIME_VAR: &str = "FIELDGUARD_MAX_RESPONSE_TIME_MS";
pub const LOG_LEVEL_VAR: &str = "FIELDGUARD_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Upper bound used when checking response times
    pub max_response_time_ms: f64,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_response_time_ms: DEFAULT_MAX_RESPONSE_TIME_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<(Self, Vec<&'static str>), ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the settings from any variable source, along with the names of
    /// the variables that were missing and kept their default.
    /// Malformed values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<(Self, Vec<&'static str>), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let mut defaulted = Vec::new();

        match lookup(MAX_RESPONSE_TIME_VAR) {
            Some(value) => {
                settings.max_response_time_ms = match f64::from_str(value.trim()) {
                    Ok(ms) if ms.is_finite() && ms >= 0.0 => ms,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            var: MAX_RESPONSE_TIME_VAR,
                            value,
                        })
                    }
                };
            }
            None => defaulted.push(MAX_RESPONSE_TIME_VAR),
        }

        match lookup(LOG_LEVEL_VAR) {
            Some(value) => {
                settings.log_level = LevelFilter::from_str(value.trim()).map_err(|_| {
                    ConfigError::InvalidValue {
                        var: LOG_LEVEL_VAR,
                        value,
                    }
                })?;
            }
            None => defaulted.push(LOG_LEVEL_VAR),
        }

        Ok((settings, defaulted))
    }

    /// Reports the variables that fell back to a default.
    /// Call once a logger is installed.
    pub fn warn_defaults(&self, defaulted: &[&str]) {
        for var in defaulted {
            match *var {
                MAX_RESPONSE_TIME_VAR => {
                    warn!("{var} not set, using {}ms", self.max_response_time_ms)
                }
                _ => warn!("{var} not set, using level {}", self.log_level),
            }
        }
    }
}
