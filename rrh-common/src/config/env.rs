//! Environment variable parsing with type safety.
//!
//! Provides a type-safe parser for `RRH_*` environment variables with
//! validation, error collection, and source tracking. Every getter takes the
//! value resolved so far (file or default) and returns it unchanged when the
//! variable is unset or invalid.

use super::source::Sourced;
use crate::logging::{LoggingError, parse_filter};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during environment variable parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Invalid value for a variable.
    #[error("Invalid value for {var}: expected {expected}, got '{value}'")]
    InvalidValue {
        var: String,
        expected: String,
        value: String,
    },

    /// Value is not a valid `EnvFilter` directive list.
    #[error("Invalid log level for {var}: '{value}' ({reason})")]
    InvalidLogLevel {
        var: String,
        value: String,
        reason: String,
    },
}

impl EnvError {
    pub fn code(&self) -> crate::errors::ErrorCode {
        crate::errors::ErrorCode::ConfigEnvError
    }
}

/// Type-safe environment variable parser.
///
/// Collects errors during parsing so all issues can be reported at once.
pub struct EnvParser {
    prefix: &'static str,
    errors: Vec<EnvError>,
}

impl EnvParser {
    /// Create a new parser with the RRH_ prefix.
    pub fn new() -> Self {
        Self {
            prefix: "RRH_",
            errors: Vec::new(),
        }
    }

    /// Get all accumulated errors.
    pub fn errors(&self) -> &[EnvError] {
        &self.errors
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take ownership of errors.
    pub fn take_errors(&mut self) -> Vec<EnvError> {
        std::mem::take(&mut self.errors)
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Get a log level, or an `EnvFilter` directive list such as
    /// `info,rrh_common=trace`.
    pub fn get_log_level(&mut self, name: &str, fallback: Sourced<String>) -> Sourced<String> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match parse_filter(value.trim()) {
                Ok(_) => Sourced::from_env(value.trim().to_string(), var_name),
                Err(err) => {
                    let reason = match err {
                        LoggingError::InvalidFilter { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    self.errors.push(EnvError::InvalidLogLevel {
                        var: var_name,
                        value,
                        reason,
                    });
                    fallback
                }
            },
            Err(_) => fallback,
        }
    }

    /// Get any value implementing [`FromStr`].
    ///
    /// `expected` describes valid input for error messages.
    pub fn get_parsed<T: FromStr>(
        &mut self,
        name: &str,
        expected: &str,
        fallback: Sourced<T>,
    ) -> Sourced<T> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match value.trim().parse::<T>() {
                Ok(parsed) => Sourced::from_env(parsed, var_name),
                Err(_) => {
                    self.errors.push(EnvError::InvalidValue {
                        var: var_name,
                        expected: expected.to_string(),
                        value,
                    });
                    fallback
                }
            },
            Err(_) => fallback,
        }
    }
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::new()
    }
}
