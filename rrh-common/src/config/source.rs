//! Source tracking for configuration values.

use serde::Serialize;
use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// Built-in default.
    Default,
    /// The config file.
    File,
    /// An `RRH_*` environment variable.
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::File => write!(f, "file"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// A value together with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    pub source: ConfigSource,
    /// Variable name when the value came from the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_var: Option<String>,
}

impl<T> Sourced<T> {
    pub fn default_value(value: T) -> Self {
        Self {
            value,
            source: ConfigSource::Default,
            env_var: None,
        }
    }

    pub fn from_file(value: T) -> Self {
        Self {
            value,
            source: ConfigSource::File,
            env_var: None,
        }
    }

    pub fn from_env(value: T, var: impl Into<String>) -> Self {
        Self {
            value,
            source: ConfigSource::Environment,
            env_var: Some(var.into()),
        }
    }

    /// File value when present, otherwise the built-in default.
    pub fn file_or_default(file: Option<T>, default: T) -> Self {
        match file {
            Some(value) => Self::from_file(value),
            None => Self::default_value(default),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Sourced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.env_var {
            Some(var) => write!(f, "{} ({}: {})", self.value, self.source, var),
            None => write!(f, "{} ({})", self.value, self.source),
        }
    }
}
