//! Error catalog for the Release Rollback Helper.
//!
//! Every user-facing failure maps to a stable `RRH-Exxx` code with a message
//! and remediation steps.
//!
//! # Error Code Ranges
//!
//! | Range      | Category | Description                              |
//! |------------|----------|------------------------------------------|
//! | E001-E099  | Config   | Configuration file and environment       |
//! | E100-E199  | Manifest | Release manifest loading                 |
//! | E200-E299  | Backend  | Failures reported by the release backend |
//! | E500-E599  | Internal | Internal/unexpected errors               |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enumeration covering all RRH error scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Config Errors (E001-E099)
    // =========================================================================
    /// Configuration file could not be read
    ConfigReadError,
    /// Configuration file contains invalid TOML
    ConfigParseError,
    /// Environment variable has invalid value
    ConfigEnvError,
    /// Configuration file holds a value that fails validation
    ConfigValueError,

    // =========================================================================
    // Manifest Errors (E100-E199)
    // =========================================================================
    /// Manifest file could not be read
    ManifestReadError,
    /// Manifest content does not describe a release
    ManifestParseError,
    /// Manifest file extension is not recognised
    ManifestUnsupportedFormat,

    // =========================================================================
    // Backend Errors (E200-E299)
    // =========================================================================
    /// Backend has no release under that name
    BackendReleaseNotFound,
    /// Requested revision is not in the release history
    BackendVersionNotFound,
    /// Backend refused the rollback
    BackendRejected,
    /// Backend could not be reached
    BackendUnavailable,

    // =========================================================================
    // Internal Errors (E500-E599)
    // =========================================================================
    /// Logging system error
    InternalLoggingError,
}

impl ErrorCode {
    /// Returns the numeric error code (without prefix).
    #[must_use]
    pub const fn code_number(&self) -> u16 {
        match self {
            Self::ConfigReadError => 1,
            Self::ConfigParseError => 2,
            Self::ConfigEnvError => 3,
            Self::ConfigValueError => 4,

            Self::ManifestReadError => 100,
            Self::ManifestParseError => 101,
            Self::ManifestUnsupportedFormat => 102,

            Self::BackendReleaseNotFound => 200,
            Self::BackendVersionNotFound => 201,
            Self::BackendRejected => 202,
            Self::BackendUnavailable => 203,

            Self::InternalLoggingError => 500,
        }
    }

    /// Returns the formatted code string (e.g., "RRH-E001").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("RRH-E{:03}", self.code_number())
    }

    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.code_number() {
            1..=99 => ErrorCategory::Config,
            100..=199 => ErrorCategory::Manifest,
            200..=299 => ErrorCategory::Backend,
            _ => ErrorCategory::Internal,
        }
    }

    /// Returns the full error entry with all metadata.
    #[must_use]
    pub fn entry(&self) -> ErrorEntry {
        ErrorEntry {
            code: self.code_string(),
            category: self.category(),
            message: self.message().to_string(),
            remediation: self
                .remediation()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ConfigReadError => "Failed to read configuration file",
            Self::ConfigParseError => "Configuration file contains invalid TOML",
            Self::ConfigEnvError => "Environment variable has invalid value",
            Self::ConfigValueError => "Configuration file has an invalid value",

            Self::ManifestReadError => "Failed to read release manifest",
            Self::ManifestParseError => "Release manifest could not be parsed",
            Self::ManifestUnsupportedFormat => "Release manifest format is not supported",

            Self::BackendReleaseNotFound => "Release not found in backend",
            Self::BackendVersionNotFound => "Release revision not found in backend history",
            Self::BackendRejected => "Backend rejected the rollback",
            Self::BackendUnavailable => "Backend is unavailable",

            Self::InternalLoggingError => "Logging could not be initialized",
        }
    }

    #[must_use]
    pub const fn remediation(&self) -> &'static [&'static str] {
        match self {
            Self::ConfigReadError => &[
                "Check that the file exists and is readable",
                "Pass a different file with --config",
            ],
            Self::ConfigParseError => &[
                "Validate the file with a TOML linter",
                "Compare against the output of `rrh config`",
            ],
            Self::ConfigEnvError => &[
                "Check RRH_* environment variables for typos",
                "Unset the variable to fall back to the configured value",
            ],
            Self::ConfigValueError => &[
                "general.log_level takes a level or EnvFilter directives such as \"info,rrh_common=debug\"",
                "Compare against the output of `rrh config`",
            ],
            Self::ManifestReadError => &["Check that the manifest path exists and is readable"],
            Self::ManifestParseError => &[
                "Ensure the manifest has metadata.name",
                "Durations must look like \"10s\", \"1m\" or \"1m30s\"",
            ],
            Self::ManifestUnsupportedFormat => {
                &["Use a .yaml, .yml, .json or .toml manifest"]
            }
            Self::BackendReleaseNotFound => &[
                "Verify the release name and target namespace",
                "Check that the release was installed at least once",
            ],
            Self::BackendVersionNotFound => &[
                "The revision may have been pruned; raise spec.maxHistory",
                "Roll back without a version to use the latest revision",
            ],
            Self::BackendRejected => &[
                "Inspect the backend logs for the rejection reason",
                "Retry with spec.rollback.force if resources conflict",
            ],
            Self::BackendUnavailable => &["Check connectivity and credentials for the backend"],
            Self::InternalLoggingError => &["Check RRH_LOG_LEVEL for an invalid filter directive"],
        }
    }

    /// All error codes, in code order.
    #[must_use]
    pub fn all() -> &'static [ErrorCode] {
        &[
            Self::ConfigReadError,
            Self::ConfigParseError,
            Self::ConfigEnvError,
            Self::ConfigValueError,
            Self::ManifestReadError,
            Self::ManifestParseError,
            Self::ManifestUnsupportedFormat,
            Self::BackendReleaseNotFound,
            Self::BackendVersionNotFound,
            Self::BackendRejected,
            Self::BackendUnavailable,
            Self::InternalLoggingError,
        ]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_string(), self.message())
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Configuration errors (E001-E099)
    Config,
    /// Manifest loading errors (E100-E199)
    Manifest,
    /// Backend errors (E200-E299)
    Backend,
    /// Internal/unexpected errors (E500-E599)
    Internal,
}

impl ErrorCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Config => "Configuration",
            Self::Manifest => "Manifest",
            Self::Backend => "Backend",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Complete error entry with all metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Error code string (e.g., "RRH-E001")
    pub code: String,
    pub category: ErrorCategory,
    pub message: String,
    /// Steps to remediate the error
    pub remediation: Vec<String>,
}

impl ErrorEntry {
    /// Formats the error for display with full remediation steps.
    #[must_use]
    pub fn format_full(&self) -> String {
        let mut output = format!("[{}] {}\n", self.code, self.message);

        if !self.remediation.is_empty() {
            output.push_str("\nRemediation steps:\n");
            for (i, step) in self.remediation.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, step));
            }
        }

        output
    }

    /// Formats the error as a single line.
    #[must_use]
    pub fn format_brief(&self) -> String {
        format!("[{}] {}", self.code, self.message)
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_brief())
    }
}
