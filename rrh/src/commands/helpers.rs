//! Shared helper functions for rrh commands.

use rrh_common::config::ConfigError;
use rrh_common::logging::LoggingError;
use rrh_common::{ErrorCode, ManifestError};
use std::time::Duration;

/// Indent each line of text with a given prefix.
pub fn indent_lines(text: &str, prefix: &str) -> String {
    let mut out = String::new();
    for (idx, line) in text.lines().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}

/// Format a rollback timeout; zero leaves the choice to the backend.
pub fn describe_timeout(timeout: Duration) -> String {
    if timeout.is_zero() {
        "backend default".to_string()
    } else {
        humantime::format_duration(timeout).to_string()
    }
}

/// Format a target revision; zero lets the backend pick the latest one.
pub fn describe_version(version: u32) -> String {
    if version == 0 {
        "latest available".to_string()
    } else {
        version.to_string()
    }
}

/// Catalog code for errors raised by rrh-common, if any.
pub fn error_code(err: &anyhow::Error) -> Option<ErrorCode> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<ManifestError>() {
            Some(e.code())
        } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
            Some(e.code())
        } else {
            cause.downcast_ref::<LoggingError>().map(LoggingError::code)
        }
    })
}

/// Render an error with its catalog entry and remediation steps.
pub fn render_error(err: &anyhow::Error) -> String {
    let mut out = format!("error: {:#}", err);
    if let Some(code) = error_code(err) {
        out.push('\n');
        out.push_str(&indent_lines(&code.entry().format_full(), "  "));
    }
    out
}
