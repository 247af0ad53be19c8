//! Error types and the error catalog.
//!
//! See [`catalog`] for the `RRH-Exxx` code ranges.

pub mod catalog;

pub use catalog::{ErrorCategory, ErrorCode, ErrorEntry};

use crate::backend::BackendError;
use crate::types::ReleaseIdentity;
use thiserror::Error;

/// Failure of a rollback action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The backend failed to roll the release back.
    #[error("rollback of release {release} failed: {source}")]
    Backend {
        release: ReleaseIdentity,
        #[source]
        source: BackendError,
    },
}

impl ActionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Backend { source, .. } => source.code(),
        }
    }
}

impl BackendError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ReleaseNotFound(_) => ErrorCode::BackendReleaseNotFound,
            Self::VersionNotFound { .. } => ErrorCode::BackendVersionNotFound,
            Self::Rejected(_) => ErrorCode::BackendRejected,
            Self::Unavailable(_) => ErrorCode::BackendUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_message_names_release() {
        let err = ActionError::Backend {
            release: ReleaseIdentity::new("podinfo", "apps"),
            source: BackendError::Rejected("hook failed".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "rollback of release apps/podinfo failed: rollback rejected: hook failed"
        );
        assert_eq!(err.code(), ErrorCode::BackendRejected);
    }

    #[test]
    fn test_backend_error_codes() {
        assert_eq!(
            BackendError::ReleaseNotFound("r".to_string()).code(),
            ErrorCode::BackendReleaseNotFound
        );
        assert_eq!(
            BackendError::Unavailable("timeout".to_string()).code(),
            ErrorCode::BackendUnavailable
        );
    }
}
