//! Seam to the package-management backend that executes rollbacks.
//!
//! The builder only borrows a backend handle and carries it along; the
//! handle is opened solely by [`crate::rollback::Rollback::run`].

use crate::rollback::RollbackSettings;
use std::future::Future;
use thiserror::Error;

/// Failures reported by a backend while executing a rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend has no release under that name.
    #[error("release {0} not found")]
    ReleaseNotFound(String),

    /// The requested revision is not in the release history.
    #[error("release {release} has no revision {version}")]
    VersionNotFound { release: String, version: u32 },

    /// The backend refused the rollback.
    #[error("rollback rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// A backend able to roll a release back to an earlier revision.
pub trait ReleaseBackend {
    /// Roll `release_name` back using the resolved `settings`.
    fn rollback(
        &self,
        release_name: &str,
        settings: &RollbackSettings,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}

/// Handle that resolves parameters without any backend behind it.
///
/// Used by previews where only the resolved settings are of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedBackend;

impl ReleaseBackend for DetachedBackend {
    async fn rollback(
        &self,
        release_name: &str,
        _settings: &RollbackSettings,
    ) -> Result<(), BackendError> {
        Err(BackendError::Unavailable(format!(
            "no backend attached for release {release_name}"
        )))
    }
}
