//! Recording backend for tests.
//!
//! Captures every rollback it receives and answers with a configured
//! outcome. It performs no I/O.

use crate::backend::{BackendError, ReleaseBackend};
use crate::rollback::RollbackSettings;
use std::sync::{Arc, Mutex};

/// One rollback call as seen by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRollback {
    pub release_name: String,
    pub settings: RollbackSettings,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<RecordedRollback>>>,
    failure: Option<BackendError>,
}

impl RecordingBackend {
    /// A backend that rejects every rollback with `error`.
    pub fn failing(error: BackendError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedRollback> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ReleaseBackend for RecordingBackend {
    async fn rollback(
        &self,
        release_name: &str,
        settings: &RollbackSettings,
    ) -> Result<(), BackendError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRollback {
                release_name: release_name.to_string(),
                settings: settings.clone(),
            });

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DetachedBackend;
    use crate::rollback::new_rollback;
    use crate::types::ManagedRelease;

    fn settings() -> RollbackSettings {
        new_rollback(&DetachedBackend, &ManagedRelease::new("r", "ns"), &[]).into_settings()
    }

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let backend = RecordingBackend::default();
        backend.rollback("first", &settings()).await.unwrap();
        backend.rollback("second", &settings()).await.unwrap();

        let names: Vec<_> = backend.calls().into_iter().map(|c| c.release_name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_clones_share_history() {
        let backend = RecordingBackend::default();
        let clone = backend.clone();
        clone.rollback("r", &settings()).await.unwrap();
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_backend_still_records() {
        let backend = RecordingBackend::failing(BackendError::Unavailable("down".to_string()));
        let err = backend.rollback("r", &settings()).await.unwrap_err();
        assert_eq!(err, BackendError::Unavailable("down".to_string()));
        assert_eq!(backend.calls().len(), 1);
    }
}
