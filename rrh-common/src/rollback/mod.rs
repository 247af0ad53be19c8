//! Rollback parameter resolution.
//!
//! [`build_rollback`] turns the declared desired state and the observed
//! release history into concrete [`RollbackSettings`] for a backend call.
//! Resolution is deterministic and reads nothing but its arguments, so a
//! reconciler retrying the same object always issues the same rollback.
//!
//! Resolution order:
//!
//! 1. Revision: the previous release version, only when that record was
//!    written for the same release name and namespace. A record for another
//!    identity is stale and resolves to `0` (backend picks the latest).
//! 2. Timeout: rollback policy timeout, then the overall timeout, then zero.
//! 3. Policy flags (`force`, wait behaviour, hooks, recreate) from the
//!    rollback policy; `cleanup_on_fail` and `dry_run` start unset.
//! 4. Call-site [`RollbackOption`]s, in order.

mod options;

pub use options::{RollbackOption, cleanup_on_fail, dry_run, to_version};

use crate::backend::{BackendError, ReleaseBackend};
use crate::errors::ActionError;
use crate::types::{DesiredState, ManagedRelease, ReleaseIdentity, ReleaseInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fully resolved rollback parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollbackSettings {
    /// Revision to roll back to; `0` lets the backend pick the latest one.
    pub version: u32,
    /// Time the backend may spend on the rollback; zero means backend default.
    #[serde(with = "duration_str")]
    pub timeout: Duration,
    pub force: bool,
    pub cleanup_on_fail: bool,
    pub dry_run: bool,
    /// Wait for resources to become ready.
    pub wait: bool,
    /// Wait for hook jobs to complete.
    pub wait_for_jobs: bool,
    pub disable_hooks: bool,
    pub recreate: bool,
    pub max_history: u32,
}

/// A rollback ready to be handed to a backend.
///
/// Borrows the backend handle without inspecting it.
pub struct Rollback<'a, B: ?Sized> {
    backend: &'a B,
    pub settings: RollbackSettings,
}

impl<'a, B: ?Sized> Rollback<'a, B> {
    pub fn backend(&self) -> &'a B {
        self.backend
    }

    pub fn into_settings(self) -> RollbackSettings {
        self.settings
    }
}

impl<B: ReleaseBackend + ?Sized> Rollback<'_, B> {
    /// Execute the rollback of `release_name` on the carried backend.
    pub async fn run(&self, release_name: &str) -> Result<(), BackendError> {
        self.backend.rollback(release_name, &self.settings).await
    }
}

impl<B: ?Sized> fmt::Debug for Rollback<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rollback")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Resolve rollback parameters for the release identified by `target`.
pub fn build_rollback<'a, B: ?Sized>(
    backend: &'a B,
    target: &ReleaseIdentity,
    desired: &DesiredState,
    history: Option<&ReleaseInfo>,
    opts: &[RollbackOption],
) -> Rollback<'a, B> {
    let version = match history {
        Some(prev) if prev.belongs_to(target) => prev.version,
        Some(prev) => {
            debug!(
                release = %target,
                history_name = %prev.name,
                history_namespace = %prev.namespace,
                history_version = prev.version,
                "Ignoring stale release history"
            );
            0
        }
        None => 0,
    };

    let policy = desired.rollback.as_ref();
    let timeout = policy
        .and_then(|p| p.timeout)
        .or(desired.timeout)
        .unwrap_or_default();

    let mut settings = RollbackSettings {
        version,
        timeout,
        force: policy.is_some_and(|p| p.force),
        cleanup_on_fail: false,
        dry_run: false,
        wait: !policy.is_some_and(|p| p.disable_wait),
        wait_for_jobs: !policy.is_some_and(|p| p.disable_wait_for_jobs),
        disable_hooks: policy.is_some_and(|p| p.disable_hooks),
        recreate: policy.is_some_and(|p| p.recreate),
        max_history: desired.max_history(),
    };

    for opt in opts {
        opt.apply(&mut settings);
    }

    Rollback { backend, settings }
}

/// Resolve rollback parameters for a managed release object.
pub fn new_rollback<'a, B: ?Sized>(
    backend: &'a B,
    obj: &ManagedRelease,
    opts: &[RollbackOption],
) -> Rollback<'a, B> {
    build_rollback(
        backend,
        &obj.release_identity(),
        &obj.spec,
        obj.status.previous.as_ref(),
        opts,
    )
}

/// Roll back `obj` on `backend`. The backend is called exactly once.
pub async fn rollback<B: ReleaseBackend + ?Sized>(
    backend: &B,
    obj: &ManagedRelease,
    opts: &[RollbackOption],
) -> Result<(), ActionError> {
    let release = obj.release_identity();
    let rollback = new_rollback(backend, obj, opts);
    let settings = &rollback.settings;

    info!(
        release = %release,
        version = settings.version,
        timeout = ?settings.timeout,
        force = settings.force,
        dry_run = settings.dry_run,
        "Rolling back release"
    );

    let result = rollback.run(&release.name).await;
    result.map_err(|source| {
        warn!(release = %release, error = %source, "Rollback failed");
        ActionError::Backend { release, source }
    })
}

/// Timeouts are exchanged as humantime strings (`"1m 30s"`), which keep
/// nanosecond precision.
mod duration_str {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(d)?;
        humantime::parse_duration(raw.trim()).map_err(D::Error::custom)
    }
}
