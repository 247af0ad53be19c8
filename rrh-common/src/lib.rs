//! Release Rollback Helper - shared library.
//!
//! Resolves the parameters of a Helm release rollback from the release's
//! desired state and observed history, and hands them to a backend.

pub mod backend;
pub mod config;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod rollback;
pub mod testing;
pub mod types;

pub use backend::{BackendError, DetachedBackend, ReleaseBackend};
pub use config::{LoadedConfig, OutputFormat, RrhConfig, load_config};
pub use errors::{ActionError, ErrorCode};
pub use logging::{LogConfig, LogFormat, init_logging};
pub use manifest::{ManifestError, load_manifest};
pub use rollback::{
    Rollback, RollbackOption, RollbackSettings, build_rollback, new_rollback, rollback,
};
pub use types::{
    DEFAULT_MAX_HISTORY, DesiredState, ManagedRelease, ReleaseIdentity, ReleaseInfo,
    ReleaseMetadata, ReleaseStatus, RollbackPolicy,
};
