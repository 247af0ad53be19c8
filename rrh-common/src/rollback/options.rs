//! Call-site overrides applied after declarative resolution.

use super::RollbackSettings;
use std::fmt;

type ApplyFn = dyn Fn(&mut RollbackSettings) + Send + Sync;

/// A modifier applied to resolved [`RollbackSettings`].
///
/// Options run in the order they are supplied, so a later option touching
/// the same field wins.
pub struct RollbackOption(Box<ApplyFn>);

impl RollbackOption {
    /// Wrap an arbitrary modifier.
    pub fn new(f: impl Fn(&mut RollbackSettings) + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn apply(&self, settings: &mut RollbackSettings) {
        (self.0)(settings)
    }
}

impl fmt::Debug for RollbackOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RollbackOption(..)")
    }
}

/// Roll back to a specific revision instead of the resolved one.
pub fn to_version(version: u32) -> RollbackOption {
    RollbackOption::new(move |settings| settings.version = version)
}

/// Simulate the rollback without changing the release.
pub fn dry_run() -> RollbackOption {
    RollbackOption::new(|settings| settings.dry_run = true)
}

/// Delete resources created during a rollback that fails.
pub fn cleanup_on_fail() -> RollbackOption {
    RollbackOption::new(|settings| settings.cleanup_on_fail = true)
}
