//! Release model shared by the rollback builder, the runner, and the CLI.
//!
//! The shapes mirror a Helm release custom resource: `metadata` carries the
//! object identity, `spec` the user-declared [`DesiredState`] and `status`
//! the controller's observed history. Absent optional fields stay `None`
//! instead of being filled with sentinels so the rollback resolution can
//! match on presence.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of release revisions the backend keeps when `maxHistory` is unset.
pub const DEFAULT_MAX_HISTORY: u32 = 5;

/// Name and namespace of a backend release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseIdentity {
    pub name: String,
    pub namespace: String,
}

impl ReleaseIdentity {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Display for ReleaseIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A managed release as read from the cluster (or a manifest file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRelease {
    pub metadata: ReleaseMetadata,
    #[serde(default)]
    pub spec: DesiredState,
    #[serde(default)]
    pub status: ReleaseStatus,
}

/// Object identity of the managed resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

/// User-declared configuration for the managed release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredState {
    /// Backend release name, when it differs from the object name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_name: Option<String>,
    /// Namespace the release is installed into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_namespace: Option<String>,
    /// Overall timeout for backend operations.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "duration_str")]
    pub timeout: Option<Duration>,
    /// Revisions the backend retains per release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history: Option<u32>,
    /// Rollback policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollback: Option<RollbackPolicy>,
}

impl DesiredState {
    /// Revision limit with the backend default applied.
    pub fn max_history(&self) -> u32 {
        self.max_history.unwrap_or(DEFAULT_MAX_HISTORY)
    }
}

/// Rollback section of the desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackPolicy {
    /// Timeout for the rollback alone; overrides [`DesiredState::timeout`].
    #[serde(default, skip_serializing_if = "Option::is_none", with = "duration_str")]
    pub timeout: Option<Duration>,
    /// Force resource updates through delete/recreate when needed.
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub disable_wait: bool,
    #[serde(default)]
    pub disable_wait_for_jobs: bool,
    #[serde(default)]
    pub disable_hooks: bool,
    /// Restart pods of the rolled back resources.
    #[serde(default)]
    pub recreate: bool,
}

/// Observed state written by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseStatus {
    /// Most recent previously successful release, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<ReleaseInfo>,
}

/// Historical release record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub name: String,
    pub namespace: String,
    pub version: u32,
}

impl ReleaseInfo {
    /// Whether this record was written for `target`.
    pub fn belongs_to(&self, target: &ReleaseIdentity) -> bool {
        self.name == target.name && self.namespace == target.namespace
    }
}

impl ManagedRelease {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            metadata: ReleaseMetadata {
                name: name.into(),
                namespace: namespace.into(),
            },
            ..Self::default()
        }
    }

    /// Name of the release in the backend.
    ///
    /// An explicit `releaseName` wins. Otherwise a `targetNamespace` prefixes
    /// the object name so releases of same-named objects from different
    /// namespaces cannot collide in the target namespace.
    pub fn release_name(&self) -> String {
        if let Some(name) = non_empty(&self.spec.release_name) {
            return name.to_string();
        }
        match non_empty(&self.spec.target_namespace) {
            Some(ns) => format!("{}-{}", ns, self.metadata.name),
            None => self.metadata.name.clone(),
        }
    }

    /// Namespace of the release in the backend.
    pub fn release_namespace(&self) -> String {
        non_empty(&self.spec.target_namespace)
            .unwrap_or(&self.metadata.namespace)
            .to_string()
    }

    pub fn release_identity(&self) -> ReleaseIdentity {
        ReleaseIdentity::new(self.release_name(), self.release_namespace())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Serde adapter for optional human-readable durations ("10s", "1m30s").
mod duration_str {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_str(&humantime::format_duration(*d).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| humantime::parse_duration(s.trim()).map_err(D::Error::custom))
            .transpose()
    }
}
