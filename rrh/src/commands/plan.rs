//! `rrh plan`: resolve and print rollback parameters.

use super::helpers::{describe_timeout, describe_version};
use anyhow::{Context, Result};
use rrh_common::rollback::{self, RollbackOption};
use rrh_common::{
    DetachedBackend, ManagedRelease, OutputFormat, ReleaseIdentity, RollbackSettings,
    load_manifest, new_rollback,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Call-site overrides requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct PlanOverrides {
    pub dry_run: bool,
    pub cleanup_on_fail: bool,
    pub to_version: Option<u32>,
}

impl PlanOverrides {
    /// Options in application order: dry-run, cleanup-on-fail, to-version.
    pub fn options(&self) -> Vec<RollbackOption> {
        let mut opts = Vec::new();
        if self.dry_run {
            opts.push(rollback::dry_run());
        }
        if self.cleanup_on_fail {
            opts.push(rollback::cleanup_on_fail());
        }
        if let Some(version) = self.to_version {
            opts.push(rollback::to_version(version));
        }
        opts
    }
}

/// Resolved rollback for one release.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollbackPlan {
    pub release: ReleaseIdentity,
    /// History was present but written for another release.
    pub stale_history: bool,
    pub settings: RollbackSettings,
}

pub fn plan(release: &ManagedRelease, overrides: &PlanOverrides) -> RollbackPlan {
    let identity = release.release_identity();
    let stale_history = release
        .status
        .previous
        .as_ref()
        .is_some_and(|prev| !prev.belongs_to(&identity));

    let settings = new_rollback(&DetachedBackend, release, &overrides.options()).into_settings();

    RollbackPlan {
        release: identity,
        stale_history,
        settings,
    }
}

pub fn render_text(plan: &RollbackPlan) -> String {
    let s = &plan.settings;
    let mut out = String::new();
    let _ = writeln!(out, "Release:         {}", plan.release);
    let _ = writeln!(out, "Version:         {}", describe_version(s.version));
    if plan.stale_history {
        let _ = writeln!(out, "                 (previous release is stale and was ignored)");
    }
    let _ = writeln!(out, "Timeout:         {}", describe_timeout(s.timeout));
    let _ = writeln!(out, "Force:           {}", s.force);
    let _ = writeln!(out, "Cleanup on fail: {}", s.cleanup_on_fail);
    let _ = writeln!(out, "Dry run:         {}", s.dry_run);
    let _ = writeln!(out, "Wait:            {}", s.wait);
    let _ = writeln!(out, "Wait for jobs:   {}", s.wait_for_jobs);
    let _ = writeln!(out, "Disable hooks:   {}", s.disable_hooks);
    let _ = writeln!(out, "Recreate:        {}", s.recreate);
    let _ = writeln!(out, "Max history:     {}", s.max_history);
    out
}

pub fn run(manifest: &Path, overrides: &PlanOverrides, format: OutputFormat) -> Result<()> {
    let release = load_manifest(manifest)
        .with_context(|| format!("loading release manifest {}", manifest.display()))?;

    let plan = plan(&release, overrides);
    info!(
        release = %plan.release,
        version = plan.settings.version,
        stale_history = plan.stale_history,
        "Resolved rollback"
    );

    match format {
        OutputFormat::Text => print!("{}", render_text(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}
