use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const RELEASE_YAML: &str = r#"apiVersion: helm.toolkit.fluxcd.io/v2
kind: HelmRelease
metadata:
  name: rollback
  namespace: rollback-ns
spec:
  timeout: 1m
  rollback:
    timeout: 10s
    force: true
status:
  previous:
    name: rollback
    namespace: rollback-ns
    version: 3
"#;

/// Temp directory with an empty config file, isolating runs from the
/// user's own configuration.
pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        crate::test_log!("FIXTURE: Creating test workspace");

        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = dir.path().join("config.toml");
        fs::write(&config, "").expect("Failed to write config.toml");
        Self { dir, config }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Run `rrh` with this workspace's config and a clean RRH_* environment.
    pub fn rrh(&self, args: &[&str]) -> Output {
        rrh_command(&self.config)
            .args(args)
            .output()
            .expect("Failed to run rrh")
    }
}

pub fn rrh_command(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rrh"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("RRH_LOG_LEVEL")
        .env_remove("RRH_LOG_FORMAT")
        .env_remove("RRH_OUTPUT_FORMAT");
    cmd
}
