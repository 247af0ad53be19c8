use crate::common::fixtures::RELEASE_YAML;
use crate::common::{TestWorkspace, assert_contains, init_test_logging};

#[test]
fn test_plan_text_output() {
    init_test_logging();
    crate::test_log!("TEST START: test_plan_text_output");

    let ws = TestWorkspace::new();
    let manifest = ws.write("release.yaml", RELEASE_YAML);

    let output = ws.rrh(&["plan", manifest.to_str().unwrap()]);
    assert!(output.status.success(), "rrh plan failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_contains(&stdout, "Release:         rollback-ns/rollback");
    assert_contains(&stdout, "Version:         3");
    assert_contains(&stdout, "Timeout:         10s");
    assert_contains(&stdout, "Force:           true");
    assert_contains(&stdout, "Dry run:         false");
    crate::test_log!("TEST PASS: test_plan_text_output");
}

#[test]
fn test_plan_json_with_overrides() {
    init_test_logging();
    crate::test_log!("TEST START: test_plan_json_with_overrides");

    let ws = TestWorkspace::new();
    let manifest = ws.write("release.yaml", RELEASE_YAML);

    let output = ws.rrh(&[
        "plan",
        manifest.to_str().unwrap(),
        "--format",
        "json",
        "--dry-run",
        "--cleanup-on-fail",
        "--to-version",
        "2",
    ]);
    assert!(output.status.success(), "rrh plan failed: {:?}", output);

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output is JSON");
    assert_eq!(plan["release"]["name"], "rollback");
    assert_eq!(plan["settings"]["version"], 2);
    assert_eq!(plan["settings"]["timeout"], "10s");
    assert_eq!(plan["settings"]["dry_run"], true);
    assert_eq!(plan["settings"]["cleanup_on_fail"], true);
    crate::test_log!("TEST PASS: test_plan_json_with_overrides");
}

#[test]
fn test_plan_ignores_stale_history() {
    init_test_logging();
    crate::test_log!("TEST START: test_plan_ignores_stale_history");

    let ws = TestWorkspace::new();
    let manifest = ws.write(
        "release.json",
        r#"{
            "metadata": {"name": "rollback", "namespace": "rollback-ns"},
            "spec": {"timeout": "1m"},
            "status": {"previous": {"name": "rollback", "namespace": "other-ns", "version": 3}}
        }"#,
    );

    let output = ws.rrh(&["plan", manifest.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "rrh plan failed: {:?}", output);

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output is JSON");
    assert_eq!(plan["stale_history"], true);
    assert_eq!(plan["settings"]["version"], 0);
    assert_eq!(plan["settings"]["timeout"], "1m");
    assert_eq!(plan["settings"]["force"], false);
    crate::test_log!("TEST PASS: test_plan_ignores_stale_history");
}

#[test]
fn test_plan_missing_manifest_reports_code() {
    init_test_logging();
    crate::test_log!("TEST START: test_plan_missing_manifest_reports_code");

    let ws = TestWorkspace::new();
    let missing = ws.dir.path().join("absent.yaml");

    let output = ws.rrh(&["plan", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "loading release manifest");
    assert_contains(&stderr, "[RRH-E100]");
    crate::test_log!("TEST PASS: test_plan_missing_manifest_reports_code");
}
