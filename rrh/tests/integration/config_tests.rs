use crate::common::{TestWorkspace, assert_contains, init_test_logging};

#[test]
fn test_config_reports_file_values() {
    init_test_logging();
    crate::test_log!("TEST START: test_config_reports_file_values");

    let ws = TestWorkspace::new();
    std::fs::write(&ws.config, "[output]\nformat = \"json\"\n").expect("write config");

    let output = ws.rrh(&["config"]);
    assert!(output.status.success(), "rrh config failed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_contains(&stdout, "output.format: json (file)");
    assert_contains(&stdout, "log_level:     warn (default)");
    crate::test_log!("TEST PASS: test_config_reports_file_values");
}

#[test]
fn test_config_reports_env_override() {
    init_test_logging();
    crate::test_log!("TEST START: test_config_reports_env_override");

    let ws = TestWorkspace::new();
    let output = crate::common::fixtures::rrh_command(&ws.config)
        .env("RRH_OUTPUT_FORMAT", "json")
        .arg("config")
        .output()
        .expect("Failed to run rrh config");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_contains(&stdout, "output.format: json (environment: RRH_OUTPUT_FORMAT)");
    crate::test_log!("TEST PASS: test_config_reports_env_override");
}

#[test]
fn test_invalid_config_fails_with_code() {
    init_test_logging();
    crate::test_log!("TEST START: test_invalid_config_fails_with_code");

    let ws = TestWorkspace::new();
    std::fs::write(&ws.config, "[general\n").expect("write config");

    let output = ws.rrh(&["config"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "[RRH-E002]");
    crate::test_log!("TEST PASS: test_invalid_config_fails_with_code");
}

#[test]
fn test_invalid_file_log_level_fails_with_code() {
    init_test_logging();
    crate::test_log!("TEST START: test_invalid_file_log_level_fails_with_code");

    let ws = TestWorkspace::new();
    std::fs::write(&ws.config, "[general]\nlog_level = \"rrh=chatty\"\n").expect("write config");

    let output = ws.rrh(&["config"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "[RRH-E004]");
    assert_contains(&stderr, "general.log_level");
    crate::test_log!("TEST PASS: test_invalid_file_log_level_fails_with_code");
}
