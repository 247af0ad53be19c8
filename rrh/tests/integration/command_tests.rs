use std::process::Command;

use crate::common::{assert_contains, init_test_logging};

#[test]
fn test_rrh_help_includes_description() {
    init_test_logging();
    crate::test_log!("TEST START: test_rrh_help_includes_description");

    let output = Command::new(env!("CARGO_BIN_EXE_rrh"))
        .arg("--help")
        .output()
        .expect("Failed to run rrh --help");

    assert!(output.status.success(), "rrh --help failed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_contains(&stdout, "Release Rollback Helper");
    assert_contains(&stdout, "plan");
    crate::test_log!("TEST PASS: test_rrh_help_includes_description");
}
