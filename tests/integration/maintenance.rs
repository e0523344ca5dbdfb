use crate::common::TestPlugin;
use predicates::prelude::*;

#[test]
fn test_status_of_fresh_plugin() {
    let plugin = TestPlugin::new().unwrap();

    plugin
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(".cache"))
        .stdout(predicate::str::contains("Pending upgrade: none"))
        .stdout(predicate::str::contains("Post-upgrade summary: none"));
}

#[test]
fn test_status_after_detection() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.1.0").unwrap();
    plugin.run_hook().unwrap();
    plugin.write_summary("0.9.0", "1.0.0", "done").unwrap();

    plugin
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.0.0 -> v1.1.0 (0 changelog(s)"))
        .stdout(predicate::str::contains("v0.9.0 -> v1.0.0, waiting to be shown"));
}

#[test]
fn test_clear_removes_records() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.1.0").unwrap();
    plugin.run_hook().unwrap();
    plugin.write_summary("0.9.0", "1.0.0", "done").unwrap();
    assert!(plugin.pending_path().exists());

    plugin
        .command()
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    assert!(!plugin.pending_path().exists());
    assert!(!plugin.summary_path().exists());

    // Nothing left to clear
    plugin.command().arg("clear").assert().success();
}

#[test]
fn test_maintenance_reports_invalid_config() {
    let plugin = TestPlugin::new().unwrap();
    plugin.write_config("cache_dir = [").unwrap();

    plugin
        .command()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
