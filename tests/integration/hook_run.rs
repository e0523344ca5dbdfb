use crate::common::{TestPlugin, parse_record};
use predicates::prelude::*;

#[test]
fn test_same_version_prints_empty_record() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.0.0").unwrap();

    plugin.command().assert().success().stdout("{}\n");
    assert!(!plugin.pending_path().exists());
}

#[test]
fn test_check_subcommand_matches_default_run() {
    let plugin = TestPlugin::with_versions("2.0.0", "1.9.9").unwrap();

    plugin.command().arg("check").assert().success().stdout("{}\n");
}

#[test]
fn test_update_available_notice_and_pending_record() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.1.0").unwrap();

    let stdout = plugin.run_hook().unwrap();
    let record = parse_record(&stdout);

    let message = record["systemMessage"].as_str().unwrap();
    assert!(message.contains("New Claude Code version available!"));
    assert!(message.contains("Current: v1.0.0  →  Latest: v1.1.0"));
    assert!(!message.contains("versions)"));
    assert!(message.contains("Run /update-claude to upgrade."));
    assert!(!message.contains('\u{1b}'));

    let context = record["additionalContext"].as_str().unwrap();
    assert!(context.contains("A new version v1.1.0 of Claude Code is available (1 version(s) to upgrade)."));

    // The release list is unreachable, so no changelogs were recorded
    let pending = plugin.read_pending().unwrap();
    assert_eq!(pending["previousVersion"], "1.0.0");
    assert_eq!(pending["latestVersion"], "1.1.0");
    assert_eq!(pending["changelogs"], serde_json::json!([]));
    assert!(pending["detectedAt"].is_string());
}

#[test]
fn test_notice_is_colored_by_default() {
    let plugin = TestPlugin::new().unwrap();
    plugin.write_probe_config("1.0.0", "1.1.0", true).unwrap();

    let record = parse_record(&plugin.run_hook().unwrap());
    let message = record["systemMessage"].as_str().unwrap();
    assert!(message.contains("\u{1b}["));
    assert!(message.contains("━━━━"));
}

#[test]
fn test_summary_is_shown_once() {
    let plugin = TestPlugin::with_versions("1.1.0", "1.1.0").unwrap();
    plugin
        .write_summary("1.0.0", "1.1.0", "\\033[1mWhat's new\\033[0m")
        .unwrap();

    let record = parse_record(&plugin.run_hook().unwrap());
    assert_eq!(record["systemMessage"], "\n\u{1b}[1mWhat's new\u{1b}[0m");
    assert!(
        record["additionalContext"]
            .as_str()
            .unwrap()
            .starts_with("[cc-version-updater] Claude Code has been upgraded from v1.0.0 to v1.1.0.")
    );
    assert!(!plugin.summary_path().exists());

    plugin.command().assert().success().stdout("{}\n");
}

#[test]
fn test_corrupt_summary_falls_through_to_version_check() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.0.0").unwrap();
    std::fs::create_dir_all(plugin.cache_path()).unwrap();
    std::fs::write(plugin.summary_path(), "{ truncated").unwrap();

    plugin.command().assert().success().stdout("{}\n");
    assert!(plugin.summary_path().exists());
}

#[test]
fn test_missing_probe_program_is_silent() {
    let plugin = TestPlugin::new().unwrap();
    plugin
        .write_config(
            r#"
[probes]
installed_command = ["cc-version-updater-test-no-such-program", "--version"]
latest_command = ["echo", "9.9.9"]
"#,
        )
        .unwrap();

    plugin.command().assert().success().stdout("{}\n");
    assert!(!plugin.pending_path().exists());
}

#[test]
fn test_prerelease_latest_is_ignored() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.1.0-beta.1").unwrap();

    plugin.command().assert().success().stdout("{}\n");
}

#[test]
fn test_invalid_config_prints_empty_record() {
    let plugin = TestPlugin::new().unwrap();
    plugin.write_config("[probes\n").unwrap();

    plugin
        .command()
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_unwritable_cache_prints_empty_record() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.1.0").unwrap();
    let blocker = plugin.root().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    plugin
        .command()
        .arg("--cache-dir")
        .arg(blocker.join("cache"))
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_verbose_logs_only_to_stderr() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.0.0").unwrap();

    plugin
        .command()
        .arg("--verbose")
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_cache_dir_flag_overrides_default() {
    let plugin = TestPlugin::with_versions("1.0.0", "1.2.0").unwrap();
    let custom = plugin.root().join("custom-cache");

    plugin.command().arg("--cache-dir").arg(&custom).assert().success();

    assert!(custom.join("pending-upgrade.json").exists());
    assert!(!plugin.pending_path().exists());
}

#[test]
fn test_config_env_var_selects_file() {
    let plugin = TestPlugin::new().unwrap();
    let other = plugin.root().join("other.toml");
    std::fs::write(
        &other,
        r#"
[probes]
installed_command = ["echo", "3.0.0"]
latest_command = ["echo", "3.0.1"]

[releases]
url = "http://127.0.0.1:9/releases"

[display]
product_name = "Widget"
upgrade_command = "/update-widget"
color = false
"#,
    )
    .unwrap();

    let output = plugin
        .command()
        .env("CC_VERSION_UPDATER_CONFIG", &other)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record = parse_record(&String::from_utf8(output.stdout).unwrap());
    let message = record["systemMessage"].as_str().unwrap();
    assert!(message.contains("New Widget version available!"));
    assert!(message.contains("/update-widget"));
}
