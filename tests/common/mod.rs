//! Shared helpers for integration tests.
//!
//! A [`TestPlugin`] is a throwaway plugin root with a `config.toml` whose
//! probes are `echo` commands and whose release URL points at a closed local
//! port, so runs are hermetic and fast.

#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Release URL that refuses connections immediately.
pub const UNREACHABLE_RELEASES_URL: &str = "http://127.0.0.1:9/releases";

/// Test plugin root builder
pub struct TestPlugin {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
}

impl TestPlugin {
    /// Create an empty plugin root
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("plugin");
        fs::create_dir_all(&root)?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Create a plugin root whose probes report the given versions
    pub fn with_versions(installed: &str, latest: &str) -> Result<Self> {
        let plugin = Self::new()?;
        plugin.write_probe_config(installed, latest, false)?;
        Ok(plugin)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default cache directory under the plugin root
    pub fn cache_path(&self) -> PathBuf {
        self.root.join(".cache")
    }

    pub fn pending_path(&self) -> PathBuf {
        self.cache_path().join("pending-upgrade.json")
    }

    pub fn summary_path(&self) -> PathBuf {
        self.cache_path().join("changelog-summary.json")
    }

    /// Write `config.toml` with `echo` probes
    pub fn write_probe_config(&self, installed: &str, latest: &str, color: bool) -> Result<()> {
        self.write_config(&format!(
            r#"
[probes]
installed_command = ["echo", "{installed} (Claude Code)"]
latest_command = ["echo", "{latest}"]
timeout_secs = 10

[releases]
url = "{UNREACHABLE_RELEASES_URL}"
timeout_secs = 5

[display]
color = {color}
"#
        ))
    }

    /// Write `config.toml` verbatim
    pub fn write_config(&self, content: &str) -> Result<()> {
        let path = self.root.join("config.toml");
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Leave a post-upgrade summary as the upgrade flow would
    pub fn write_summary(&self, previous: &str, latest: &str, summary: &str) -> Result<()> {
        fs::create_dir_all(self.cache_path())?;
        let record = serde_json::json!({
            "previousVersion": previous,
            "latestVersion": latest,
            "summary": summary,
        });
        fs::write(self.summary_path(), serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }

    /// Read the pending-upgrade record as JSON
    pub fn read_pending(&self) -> Result<serde_json::Value> {
        let content = fs::read_to_string(self.pending_path())
            .with_context(|| format!("No pending record at {}", self.pending_path().display()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The binary with its environment pinned to this plugin
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cc-version-updater").expect("binary should be built");
        cmd.env("CLAUDE_PLUGIN_ROOT", &self.root)
            .env_remove("CC_VERSION_UPDATER_CONFIG")
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        cmd
    }

    /// Run the hook and return its stdout
    pub fn run_hook(&self) -> Result<String> {
        let output = self.command().output().context("Failed to run hook")?;
        assert!(
            output.status.success(),
            "Hook failed with code {:?}\nStderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Parse the single JSON record a hook run prints
pub fn parse_record(stdout: &str) -> serde_json::Value {
    assert_eq!(stdout.lines().count(), 1, "Expected exactly one record, got: {stdout:?}");
    serde_json::from_str(stdout).expect("hook output should be JSON")
}
