use crate::constants::{
    DEFAULT_INSTALLED_COMMAND, DEFAULT_LATEST_COMMAND, DEFAULT_PRODUCT_NAME, DEFAULT_RELEASES_URL,
    DEFAULT_UPGRADE_COMMAND,
};
use crate::core::{Result, UpdaterError};
use crate::notice::NoticeSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Settings loaded from `config.toml`.
///
/// Every field has a default, so an absent file and an empty file behave the
/// same.
///
/// # TOML Example
///
/// ```toml
/// cache_dir = "~/.cache/cc-version-updater"
///
/// [probes]
/// installed_command = ["claude", "--version"]
/// latest_command = ["npm", "show", "@anthropic-ai/claude-code", "version"]
/// timeout_secs = 0
///
/// [releases]
/// url = "https://api.github.com/repos/anthropics/claude-code/releases?per_page=20"
/// timeout_secs = 0
///
/// [display]
/// product_name = "Claude Code"
/// upgrade_command = "/update-claude"
/// color = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Directory for the state records; `~` and `$VAR` are expanded.
    ///
    /// Defaults to `.cache` under the plugin root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,

    /// External commands answering the version questions.
    #[serde(default)]
    pub probes: ProbeConfig,

    /// Release list used for changelogs.
    #[serde(default)]
    pub releases: ReleaseConfig,

    /// Notice appearance.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Version probe commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Command printing the installed version (program first).
    #[serde(default = "default_installed_command")]
    pub installed_command: Vec<String>,

    /// Command printing the latest published version (program first).
    #[serde(default = "default_latest_command")]
    pub latest_command: Vec<String>,

    /// Per-command timeout in seconds; `0` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            installed_command: default_installed_command(),
            latest_command: default_latest_command(),
            timeout_secs: 0,
        }
    }
}

impl ProbeConfig {
    /// The configured timeout, `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        secs_to_timeout(self.timeout_secs)
    }
}

/// Release list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    /// GitHub releases API URL including the page size.
    #[serde(default = "default_releases_url")]
    pub url: String,

    /// Request timeout in seconds; `0` leaves the request unbounded.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            url: default_releases_url(),
            timeout_secs: 0,
        }
    }
}

impl ReleaseConfig {
    /// The configured timeout, `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        secs_to_timeout(self.timeout_secs)
    }
}

/// Notice appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Name of the tracked tool.
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Slash command that applies the upgrade.
    #[serde(default = "default_upgrade_command")]
    pub upgrade_command: String,

    /// Emit ANSI colors. Hook stdout is never a terminal, so colors are forced
    /// on unless this is `false`.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            upgrade_command: default_upgrade_command(),
            color: default_color(),
        }
    }
}

impl DisplayConfig {
    /// Notice settings derived from this configuration.
    #[must_use]
    pub fn notice_settings(&self) -> NoticeSettings {
        NoticeSettings {
            product_name: self.product_name.clone(),
            upgrade_command: self.upgrade_command.clone(),
        }
    }
}

const fn secs_to_timeout(secs: u64) -> Option<Duration> {
    if secs == 0 { None } else { Some(Duration::from_secs(secs)) }
}

fn default_installed_command() -> Vec<String> {
    DEFAULT_INSTALLED_COMMAND.iter().map(|s| (*s).to_string()).collect()
}

fn default_latest_command() -> Vec<String> {
    DEFAULT_LATEST_COMMAND.iter().map(|s| (*s).to_string()).collect()
}

fn default_releases_url() -> String {
    DEFAULT_RELEASES_URL.to_string()
}

fn default_product_name() -> String {
    DEFAULT_PRODUCT_NAME.to_string()
}

fn default_upgrade_command() -> String {
    DEFAULT_UPGRADE_COMMAND.to_string()
}

const fn default_color() -> bool {
    true
}

impl UpdaterConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// [`UpdaterError::ConfigError`] when the file exists but cannot be read
    /// or is not valid configuration.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path).await
    }

    /// Load from `path`.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let config_error = |reason: String| UpdaterError::ConfigError {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(path).await.map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }
}
