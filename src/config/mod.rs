//! Configuration for the updater hook.
//!
//! The hook runs inside a plugin directory and normally needs no
//! configuration at all. An optional `config.toml` can override the probe
//! commands, the releases endpoint, and the notice appearance.
//!
//! # Locations
//!
//! The configuration file is the first of:
//!
//! 1. the `--config` flag
//! 2. the `CC_VERSION_UPDATER_CONFIG` environment variable
//! 3. `config.toml` in the plugin root
//!
//! The plugin root is `CLAUDE_PLUGIN_ROOT` when set, otherwise the parent of
//! the directory holding the executable (plugins ship binaries in `bin/`).
//!
//! The cache directory is the first of the `--cache-dir` flag, the
//! `cache_dir` setting, and `.cache` in the plugin root.

mod settings;

pub use settings::{DisplayConfig, ProbeConfig, ReleaseConfig, UpdaterConfig};

use crate::changelog::GitHubReleaseSource;
use crate::constants::{CACHE_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, PLUGIN_ROOT_ENV_VAR};
use crate::probe::{CommandProbe, InstalledVersionCommand, LatestVersionCommand};
use crate::utils::resolve_path;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Determine the plugin root from the environment and the running executable.
///
/// # Errors
///
/// Fails when `CLAUDE_PLUGIN_ROOT` is unset and the executable path cannot be
/// determined.
pub fn plugin_root() -> Result<PathBuf> {
    let from_env = std::env::var_os(PLUGIN_ROOT_ENV_VAR).map(PathBuf::from);
    let exe = match &from_env {
        Some(_) => None,
        None => Some(std::env::current_exe().context("Failed to locate the running executable")?),
    };
    plugin_root_from(from_env, exe.as_deref())
}

/// Plugin root from an explicit environment value or executable path.
pub fn plugin_root_from(env_root: Option<PathBuf>, exe: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = env_root.filter(|root| !root.as_os_str().is_empty()) {
        return Ok(root);
    }

    let exe = exe.context("No executable path to derive the plugin root from")?;
    let bin_dir = exe.parent().context("Executable path has no parent directory")?;
    Ok(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}

/// Pick the configuration file path.
pub fn config_path(cli_path: Option<&Path>, env_path: Option<PathBuf>, plugin_root: &Path) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    plugin_root.join(CONFIG_FILE_NAME)
}

/// Pick the configuration file path, reading the environment override.
pub fn default_config_path(cli_path: Option<&Path>, plugin_root: &Path) -> PathBuf {
    config_path(cli_path, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), plugin_root)
}

/// Pick the cache directory.
///
/// # Errors
///
/// Fails when the configured `cache_dir` references an undefined variable.
pub fn resolve_cache_dir(
    cli_dir: Option<&Path>,
    config: &UpdaterConfig,
    plugin_root: &Path,
) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.cache_dir {
        return resolve_path(dir).with_context(|| format!("Invalid cache_dir '{dir}'"));
    }
    Ok(plugin_root.join(CACHE_DIR_NAME))
}

impl UpdaterConfig {
    /// Provider running the installed-version command.
    #[must_use]
    pub fn installed_provider(&self) -> InstalledVersionCommand {
        InstalledVersionCommand::new(
            CommandProbe::new("installed-version", self.probes.installed_command.iter())
                .with_timeout(self.probes.timeout()),
        )
    }

    /// Provider running the latest-version command.
    #[must_use]
    pub fn latest_provider(&self) -> LatestVersionCommand {
        LatestVersionCommand::new(
            CommandProbe::new("latest-version", self.probes.latest_command.iter())
                .with_timeout(self.probes.timeout()),
        )
    }

    /// Release source for changelog lookups.
    #[must_use]
    pub fn release_source(&self) -> GitHubReleaseSource {
        GitHubReleaseSource::new()
            .with_url(self.releases.url.clone())
            .with_timeout(self.releases.timeout())
    }
}
