//! Resolution shared by every command: plugin root, configuration, store.

use crate::config::{self, UpdaterConfig};
use crate::state::{StoreConfig, UpgradeStateStore};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Everything a command needs, resolved from flags, environment and files.
#[derive(Debug)]
pub struct HookContext {
    /// Loaded configuration (defaults when no file exists).
    pub config: UpdaterConfig,
    /// Store over the resolved cache directory.
    pub store: UpgradeStateStore,
}

impl HookContext {
    /// Resolve the plugin root, load configuration and open the store.
    ///
    /// # Errors
    ///
    /// Fails when the plugin root cannot be determined, the configuration
    /// file is invalid, or `cache_dir` cannot be expanded.
    pub async fn load(config_flag: Option<&Path>, cache_dir_flag: Option<&Path>) -> Result<Self> {
        let root = config::plugin_root()?;
        let config_path = config::default_config_path(config_flag, &root);
        let config = UpdaterConfig::load_or_default(&config_path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
        let cache_dir = config::resolve_cache_dir(cache_dir_flag, &config, &root)?;

        debug!(
            "Plugin root {}, config {}, cache {}",
            root.display(),
            config_path.display(),
            cache_dir.display()
        );

        Ok(Self {
            config,
            store: UpgradeStateStore::new(StoreConfig::new(cache_dir)),
        })
    }
}
