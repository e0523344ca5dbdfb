//! Persistent upgrade state shared with the upgrade flow.
//!
//! Two JSON records live side by side in the cache directory, each in its own
//! fixed file:
//!
//! | Record | File | Written by | Consumed by |
//! |---|---|---|---|
//! | [`PendingUpgrade`] | `pending-upgrade.json` | this hook | upgrade flow |
//! | [`PostUpgradeSummary`] | `changelog-summary.json` | upgrade flow | this hook (once) |
//!
//! Writes replace the whole file atomically; there is no locking between the
//! hook and the upgrade flow. A record that fails to parse is reported as
//! [`UpdaterError::StateCorruption`] and left on disk untouched.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cc_version_updater::state::{PendingUpgrade, StoreConfig, UpgradeStateStore};
//!
//! # async fn example() -> cc_version_updater::core::Result<()> {
//! let store = UpgradeStateStore::new(StoreConfig::new("/path/to/plugin/.cache"));
//!
//! if let Some(summary) = store.read_post_upgrade_summary().await? {
//!     println!("{}", summary.summary);
//!     store.remove_post_upgrade_summary().await?;
//! }
//!
//! store.write_pending_upgrade(&PendingUpgrade::new("1.0.0", "1.1.0", Vec::new())).await?;
//! # Ok(())
//! # }
//! ```

mod records;

pub use records::{PendingUpgrade, PostUpgradeSummary};

use crate::constants::{CHANGELOG_SUMMARY_FILE, PENDING_UPGRADE_FILE};
use crate::core::{Result, UpdaterError};
use crate::utils::fs::atomic_write;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Where the store keeps its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding both record files; created on first write.
    pub cache_dir: PathBuf,
}

impl StoreConfig {
    /// Store records under `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }
}

/// File-backed store for the pending-upgrade and post-upgrade-summary records.
#[derive(Debug, Clone)]
pub struct UpgradeStateStore {
    config: StoreConfig,
}

impl UpgradeStateStore {
    /// Create a store over the configured cache directory.
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The directory holding the records.
    pub fn cache_dir(&self) -> &Path {
        &self.config.cache_dir
    }

    /// Path of the pending-upgrade record.
    pub fn pending_upgrade_path(&self) -> PathBuf {
        self.config.cache_dir.join(PENDING_UPGRADE_FILE)
    }

    /// Path of the post-upgrade summary record.
    pub fn summary_path(&self) -> PathBuf {
        self.config.cache_dir.join(CHANGELOG_SUMMARY_FILE)
    }

    /// Read the post-upgrade summary, if one is waiting.
    ///
    /// # Errors
    ///
    /// [`UpdaterError::StateCorruption`] if the file is not a valid summary,
    /// [`UpdaterError::Io`] if it exists but cannot be read.
    pub async fn read_post_upgrade_summary(&self) -> Result<Option<PostUpgradeSummary>> {
        read_record(&self.summary_path()).await
    }

    /// Delete the post-upgrade summary. A missing file is not an error.
    pub async fn remove_post_upgrade_summary(&self) -> Result<()> {
        remove_record(&self.summary_path()).await
    }

    /// Write a post-upgrade summary. Used by the upgrade flow and tests.
    pub async fn write_post_upgrade_summary(&self, summary: &PostUpgradeSummary) -> Result<()> {
        write_record(&self.summary_path(), summary).await
    }

    /// Read the pending-upgrade record, if any.
    pub async fn read_pending_upgrade(&self) -> Result<Option<PendingUpgrade>> {
        read_record(&self.pending_upgrade_path()).await
    }

    /// Replace the pending-upgrade record, creating the cache directory if needed.
    pub async fn write_pending_upgrade(&self, pending: &PendingUpgrade) -> Result<()> {
        write_record(&self.pending_upgrade_path(), pending).await
    }

    /// Remove both records.
    pub async fn clear(&self) -> Result<()> {
        remove_record(&self.pending_upgrade_path()).await?;
        remove_record(&self.summary_path()).await
    }
}

async fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No state record at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content).map(Some).map_err(|e| UpdaterError::StateCorruption {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

async fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let state_write = |reason: String| UpdaterError::StateWrite {
        path: path.display().to_string(),
        reason,
    };

    let content = serde_json::to_string_pretty(record).map_err(|e| state_write(e.to_string()))?;
    atomic_write(path, content.as_bytes()).await.map_err(|e| state_write(format!("{e:#}")))?;

    debug!("Saved state record to {}", path.display());
    Ok(())
}

async fn remove_record(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed state record {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(UpdaterError::StateWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
