//! File system utilities for the state records.
//!
//! Records are replaced as whole files. Writes go to a sibling temp file that
//! is synced and then renamed over the target, so a concurrent reader (the
//! upgrade flow runs in a separate process) sees either the old record or the
//! new one, never a torn write.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or creation fails.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display())),
        Err(_) => fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display())),
    }
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Create parent directories if needed
/// 2. Write content to `<path>.tmp` and sync it to disk
/// 3. Rename the temporary file over `path`
///
/// # Examples
///
/// ```rust,no_run
/// use cc_version_updater::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new(".cache/pending-upgrade.json"), b"{}").await?;
/// # Ok(())
/// # }
/// ```
pub async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).await?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .await
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .await
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().await.with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
