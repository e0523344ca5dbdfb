//! Maintenance commands: `status` and `clear`.

use super::HookContext;
use crate::state::UpgradeStateStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

/// Print the cache directory and both records.
pub async fn execute(config_flag: Option<&Path>, cache_dir_flag: Option<&Path>) -> Result<()> {
    let context = HookContext::load(config_flag, cache_dir_flag).await?;
    print!("{}", render_status(&context.store).await);
    Ok(())
}

/// Delete both records.
pub async fn clear(config_flag: Option<&Path>, cache_dir_flag: Option<&Path>) -> Result<()> {
    let context = HookContext::load(config_flag, cache_dir_flag).await?;
    context
        .store
        .clear()
        .await
        .with_context(|| format!("Failed to clear {}", context.store.cache_dir().display()))?;
    println!("{} {}", "Cleared".green(), context.store.cache_dir().display());
    Ok(())
}

async fn render_status(store: &UpgradeStateStore) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} {}", "Cache directory:".bold(), store.cache_dir().display());

    let pending = match store.read_pending_upgrade().await {
        Ok(Some(pending)) => {
            let mut line = format!(
                "v{} -> v{} ({} changelog(s), detected {})",
                pending.previous_version,
                pending.latest_version,
                pending.changelogs.len(),
                pending.detected_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            for release in &pending.changelogs {
                let _ = write!(line, "\n  - v{}", release.version);
            }
            line
        }
        Ok(None) => "none".dimmed().to_string(),
        Err(e) => format!("{} ({e})", "unreadable".red()),
    };
    let _ = writeln!(text, "{} {}", "Pending upgrade:".bold(), pending);

    let summary = match store.read_post_upgrade_summary().await {
        Ok(Some(summary)) => format!(
            "v{} -> v{}, waiting to be shown",
            summary.previous_version, summary.latest_version
        ),
        Ok(None) => "none".dimmed().to_string(),
        Err(e) => format!("{} ({e})", "unreadable".red()),
    };
    let _ = writeln!(text, "{} {}", "Post-upgrade summary:".bold(), summary);

    text
}
