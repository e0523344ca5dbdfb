//! Path handling for user-supplied configuration values.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolves a configured path, expanding a leading `~` and `$VAR`/`${VAR}`
/// references.
///
/// # Examples
///
/// ```rust,no_run
/// use cc_version_updater::utils::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let dir = resolve_path("~/.cache/cc-version-updater")?;
/// let dir = resolve_path("$XDG_CACHE_HOME/cc-version-updater")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails when a referenced environment variable is undefined or the home
/// directory cannot be determined.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path).with_context(|| {
        format!(
            "Failed to expand path: {path}\n\n\
            Common issues:\n\
            - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
            - Invalid variable syntax (use $VAR or ${{VAR}})"
        )
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}
