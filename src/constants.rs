//! Global constants used throughout the cc-version-updater codebase.
//!
//! File names, default probe commands and display strings live here so the
//! defaults in [`crate::config`] and the tests agree on a single value.

/// Name of the cache directory created under the plugin root.
pub const CACHE_DIR_NAME: &str = ".cache";

/// File holding a detected-but-not-yet-applied upgrade.
pub const PENDING_UPGRADE_FILE: &str = "pending-upgrade.json";

/// File holding the one-shot post-upgrade summary.
pub const CHANGELOG_SUMMARY_FILE: &str = "changelog-summary.json";

/// Name of the configuration file looked up in the plugin root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "CC_VERSION_UPDATER_CONFIG";

/// Environment variable Claude Code sets to the root of the running plugin.
pub const PLUGIN_ROOT_ENV_VAR: &str = "CLAUDE_PLUGIN_ROOT";

/// Release list for Claude Code; the last 20 releases are enough to cover any
/// realistic gap between sessions.
pub const DEFAULT_RELEASES_URL: &str =
    "https://api.github.com/repos/anthropics/claude-code/releases?per_page=20";

/// User agent sent to the GitHub API, which rejects anonymous agents.
pub const USER_AGENT: &str = "cc-version-updater";

/// Command printing the installed Claude Code version.
pub const DEFAULT_INSTALLED_COMMAND: [&str; 2] = ["claude", "--version"];

/// Command printing the latest published Claude Code version.
pub const DEFAULT_LATEST_COMMAND: [&str; 4] = ["npm", "show", "@anthropic-ai/claude-code", "version"];

/// Product name shown in notices.
pub const DEFAULT_PRODUCT_NAME: &str = "Claude Code";

/// Slash command that applies a pending upgrade.
pub const DEFAULT_UPGRADE_COMMAND: &str = "/update-claude";

/// Placeholder stored when a release has no body.
pub const NO_CHANGELOG_PLACEHOLDER: &str = "No changelog available";

/// Placeholder shown when a summary record has no summary text.
pub const NO_SUMMARY_PLACEHOLDER: &str = "Summary not available";

/// Placeholder for missing versions in a summary record.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Tag prefixed to hook context so the model can attribute it.
pub const CONTEXT_TAG: &str = "[cc-version-updater]";
