//! Presentation of hook notices.
//!
//! The controller decides *what* to say; this module decides how it looks.
//! Terminal styling is applied with `colored`, and the upgrade flow's summary
//! text is rendered here (its literal `\033` markers become real escape
//! characters) so the state records stay plain text.

use crate::constants::{CONTEXT_TAG, DEFAULT_PRODUCT_NAME, DEFAULT_UPGRADE_COMMAND};
use crate::hooks::HookOutput;
use crate::state::PostUpgradeSummary;
use colored::Colorize;

const FRAME: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Display settings for notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSettings {
    /// Name of the tool being tracked, e.g. "Claude Code".
    pub product_name: String,
    /// Command that applies a pending upgrade, e.g. "/update-claude".
    pub upgrade_command: String,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            upgrade_command: DEFAULT_UPGRADE_COMMAND.to_string(),
        }
    }
}

/// Qualifier appended to the version line: ` (N versions)` for N > 1, else nothing.
#[must_use]
pub fn version_qualifier(version_count: usize) -> String {
    if version_count > 1 {
        format!(" ({version_count} versions)")
    } else {
        String::new()
    }
}

/// Replace literal `\033` markers with the ESC character.
#[must_use]
pub fn render_escape_sequences(text: &str) -> String {
    text.replace("\\033", "\x1b")
}

/// Notice announcing that `latest` is available while `current` is installed.
#[must_use]
pub fn update_notice(
    current: &str,
    latest: &str,
    version_count: usize,
    settings: &NoticeSettings,
) -> HookOutput {
    let frame = FRAME.blue().bold();
    let headline = format!("   New {} version available!", settings.product_name);
    let versions = format!(
        "   Current: v{current}  →  Latest: v{latest}{}",
        version_qualifier(version_count)
    );

    let system_message = format!(
        "\n{frame}\n{}\n\n{}\n\n{} {} {}\n{frame}",
        headline.blue().bold(),
        versions.blue().bold(),
        "   Run".blue().bold(),
        settings.upgrade_command.truecolor(255, 135, 0),
        "to upgrade.".blue().bold(),
    );

    let context = format!(
        "A new version v{latest} of {product} is available ({version_count} version(s) to upgrade). \
         The current version is v{current}. If the user wants to upgrade, guide them to use the {command} command.",
        product = settings.product_name,
        command = settings.upgrade_command,
    );

    HookOutput::message(system_message, Some(context))
}

/// Notice displaying a post-upgrade summary.
#[must_use]
pub fn summary_notice(summary: &PostUpgradeSummary, settings: &NoticeSettings) -> HookOutput {
    let system_message = format!("\n{}", render_escape_sequences(&summary.summary));
    let context = format!(
        "{CONTEXT_TAG} {product} has been upgraded from v{previous} to v{latest}. \
         The summary above has been displayed. If the user asks follow-up questions, \
         refer to the changelog-interpreter skill for guidance.",
        product = settings.product_name,
        previous = summary.previous_version,
        latest = summary.latest_version,
    );

    HookOutput::message(system_message, Some(context))
}
