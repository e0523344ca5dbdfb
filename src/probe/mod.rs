//! Version discovery for the installed tool and its latest published release.
//!
//! Both lookups are collaborators with a narrow contract: produce a version
//! string or fail with [`UpdaterError::ProbeUnavailable`]. The controller
//! treats any failure as "cannot determine" and stays silent.
//!
//! # Providers
//!
//! - [`InstalledVersionProvider`] - what is installed right now
//! - [`LatestVersionProvider`] - what the registry says is newest
//!
//! The production implementations run external commands through
//! [`CommandProbe`]:
//!
//! | Provider | Default command | Output handling |
//! |---|---|---|
//! | [`InstalledVersionCommand`] | `claude --version` | first `N.N.N` match |
//! | [`LatestVersionCommand`] | `npm show @anthropic-ai/claude-code version` | trimmed verbatim |
//!
//! Tests substitute fixed-answer fakes from `test_utils`.

pub mod command;

pub use command::CommandProbe;

use crate::core::{BoxFuture, Result, UpdaterError};
use regex::Regex;
use std::sync::LazyLock;

/// Provides the currently installed version.
pub trait InstalledVersionProvider: Send + Sync {
    /// The installed `major.minor.patch` version string.
    fn installed_version(&self) -> BoxFuture<'_, Result<String>>;
}

/// Provides the latest published version.
pub trait LatestVersionProvider: Send + Sync {
    /// The latest published version string.
    fn latest_version(&self) -> BoxFuture<'_, Result<String>>;
}

static VERSION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+)").ok());

/// Extract the first `major.minor.patch` triple from free-form text such as
/// `"1.0.44 (Claude Code)"`.
#[must_use]
pub fn extract_version(output: &str) -> Option<&str> {
    VERSION_PATTERN.as_ref()?.captures(output)?.get(1).map(|m| m.as_str())
}

/// Installed version read from a command's output.
pub struct InstalledVersionCommand {
    probe: CommandProbe,
}

impl InstalledVersionCommand {
    /// Wrap a probe; its output is scanned for a version triple.
    pub const fn new(probe: CommandProbe) -> Self {
        Self { probe }
    }

    async fn probe(&self) -> Result<String> {
        let output = self.probe.run().await?;
        extract_version(&output).map(str::to_string).ok_or_else(|| {
            UpdaterError::probe_unavailable(
                self.probe.name(),
                format!("no version found in output '{output}'"),
            )
        })
    }
}

impl InstalledVersionProvider for InstalledVersionCommand {
    fn installed_version(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(self.probe())
    }
}

/// Latest version taken verbatim from a command's output.
pub struct LatestVersionCommand {
    probe: CommandProbe,
}

impl LatestVersionCommand {
    /// Wrap a probe whose trimmed output is the version.
    pub const fn new(probe: CommandProbe) -> Self {
        Self { probe }
    }
}

impl LatestVersionProvider for LatestVersionCommand {
    fn latest_version(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(self.probe.run())
    }
}
