//! The notification state machine run once per session start.
//!
//! ```text
//! CheckingSummary ──found──> display, consume ──> Done
//!        │
//!      absent
//!        v
//! CheckingVersions ──cannot determine / up to date──> {} ──> Done
//!        │
//!      stale
//!        v
//! Reconciling ──> Persisting ──> Notifying ──> Done
//! ```
//!
//! A waiting post-upgrade summary always wins over a new version check. Every
//! path writes exactly one record to the output; errors returned from
//! [`NotificationController::run`] happen before anything was written, so the
//! caller can still emit `{}`.

use crate::changelog::{ReleaseSource, fetch_changelogs};
use crate::core::{Result, UpdaterError};
use crate::hooks::HookOutput;
use crate::notice::{NoticeSettings, summary_notice, update_notice};
use crate::probe::{InstalledVersionProvider, LatestVersionProvider};
use crate::state::{PendingUpgrade, PostUpgradeSummary, UpgradeStateStore};
use crate::version::Version;
use std::io::Write;
use tracing::{debug, info, warn};

/// Result of comparing the installed version against the latest one.
#[derive(Debug)]
pub enum VersionCheck {
    /// A probe failed or returned something that is not a version.
    CannotDetermine(UpdaterError),
    /// Installed is the latest, or newer.
    UpToDate,
    /// Installed is older than latest.
    Stale {
        /// Installed version.
        current: Version,
        /// Latest published version.
        latest: Version,
    },
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A post-upgrade summary was shown and consumed.
    SummaryDisplayed {
        /// Version before the upgrade.
        previous_version: String,
        /// Version after the upgrade.
        latest_version: String,
    },
    /// One of the versions could not be determined; nothing was shown.
    CannotDetermine,
    /// Nothing to do.
    UpToDate,
    /// An update notice was shown and a pending upgrade recorded.
    UpdateAvailable {
        /// Installed version.
        current: Version,
        /// Latest published version.
        latest: Version,
        /// Versions between the two, never less than one.
        version_count: usize,
    },
}

/// Orchestrates one hook run over injected collaborators.
pub struct NotificationController<'a> {
    store: &'a UpgradeStateStore,
    installed: &'a dyn InstalledVersionProvider,
    latest: &'a dyn LatestVersionProvider,
    releases: &'a dyn ReleaseSource,
    settings: &'a NoticeSettings,
}

impl<'a> NotificationController<'a> {
    /// Wire a controller from its collaborators.
    pub fn new(
        store: &'a UpgradeStateStore,
        installed: &'a dyn InstalledVersionProvider,
        latest: &'a dyn LatestVersionProvider,
        releases: &'a dyn ReleaseSource,
        settings: &'a NoticeSettings,
    ) -> Self {
        Self {
            store,
            installed,
            latest,
            releases,
            settings,
        }
    }

    /// Run the state machine, writing exactly one hook record to `out`.
    ///
    /// # Errors
    ///
    /// [`UpdaterError::StateWrite`] when the pending record cannot be saved,
    /// or an I/O error writing to `out`. Nothing has been written to `out`
    /// when the pending record fails.
    pub async fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<Outcome> {
        if let Some(summary) = self.waiting_summary().await {
            return self.display_summary(summary, out).await;
        }

        match self.check_versions().await {
            VersionCheck::CannotDetermine(e) => {
                debug!("Cannot determine versions ({}): {}", e.category(), e);
                HookOutput::empty().write_to(out)?;
                Ok(Outcome::CannotDetermine)
            }
            VersionCheck::UpToDate => {
                debug!("Installed version is up to date");
                HookOutput::empty().write_to(out)?;
                Ok(Outcome::UpToDate)
            }
            VersionCheck::Stale { current, latest } => self.notify_update(current, latest, out).await,
        }
    }

    /// Probe both versions and compare them.
    pub async fn check_versions(&self) -> VersionCheck {
        let installed = match self.installed.installed_version().await {
            Ok(version) => version,
            Err(e) => return VersionCheck::CannotDetermine(e),
        };
        let latest = match self.latest.latest_version().await {
            Ok(version) => version,
            Err(e) => return VersionCheck::CannotDetermine(e),
        };

        let current = match Version::parse(&installed) {
            Ok(version) => version,
            Err(e) => return VersionCheck::CannotDetermine(e),
        };
        let latest = match Version::parse(&latest) {
            Ok(version) => version,
            Err(e) => return VersionCheck::CannotDetermine(e),
        };

        debug!("Installed {}, latest {}", current, latest);
        if current >= latest {
            VersionCheck::UpToDate
        } else {
            VersionCheck::Stale { current, latest }
        }
    }

    async fn waiting_summary(&self) -> Option<PostUpgradeSummary> {
        match self.store.read_post_upgrade_summary().await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Ignoring unreadable post-upgrade summary: {}", e);
                None
            }
        }
    }

    async fn display_summary<W: Write + ?Sized>(
        &self,
        summary: PostUpgradeSummary,
        out: &mut W,
    ) -> Result<Outcome> {
        summary_notice(&summary, self.settings).write_to(out)?;

        // Shown once; a failed delete is left for the next run
        if let Err(e) = self.store.remove_post_upgrade_summary().await {
            warn!("Failed to remove displayed summary: {}", e);
        }

        Ok(Outcome::SummaryDisplayed {
            previous_version: summary.previous_version,
            latest_version: summary.latest_version,
        })
    }

    async fn notify_update<W: Write + ?Sized>(
        &self,
        current: Version,
        latest: Version,
        out: &mut W,
    ) -> Result<Outcome> {
        info!("Update available: {} -> {}", current, latest);

        let changelogs = fetch_changelogs(self.releases, &current, &latest).await;
        let version_count = changelogs.len().max(1);

        let pending = PendingUpgrade::new(current.to_string(), latest.to_string(), changelogs);
        self.store.write_pending_upgrade(&pending).await?;

        update_notice(&current.to_string(), &latest.to_string(), version_count, self.settings)
            .write_to(out)?;

        Ok(Outcome::UpdateAvailable {
            current,
            latest,
            version_count,
        })
    }
}
