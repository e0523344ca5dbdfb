//! Changelog reconciliation.
//!
//! Turns the raw release list published on GitHub into the ordered set of
//! changelog entries that separate the installed version from the latest one.
//!
//! # Reconciliation Rules
//!
//! For an upgrade from `current` to `latest`, a release is kept when its tag
//! (minus one leading `v`) parses as a [`Version`] and
//! `current < version <= latest`. The upper bound guards against releases
//! published between the latest-version lookup and the release fetch.
//! Kept entries are ordered newest first and each version appears once.
//!
//! ```text
//! current = 1.0.0, latest = 1.2.0
//! releases: v1.3.0  v1.2.0  v1.1.0  v1.0.0  nightly
//!             ^out    ^in     ^in     ^out    ^skipped (unparseable)
//! result:  [1.2.0, 1.1.0]
//! ```
//!
//! Fetching is best-effort: [`fetch_changelogs`] never fails, an unreachable
//! API simply yields no entries and the update notice goes out regardless.

pub mod source;

pub use source::{GitHubReleaseSource, ReleaseSource};

use crate::constants::NO_CHANGELOG_PLACEHOLDER;
use crate::version::{Version, VersionComparator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A release as returned by the GitHub releases API.
///
/// Only the fields the reconciler needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRelease {
    /// Git tag of the release, usually `vMAJOR.MINOR.PATCH`.
    pub tag_name: String,
    /// Markdown release notes; `null` for releases without notes.
    #[serde(default)]
    pub body: Option<String>,
}

impl GitHubRelease {
    /// Convenience constructor, mostly for tests and fakes.
    pub fn new(tag_name: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            tag_name: tag_name.into(),
            body: body.map(str::to_string),
        }
    }
}

/// A changelog entry relevant to a pending upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version string without the `v` prefix.
    pub version: String,
    /// Release notes, or a placeholder when the body is missing or blank.
    pub changelog: String,
}

impl Release {
    fn from_github(version: &str, release: &GitHubRelease) -> Self {
        let changelog = match release.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body.to_string(),
            _ => NO_CHANGELOG_PLACEHOLDER.to_string(),
        };
        Self {
            version: version.to_string(),
            changelog,
        }
    }
}

/// Select and order the releases between `current` (exclusive) and `latest`
/// (inclusive).
///
/// Releases whose tag is not a valid version are skipped. When the source
/// lists the same version twice, the first listing wins.
#[must_use]
pub fn reconcile(current: &Version, latest: &Version, releases: &[GitHubRelease]) -> Vec<Release> {
    let mut selected: Vec<(Version, Release)> = Vec::new();

    for release in releases {
        let version_str = Version::strip_tag(release.tag_name.trim());
        let Ok(version) = Version::parse(version_str) else {
            debug!("Skipping release with unparseable tag '{}'", release.tag_name);
            continue;
        };

        if VersionComparator::in_upgrade_span(&version, current, latest) {
            selected.push((version, Release::from_github(version_str, release)));
        }
    }

    // Stable sort keeps source order among equal versions, so dedup keeps the first listing
    selected.sort_by(|(a, _), (b, _)| b.cmp(a));
    selected.dedup_by(|(a, _), (b, _)| a == b);

    selected.into_iter().map(|(_, release)| release).collect()
}

/// Fetch the release list and reconcile it, degrading to an empty list on any
/// fetch or decode failure.
pub async fn fetch_changelogs(
    source: &dyn ReleaseSource,
    current: &Version,
    latest: &Version,
) -> Vec<Release> {
    match source.fetch_releases().await {
        Ok(releases) => {
            let changelogs = reconcile(current, latest, &releases);
            debug!(
                "Reconciled {} of {} releases for {} -> {}",
                changelogs.len(),
                releases.len(),
                current,
                latest
            );
            changelogs
        }
        Err(e) => {
            warn!("Changelog fetch failed, continuing without changelogs: {}", e);
            Vec::new()
        }
    }
}
