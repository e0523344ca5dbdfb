use crate::changelog::{GitHubRelease, ReleaseSource};
use crate::core::{BoxFuture, Result, UpdaterError};
use crate::probe::{InstalledVersionProvider, LatestVersionProvider};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Version probe with a fixed answer.
///
/// Implements both provider traits and counts how often it was asked.
#[derive(Debug, Default)]
pub struct StaticVersion {
    version: Option<String>,
    calls: AtomicUsize,
}

impl StaticVersion {
    /// Always answers `version`.
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with [`UpdaterError::ProbeUnavailable`].
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Number of times the probe ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.version
            .clone()
            .ok_or_else(|| UpdaterError::probe_unavailable("static", "no version configured"))
    }
}

impl InstalledVersionProvider for StaticVersion {
    fn installed_version(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move { self.answer() })
    }
}

impl LatestVersionProvider for StaticVersion {
    fn latest_version(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move { self.answer() })
    }
}

/// Release source with a fixed list, or one that always fails.
#[derive(Debug, Default)]
pub struct StaticReleases {
    releases: Option<Vec<GitHubRelease>>,
    calls: AtomicUsize,
}

impl StaticReleases {
    /// Serve `releases` on every fetch.
    pub fn new(releases: Vec<GitHubRelease>) -> Self {
        Self {
            releases: Some(releases),
            calls: AtomicUsize::new(0),
        }
    }

    /// Serve releases for the given tags, each with a short body.
    pub fn tags(tags: &[&str]) -> Self {
        Self::new(
            tags.iter()
                .map(|tag| GitHubRelease::new(*tag, Some(format!("Notes for {tag}").as_str())))
                .collect(),
        )
    }

    /// Fail every fetch with [`UpdaterError::FetchFailure`].
    pub fn failing() -> Self {
        Self::default()
    }

    /// Number of fetches performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReleaseSource for StaticReleases {
    fn fetch_releases(&self) -> BoxFuture<'_, Result<Vec<GitHubRelease>>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.releases
                .clone()
                .ok_or_else(|| UpdaterError::fetch_failure("static://releases", "source offline"))
        })
    }
}
