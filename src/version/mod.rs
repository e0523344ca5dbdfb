//! Release version parsing and ordering.
//!
//! Claude Code publishes plain `major.minor.patch` versions, and that is all
//! this module understands. A [`Version`] is parsed leniently at the tail
//! (components after the patch number are ignored) but strictly at the head:
//! every one of the first three components must be a non-negative decimal
//! integer. Anything else, including pre-release suffixes such as `1.2.3-beta`,
//! is rejected with [`UpdaterError::InvalidVersion`] instead of producing an
//! ordering nobody can reason about.
//!
//! Ordering is numeric per component, so `1.9.0 < 1.10.0`.
//!
//! # Module Organization
//!
//! - [`Version`] - the parsed triple, backed by [`semver::Version`]
//! - [`comparison`] - string-level comparison used by reconciliation and the controller

pub mod comparison;

pub use comparison::{VersionComparator, compare_versions};

use crate::core::{Result, UpdaterError};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` release version.
///
/// Pre-release and build metadata of the inner [`semver::Version`] are always
/// empty, so the derived ordering is plain lexicographic triple comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Build a version from its three components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a dotted version string.
    ///
    /// Leading and trailing whitespace is ignored, as are any components after
    /// the third (`"1.2.3.4"` parses as `1.2.3`).
    ///
    /// # Errors
    ///
    /// Returns [`UpdaterError::InvalidVersion`] when fewer than three
    /// components are present or any of the first three is not a decimal
    /// integer.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut parts = trimmed.split('.');
        let mut triple = [0u64; 3];

        for (slot, name) in triple.iter_mut().zip(["major", "minor", "patch"]) {
            let part = parts.next().ok_or_else(|| UpdaterError::InvalidVersion {
                input: input.to_string(),
                reason: format!("missing {name} component"),
            })?;
            *slot = parse_component(part).ok_or_else(|| UpdaterError::InvalidVersion {
                input: input.to_string(),
                reason: format!("{name} component '{part}' is not a number"),
            })?;
        }

        Ok(Self::new(triple[0], triple[1], triple[2]))
    }

    /// Remove a single leading `v` from a release tag (`v1.2.3` -> `1.2.3`).
    #[must_use]
    pub fn strip_tag(tag: &str) -> &str {
        tag.strip_prefix('v').unwrap_or(tag)
    }

    /// The major component.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.0.major
    }

    /// The minor component.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.0.minor
    }

    /// The patch component.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.0.patch
    }
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Version {
    type Err = UpdaterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}
