//! Version comparison for dotted version strings.
//!
//! Inputs come from external tools (a `--version` probe, the npm registry, a
//! GitHub tag list), so comparison works on strings and reports malformed
//! input as "no ordering" instead of guessing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cc_version_updater::version::{VersionComparator, compare_versions};
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare_versions("1.9.0", "1.10.0"), Some(Ordering::Less));
//! assert_eq!(compare_versions("1.0.0", "1.0.0"), Some(Ordering::Equal));
//! assert_eq!(compare_versions("1.0.0", "1.0.x"), None);
//!
//! assert_eq!(VersionComparator::compare("1.1.0", "1.0.9"), Some(1));
//! assert_eq!(VersionComparator::compare("garbage", "1.0.0"), None);
//! ```

use super::Version;
use std::cmp::Ordering;

/// Compare two version strings.
///
/// Returns `None` if either side fails [`Version::parse`]. For well-formed
/// input the result is antisymmetric: `compare_versions(a, b)` is the reverse
/// of `compare_versions(b, a)`.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = Version::parse(a).ok()?;
    let b = Version::parse(b).ok()?;
    Some(a.cmp(&b))
}

/// Version comparison helpers.
pub struct VersionComparator;

impl VersionComparator {
    /// Compare two version strings as `-1`, `0` or `1`.
    ///
    /// Malformed input yields `None`.
    #[must_use]
    pub fn compare(a: &str, b: &str) -> Option<i8> {
        compare_versions(a, b).map(|ordering| ordering as i8)
    }

    /// Whether `candidate` lies in the half-open upgrade span `(current, latest]`.
    #[must_use]
    pub fn in_upgrade_span(candidate: &Version, current: &Version, latest: &Version) -> bool {
        candidate > current && candidate <= latest
    }
}
