//! Error handling for cc-version-updater
//!
//! The hook is advisory: nothing it does may fail the host session. Errors are
//! still strongly typed so callers (and tests) can tell a failed probe apart
//! from an up-to-date install or a failed changelog fetch, even though every
//! one of them ends in the same conservative output.
//!
//! # Error Categories
//!
//! | Category | Variants | Degrades to |
//! |---|---|---|
//! | Probe unavailable | [`UpdaterError::ProbeUnavailable`], [`UpdaterError::InvalidVersion`] | silent `{}` |
//! | Fetch failure | [`UpdaterError::FetchFailure`] | empty changelog list |
//! | State corruption | [`UpdaterError::StateCorruption`] | record treated as absent |
//! | Unhandled | everything else | `{}` printed at the top level |
//!
//! # Examples
//!
//! ```rust,no_run
//! use cc_version_updater::core::{ErrorCategory, UpdaterError};
//!
//! let error = UpdaterError::ProbeUnavailable {
//!     probe: "installed".to_string(),
//!     reason: "`claude` not found in PATH".to_string(),
//! };
//! assert_eq!(error.category(), ErrorCategory::ProbeUnavailable);
//! ```

use std::fmt;
use thiserror::Error;

/// The main error type for cc-version-updater operations.
#[derive(Error, Debug)]
pub enum UpdaterError {
    /// An external version probe could not produce a version.
    ///
    /// Covers spawn failures, non-zero exits, empty output, timeouts and
    /// output without a recognizable `major.minor.patch` triple.
    #[error("Version probe '{probe}' unavailable: {reason}")]
    ProbeUnavailable {
        /// Which probe failed ("installed" or "latest")
        probe: String,
        /// Why the probe produced no result
        reason: String,
    },

    /// A version string could not be parsed as `major.minor.patch`.
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// The release list could not be fetched or decoded.
    #[error("Failed to fetch releases from {url}: {reason}")]
    FetchFailure {
        /// The release API URL
        url: String,
        /// Transport, status or decode failure
        reason: String,
    },

    /// A persisted record exists but is not valid JSON for its schema.
    #[error("Corrupt state file {path}: {reason}")]
    StateCorruption {
        /// Path of the unreadable record
        path: String,
        /// Parse error detail
        reason: String,
    },

    /// A persisted record could not be written or removed.
    #[error("Failed to update state file {path}: {reason}")]
    StateWrite {
        /// Path of the record
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The configuration file exists but could not be read or parsed.
    #[error("Configuration error in {path}: {reason}")]
    ConfigError {
        /// Path of the configuration file
        path: String,
        /// Read or parse failure
        reason: String,
    },

    /// Standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`UpdaterError`] used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The installed or latest version could not be determined.
    ProbeUnavailable,
    /// The changelog list could not be fetched.
    FetchFailure,
    /// A persisted record was malformed.
    StateCorruption,
    /// Anything else; handled at the top level.
    Unhandled,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbeUnavailable => write!(f, "probe-unavailable"),
            Self::FetchFailure => write!(f, "fetch-failure"),
            Self::StateCorruption => write!(f, "state-corruption"),
            Self::Unhandled => write!(f, "unhandled"),
        }
    }
}

impl UpdaterError {
    /// Classify this error into the degrade-to-safe taxonomy.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ProbeUnavailable { .. } | Self::InvalidVersion { .. } => {
                ErrorCategory::ProbeUnavailable
            }
            Self::FetchFailure { .. } => ErrorCategory::FetchFailure,
            Self::StateCorruption { .. } => ErrorCategory::StateCorruption,
            Self::StateWrite { .. } | Self::ConfigError { .. } | Self::Io(_) => {
                ErrorCategory::Unhandled
            }
        }
    }

    /// Shorthand for a [`UpdaterError::ProbeUnavailable`].
    pub fn probe_unavailable(probe: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::ProbeUnavailable {
            probe: probe.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for a [`UpdaterError::FetchFailure`].
    pub fn fetch_failure(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::FetchFailure {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias for cc-version-updater operations.
pub type Result<T, E = UpdaterError> = std::result::Result<T, E>;
