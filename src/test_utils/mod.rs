//! Test utilities for cc-version-updater
//!
//! Fixed-answer fakes for the version probes and the release source, plus a
//! once-guarded logging initializer. Available to unit tests and, through the
//! `test-utils` feature, to downstream crates.
//!
//! # Example
//!
//! ```rust,no_run
//! use cc_version_updater::test_utils::{StaticReleases, StaticVersion};
//!
//! let installed = StaticVersion::ok("1.0.0");
//! let latest = StaticVersion::unavailable();
//! let releases = StaticReleases::failing();
//! ```

mod fakes;

pub use fakes::{StaticReleases, StaticVersion};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}
