//! Integration test suite for cc-version-updater
//!
//! End-to-end runs of the built binary against a temporary plugin root. The
//! version probes are `echo` commands, so the suite is Unix-only.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **hook_run**: the session-start hook and its single JSON record
//! - **maintenance**: `status` and `clear`

#[path = "../common/mod.rs"]
mod common;

#[cfg(unix)]
mod hook_run;
#[cfg(unix)]
mod maintenance;
