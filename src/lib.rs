//! cc-version-updater - Claude Code update notifications
//!
//! A `SessionStart` hook for Claude Code plugins. Each session start it
//! either shows the summary the upgrade flow left behind (once), or checks
//! whether a newer Claude Code release exists and announces it together with
//! the changelogs of every version in between.
//!
//! # Architecture Overview
//!
//! ```text
//! cli ──> controller ──> state     (changelog-summary.json, pending-upgrade.json)
//!              │──────> probe     (installed / latest version commands)
//!              │──────> version   (ordering)
//!              │──────> changelog (GitHub releases, reconciliation)
//!              └──────> notice ──> hooks (one JSON record on stdout)
//! ```
//!
//! The hook is advisory: every path prints exactly one JSON record and exits
//! with status 0, degrading to `{}` when anything goes wrong.
//!
//! # Core Modules
//!
//! - [`controller`] - the per-session state machine
//! - [`version`] - version parsing and comparison
//! - [`changelog`] - release list fetching and reconciliation
//! - [`state`] - the two persisted records shared with the upgrade flow
//! - [`probe`] - installed and latest version discovery
//!
//! ## Supporting Modules
//! - [`cli`] - command-line interface
//! - [`config`] - `config.toml`, plugin root and cache directory resolution
//! - [`core`] - error taxonomy and shared types
//! - [`hooks`] - the hook output record
//! - [`notice`] - notice text and terminal styling
//! - [`utils`] - atomic writes and path expansion
//!
//! # Hook Registration
//!
//! ```json
//! {
//!   "hooks": {
//!     "SessionStart": [
//!       { "hooks": [{ "type": "command", "command": "${CLAUDE_PLUGIN_ROOT}/bin/cc-version-updater" }] }
//!     ]
//!   }
//! }
//! ```

pub mod changelog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod core;
pub mod hooks;
pub mod notice;
pub mod probe;
pub mod state;
pub mod utils;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
