//! Command-line interface for cc-version-updater.
//!
//! The binary is registered as a Claude Code `SessionStart` hook. Invoked
//! without a subcommand it performs the hook run and prints one JSON record
//! on stdout. Two maintenance commands inspect and reset the stored state.
//!
//! # Commands
//!
//! - `check` (default) - run the hook: show a waiting post-upgrade summary, or
//!   check for a newer version and announce it
//! - `status` - show the cache directory and the stored records
//! - `clear` - delete both stored records
//!
//! # Examples
//!
//! ```bash
//! # Hook invocation (hooks.json)
//! cc-version-updater
//!
//! # Debug a hook run; logs go to stderr
//! cc-version-updater --verbose check
//!
//! # Inspect state with a custom cache location
//! cc-version-updater --cache-dir /tmp/ccvu status
//! ```

mod check;
mod common;
mod status;

pub use common::HookContext;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Logging settings derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Explicit log filter; `None` defers to `RUST_LOG`, then `warn`.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the stderr log subscriber.
    ///
    /// Stdout carries the hook record, so logs never go there. Calling this
    /// twice is harmless.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    }
}

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "cc-version-updater",
    about = "Claude Code update notifications for SessionStart hooks",
    version,
    author,
    long_about = "Shows a post-upgrade summary once after an upgrade, otherwise checks whether a newer Claude Code release is available and announces it with its changelogs."
)]
pub struct Cli {
    /// The subcommand to execute; defaults to `check`.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log debug details to stderr. Equivalent to `RUST_LOG=debug`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Log only errors to stderr.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to `config.toml` (default: `$CC_VERSION_UPDATER_CONFIG`, then the
    /// plugin root).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the state records (overrides `cache_dir`).
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the session-start hook and print one JSON record (default).
    Check,
    /// Show the cache directory and the stored records.
    Status,
    /// Delete the pending-upgrade and post-upgrade-summary records.
    Clear,
}

impl Cli {
    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig { log_level }
    }

    /// The command to run, `check` when none was given.
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Check)
    }

    /// Execute the selected command.
    ///
    /// `check` never fails: any problem is logged and `{}` is printed. The
    /// maintenance commands report errors to the caller.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Execute with an explicit logging configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let config_path = self.config.as_deref();
        let cache_dir = self.cache_dir.as_deref();
        match self.command() {
            Commands::Check => {
                check::execute(config_path, cache_dir, &mut std::io::stdout()).await;
                Ok(())
            }
            Commands::Status => status::execute(config_path, cache_dir).await,
            Commands::Clear => status::clear(config_path, cache_dir).await,
        }
    }
}
