//! External command execution for version probes.
//!
//! A [`CommandProbe`] runs one program with fixed arguments and returns its
//! trimmed stdout. It never reads the hook's stdin (Claude Code writes the
//! hook payload there) and reports every failure mode as
//! [`UpdaterError::ProbeUnavailable`].

use crate::core::{Result, UpdaterError};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// A command whose output answers a version question.
///
/// # Examples
///
/// ```rust,no_run
/// use cc_version_updater::probe::CommandProbe;
/// use std::time::Duration;
///
/// # async fn example() -> cc_version_updater::core::Result<()> {
/// let output = CommandProbe::new("installed", ["claude", "--version"])
///     .with_timeout(Some(Duration::from_secs(10)))
///     .run()
///     .await?;
/// println!("{output}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CommandProbe {
    /// Label used in errors and logs ("installed", "latest").
    name: String,
    /// Program followed by its arguments.
    argv: Vec<String>,
    /// Maximum run time (None = wait indefinitely)
    timeout_duration: Option<Duration>,
}

impl CommandProbe {
    /// Create a probe from a label and an argv (program first).
    pub fn new<I, S>(name: impl Into<String>, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            argv: argv.into_iter().map(Into::into).collect(),
            timeout_duration: None,
        }
    }

    /// Set a timeout for the command (None for no timeout)
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// The probe label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full command line, for logging.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> UpdaterError {
        UpdaterError::probe_unavailable(&self.name, reason)
    }

    /// Execute the command and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// [`UpdaterError::ProbeUnavailable`] when the argv is empty, the program
    /// is not on `PATH`, it cannot be spawned, it times out, exits non-zero,
    /// or prints nothing.
    pub async fn run(&self) -> Result<String> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| self.unavailable("no command configured"))?;

        // Resolves PATHEXT shims such as npm.cmd on Windows
        let resolved = which::which(program)
            .map_err(|e| self.unavailable(format!("`{program}` not found in PATH: {e}")))?;

        tracing::debug!(target: "probe", "({}) Executing command: {}", self.name, self.command_line());

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output_future = cmd.output();
        let result = if let Some(duration) = self.timeout_duration {
            if let Ok(result) = timeout(duration, output_future).await {
                result
            } else {
                tracing::warn!(
                    target: "probe",
                    "({}) Command timed out after {} seconds: {}",
                    self.name,
                    duration.as_secs(),
                    self.command_line()
                );
                return Err(
                    self.unavailable(format!("timed out after {} seconds", duration.as_secs()))
                );
            }
        } else {
            output_future.await
        };
        let output = result.map_err(|e| {
            self.unavailable(format!("failed to execute `{}`: {e}", self.command_line()))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                target: "probe",
                "({}) Command failed with exit code {:?}: {}",
                self.name,
                output.status.code(),
                stderr.trim()
            );
            return Err(self.unavailable(format!("exited with {}", output.status)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(self.unavailable("command produced no output"));
        }

        tracing::trace!(target: "probe", "({}) Output: {}", self.name, stdout);
        Ok(stdout)
    }
}
