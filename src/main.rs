//! cc-version-updater entry point
//!
//! Parses arguments and runs the selected command. The hook run itself never
//! fails; only the maintenance commands can exit non-zero.

use anyhow::Result;
use cc_version_updater::cli;
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute().await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}
