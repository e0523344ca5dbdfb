//! The hook run.

use super::HookContext;
use crate::controller::{NotificationController, Outcome};
use crate::hooks::HookOutput;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error};

/// Run the hook, writing exactly one record to `out`.
///
/// Failures are logged and replaced by the empty record.
pub async fn execute<W: Write + ?Sized>(
    config_flag: Option<&Path>,
    cache_dir_flag: Option<&Path>,
    out: &mut W,
) {
    match run(config_flag, cache_dir_flag, out).await {
        Ok(outcome) => debug!("Hook finished: {:?}", outcome),
        Err(e) => {
            error!("Hook run failed: {:#}", e);
            if let Err(e) = HookOutput::empty().write_to(out) {
                error!("Failed to write hook output: {}", e);
            }
        }
    }
}

async fn run<W: Write + ?Sized>(
    config_flag: Option<&Path>,
    cache_dir_flag: Option<&Path>,
    out: &mut W,
) -> Result<Outcome> {
    let context = HookContext::load(config_flag, cache_dir_flag).await?;
    let config = &context.config;

    // Hook stdout is a pipe, so terminal detection would strip every color
    colored::control::set_override(config.display.color);

    let installed = config.installed_provider();
    let latest = config.latest_provider();
    let releases = config.release_source();
    let settings = config.display.notice_settings();

    let controller =
        NotificationController::new(&context.store, &installed, &latest, &releases, &settings);
    Ok(controller.run(out).await?)
}
