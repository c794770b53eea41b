//! `glacier-purge delete-archives --job-id <id>`: delete everything a job listed.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::GlacierVault;
use crate::application::services::archive_cleanup;
use crate::application::shutdown::ShutdownSignal;
use crate::commands::JobArgs;
use crate::domain::JobId;

/// Ask before deleting. Runs before the client is built.
///
/// # Errors
///
/// Returns an error if the vault is invalid or the prompt cannot be shown.
pub fn confirm(app: &AppContext) -> Result<bool> {
    let vault = app.vault()?;
    app.confirm(&format!(
        "Permanently delete every archive listed in the inventory of {vault}?"
    ))
}

/// Run `glacier-purge delete-archives`.
///
/// # Errors
///
/// Returns an error if the inventory cannot be read, any delete fails, or the
/// run is interrupted.
pub async fn run(
    app: &AppContext,
    args: &JobArgs,
    glacier: &impl GlacierVault,
    shutdown: &ShutdownSignal,
) -> Result<ExitCode> {
    let vault = app.vault()?;
    let job_id = JobId::new(args.job_id.as_str());
    let summary = archive_cleanup::delete_listed_archives(
        glacier,
        &vault,
        &job_id,
        shutdown,
        &app.reporter(),
    )
    .await?;
    app.renderer().render_cleanup(&summary)?;
    Ok(ExitCode::SUCCESS)
}
