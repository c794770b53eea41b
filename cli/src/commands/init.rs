//! `glacier-purge init [--block]`: start an inventory-retrieval job.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InventoryJobs;
use crate::application::services::inventory_job;
use crate::application::shutdown::ShutdownSignal;

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Wait until the job succeeds or fails before returning
    #[arg(long)]
    pub block: bool,
}

/// Run `glacier-purge init`.
///
/// # Errors
///
/// Returns an error if the job cannot be initiated or, with `--block`, polled.
pub async fn run(
    app: &AppContext,
    args: &InitArgs,
    glacier: &impl InventoryJobs,
    shutdown: &ShutdownSignal,
) -> Result<ExitCode> {
    let vault = app.vault()?;
    let reporter = app.reporter();

    let job_id = inventory_job::initiate(glacier, &vault, &reporter).await?;
    let finished = if args.block {
        Some(
            inventory_job::wait_until_terminal(
                glacier,
                &vault,
                &job_id,
                &app.policy.poll,
                shutdown,
                &reporter,
            )
            .await?,
        )
    } else {
        None
    };

    app.renderer().render_job(&vault, &job_id, finished.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
