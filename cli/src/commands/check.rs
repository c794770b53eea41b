//! `glacier-purge check --job-id <id>`: report whether a job has finished.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::InventoryJobs;
use crate::application::services::inventory_job;
use crate::commands::JobArgs;
use crate::domain::JobId;

/// Run `glacier-purge check`.
///
/// # Errors
///
/// Returns an error if the describe call fails.
pub async fn run(
    app: &AppContext,
    args: &JobArgs,
    glacier: &impl InventoryJobs,
) -> Result<ExitCode> {
    let vault = app.vault()?;
    let job_id = JobId::new(args.job_id.as_str());
    let description = inventory_job::check(glacier, &vault, &job_id).await?;
    app.renderer().render_job_status(&job_id, &description)?;
    Ok(ExitCode::SUCCESS)
}
