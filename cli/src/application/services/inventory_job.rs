//! Application service: inventory-retrieval job lifecycle.
//!
//! Imports only from `crate::domain` and `crate::application`.

use anyhow::{Context, Result};
use tokio::time::Instant;

use crate::application::ports::{InventoryJobs, ProgressReporter};
use crate::application::shutdown::ShutdownSignal;
use crate::domain::{JobDescription, JobError, JobId, JobStatus, PollPolicy, VaultTarget};

/// Start an inventory-retrieval job on `vault`.
///
/// # Errors
///
/// Returns an error if the service rejects the request.
pub async fn initiate(
    jobs: &impl InventoryJobs,
    vault: &VaultTarget,
    reporter: &impl ProgressReporter,
) -> Result<JobId> {
    tracing::info!(
        vault = %vault,
        cross_account = vault.is_cross_account(),
        "initiating inventory job"
    );
    reporter.step(&format!("Requesting inventory of vault {vault}..."));
    let job_id = jobs
        .initiate_inventory_job(vault)
        .await
        .with_context(|| format!("initiating inventory job on vault {vault}"))?;
    tracing::info!(vault = %vault, job_id = %job_id, "inventory job initiated");
    Ok(job_id)
}

/// Describe `job_id` once and log what the service reported.
///
/// # Errors
///
/// Returns an error if the describe call fails.
pub async fn check(
    jobs: &impl InventoryJobs,
    vault: &VaultTarget,
    job_id: &JobId,
) -> Result<JobDescription> {
    let description = jobs
        .describe_job(vault, job_id)
        .await
        .with_context(|| format!("describing job {job_id} on vault {vault}"))?;

    match &description.status {
        JobStatus::Succeeded => tracing::info!(job_id = %job_id, "inventory job succeeded"),
        JobStatus::Failed => tracing::error!(
            job_id = %job_id,
            message = description.status_message.as_deref().unwrap_or("none"),
            "inventory job failed"
        ),
        status => tracing::info!(job_id = %job_id, status = %status, "inventory job not finished"),
    }
    Ok(description)
}

/// Poll `job_id` until it reaches a terminal status.
///
/// Sleeps one `policy.interval` before every describe call. Stops with
/// [`JobError::TimedOut`] once `policy.max_polls()` calls have been made
/// without a terminal status, and with [`JobError::Cancelled`] as soon as
/// `shutdown` fires.
///
/// # Errors
///
/// Returns an error on timeout, cancellation, or a failed describe call.
pub async fn wait_until_terminal(
    jobs: &impl InventoryJobs,
    vault: &VaultTarget,
    job_id: &JobId,
    policy: &PollPolicy,
    shutdown: &ShutdownSignal,
    reporter: &impl ProgressReporter,
) -> Result<JobDescription> {
    let started = Instant::now();
    let max_polls = policy.max_polls();
    let mut shutdown = shutdown.clone();
    let mut polls: u64 = 0;

    reporter.step(&format!(
        "Waiting for job {job_id} (checking every {}s)...",
        policy.interval.as_secs()
    ));

    loop {
        if max_polls.is_some_and(|max| polls >= max) {
            return Err(JobError::TimedOut {
                job_id: job_id.to_string(),
                waited: started.elapsed(),
            }
            .into());
        }

        tracing::debug!(
            job_id = %job_id,
            seconds = policy.interval.as_secs(),
            "waiting before next check"
        );
        tokio::select! {
            () = tokio::time::sleep(policy.interval) => {}
            () = shutdown.triggered() => {
                tracing::warn!(job_id = %job_id, polls, "stopped waiting for job");
                return Err(JobError::Cancelled { job_id: job_id.to_string() }.into());
            }
        }

        polls += 1;
        let description = check(jobs, vault, job_id).await?;
        if description.status.is_terminal() {
            tracing::info!(
                job_id = %job_id,
                polls,
                elapsed_secs = started.elapsed().as_secs(),
                "inventory job finished"
            );
            return Ok(description);
        }
    }
}

/// Start an inventory job and wait for it to finish.
///
/// # Errors
///
/// Returns an error if initiation or polling fails.
pub async fn initiate_and_wait(
    jobs: &impl InventoryJobs,
    vault: &VaultTarget,
    policy: &PollPolicy,
    shutdown: &ShutdownSignal,
    reporter: &impl ProgressReporter,
) -> Result<(JobId, JobDescription)> {
    let job_id = initiate(jobs, vault, reporter).await?;
    let description = wait_until_terminal(jobs, vault, &job_id, policy, shutdown, reporter).await?;
    Ok((job_id, description))
}
