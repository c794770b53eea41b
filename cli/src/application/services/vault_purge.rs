//! Application service: full vault decommissioning.
//!
//! Sequence: inventory job → wait → delete archives → second inventory job →
//! wait → delete vault. Every step runs only after the previous one returned.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{GlacierVault, ProgressReporter, VaultDeleter};
use crate::application::services::{archive_cleanup, inventory_job};
use crate::application::shutdown::ShutdownSignal;
use crate::domain::{JobError, JobFailurePolicy, JobId, JobStatus, PurgePolicy, VaultTarget};

/// What a completed purge did.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeReport {
    pub vault: String,
    pub inventory_job_id: JobId,
    pub inventory_status: JobStatus,
    pub archives_deleted: usize,
    pub bytes_deleted: u64,
    pub confirmation_job_id: JobId,
    pub confirmation_status: JobStatus,
}

/// Delete the vault. The service refuses if archives remain.
///
/// # Errors
///
/// Returns an error if the delete call fails.
pub async fn delete_vault(
    deleter: &impl VaultDeleter,
    vault: &VaultTarget,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    tracing::info!(vault = %vault, "deleting vault");
    reporter.step(&format!("Deleting vault {vault}..."));
    deleter
        .delete_vault(vault)
        .await
        .with_context(|| format!("deleting vault {vault}"))?;
    reporter.success(&format!("Vault {vault} deleted"));
    Ok(())
}

/// Run the full purge of `vault`.
///
/// # Errors
///
/// Any failed remote call aborts the run at that point with no cleanup. A
/// first inventory job ending in `Failed` aborts the run unless
/// `policy.on_job_failure` is [`JobFailurePolicy::Continue`].
pub async fn purge_vault(
    glacier: &impl GlacierVault,
    vault: &VaultTarget,
    policy: &PurgePolicy,
    shutdown: &ShutdownSignal,
    reporter: &impl ProgressReporter,
) -> Result<PurgeReport> {
    tracing::info!(vault = %vault, "purge started");

    let (inventory_job_id, inventory) =
        inventory_job::initiate_and_wait(glacier, vault, &policy.poll, shutdown, reporter).await?;

    if inventory.status == JobStatus::Failed {
        let message = inventory
            .status_message
            .clone()
            .unwrap_or_else(|| "no status message".to_string());
        match policy.on_job_failure {
            JobFailurePolicy::Abort => {
                return Err(JobError::Failed {
                    job_id: inventory_job_id.to_string(),
                    message,
                }
                .into());
            }
            JobFailurePolicy::Continue => {
                tracing::warn!(
                    job_id = %inventory_job_id,
                    %message,
                    "continuing after failed inventory job"
                );
                reporter.warn(&format!(
                    "Inventory job {inventory_job_id} failed ({message}); continuing anyway"
                ));
            }
        }
    } else {
        reporter.success(&format!("Inventory job {inventory_job_id} finished"));
    }

    let cleanup = archive_cleanup::delete_listed_archives(
        glacier,
        vault,
        &inventory_job_id,
        shutdown,
        reporter,
    )
    .await?;

    // The second inventory only serves as a wait; its result is not inspected.
    reporter.step("Requesting a fresh inventory before deleting the vault...");
    let (confirmation_job_id, confirmation) =
        inventory_job::initiate_and_wait(glacier, vault, &policy.poll, shutdown, reporter).await?;
    tracing::info!(
        job_id = %confirmation_job_id,
        status = %confirmation.status,
        "confirmation inventory finished"
    );

    delete_vault(glacier, vault, reporter).await?;

    tracing::info!(
        vault = %vault,
        archives_deleted = cleanup.archives_deleted,
        "purge complete"
    );
    Ok(PurgeReport {
        vault: vault.to_string(),
        inventory_job_id,
        inventory_status: inventory.status,
        archives_deleted: cleanup.archives_deleted,
        bytes_deleted: cleanup.bytes_deleted,
        confirmation_job_id,
        confirmation_status: confirmation.status,
    })
}
