//! Application service: delete every archive listed in a job's inventory.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{InventoryJobs, ProgressReporter, VaultDeleter};
use crate::application::shutdown::ShutdownSignal;
use crate::domain::{CleanupError, Inventory, JobId, VaultTarget, parse_inventory};

/// Outcome of an archive cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupSummary {
    pub archives_deleted: usize,
    pub bytes_deleted: u64,
}

/// Download and decode the inventory produced by `job_id`.
///
/// # Errors
///
/// Returns an error if the output cannot be fetched or is malformed.
pub async fn fetch_inventory(
    jobs: &impl InventoryJobs,
    vault: &VaultTarget,
    job_id: &JobId,
) -> Result<Inventory> {
    tracing::info!(vault = %vault, job_id = %job_id, "retrieving inventory");
    let payload = jobs
        .get_job_output(vault, job_id)
        .await
        .with_context(|| format!("fetching output of job {job_id} on vault {vault}"))?;
    let inventory = parse_inventory(&payload)
        .with_context(|| format!("decoding inventory from job {job_id}"))?;

    tracing::info!(
        archives = inventory.archives.len(),
        bytes = inventory.total_size(),
        inventory_date = inventory.inventory_date.as_deref().unwrap_or("unknown"),
        "inventory retrieved"
    );
    if tracing::enabled!(tracing::Level::DEBUG) {
        let listing = serde_json::to_string_pretty(&inventory.archives)
            .context("JSON serialization failed")?;
        tracing::debug!("archives: {listing}");
    }
    Ok(inventory)
}

/// Delete each archive in `inventory`, one call per archive, in listed order.
///
/// Stops at the first failed delete; later archives are not attempted.
/// `shutdown` is checked before every call, never in the middle of one.
///
/// # Errors
///
/// Returns an error naming the archive whose delete failed, or
/// [`CleanupError::Interrupted`] once `shutdown` has fired.
pub async fn delete_archives(
    deleter: &impl VaultDeleter,
    vault: &VaultTarget,
    inventory: &Inventory,
    shutdown: &ShutdownSignal,
    reporter: &impl ProgressReporter,
) -> Result<CleanupSummary> {
    let total = inventory.archives.len();
    if total == 0 {
        reporter.step("Inventory lists no archives; nothing to delete.");
        return Ok(CleanupSummary {
            archives_deleted: 0,
            bytes_deleted: 0,
        });
    }

    reporter.step(&format!("Deleting {total} archives from {vault}..."));
    let mut summary = CleanupSummary {
        archives_deleted: 0,
        bytes_deleted: 0,
    };
    for (n, archive) in inventory.archives.iter().enumerate() {
        if shutdown.is_triggered() {
            tracing::warn!(
                deleted = summary.archives_deleted,
                total,
                "archive cleanup interrupted"
            );
            return Err(CleanupError::Interrupted {
                deleted: summary.archives_deleted,
                total,
            }
            .into());
        }
        tracing::info!(
            archive_id = %archive.archive_id,
            index = n + 1,
            total,
            "deleting archive"
        );
        deleter
            .delete_archive(vault, &archive.archive_id)
            .await
            .with_context(|| {
                format!(
                    "deleting archive {} ({} of {total}) from vault {vault}",
                    archive.archive_id,
                    n + 1
                )
            })?;
        summary.archives_deleted += 1;
        summary.bytes_deleted += archive.size.unwrap_or(0);
    }
    reporter.success(&format!("Deleted {total} archives"));
    Ok(summary)
}

/// Fetch the inventory of a completed job and delete every archive it lists.
///
/// # Errors
///
/// Returns an error if the inventory cannot be read, any delete fails, or
/// `shutdown` fires before the last delete.
pub async fn delete_listed_archives(
    glacier: &(impl InventoryJobs + VaultDeleter),
    vault: &VaultTarget,
    job_id: &JobId,
    shutdown: &ShutdownSignal,
    reporter: &impl ProgressReporter,
) -> Result<CleanupSummary> {
    let inventory = fetch_inventory(glacier, vault, job_id).await?;
    delete_archives(glacier, vault, &inventory, shutdown, reporter).await
}
