//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the renderer that prints command results.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::application::services::archive_cleanup::CleanupSummary;
use crate::application::services::vault_purge::PurgeReport;
use crate::domain::{JobDescription, JobId, PurgeConfig, VaultTarget};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders command results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{text}");
        Ok(())
    }

    /// Render an initiated (and possibly awaited) job.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_job(
        &self,
        vault: &VaultTarget,
        job_id: &JobId,
        finished: Option<&JobDescription>,
    ) -> Result<()> {
        Self::print(&json!({
            "vault": vault.to_string(),
            "job_id": job_id,
            "status": finished.map(|d| &d.status),
            "status_message": finished.and_then(|d| d.status_message.as_deref()),
        }))
    }

    /// Render a job status check.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_job_status(&self, job_id: &JobId, description: &JobDescription) -> Result<()> {
        Self::print(&json!({
            "job_id": job_id,
            "status": description.status,
            "terminal": description.status.is_terminal(),
            "status_message": description.status_message,
        }))
    }

    /// Render the result of an archive cleanup pass.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cleanup(&self, summary: &CleanupSummary) -> Result<()> {
        Self::print(summary)
    }

    /// Render a deleted vault.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_vault_deleted(&self, vault: &VaultTarget) -> Result<()> {
        Self::print(&json!({ "vault": vault.to_string(), "deleted": true }))
    }

    /// Render a completed purge.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_purge(&self, report: &PurgeReport) -> Result<()> {
        Self::print(report)
    }

    /// Render the active configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &PurgeConfig, path: &std::path::Path) -> Result<()> {
        Self::print(&json!({ "path": path, "config": config }))
    }

    /// Render a cancelled confirmation prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cancelled(&self) -> Result<()> {
        Self::print(&json!({ "cancelled": true }))
    }

    /// Render the tool version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&json!({ "version": version }))
    }
}

/// Stable machine-readable code for the JSON error object.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    use crate::domain::{CleanupError, ConfigError, InventoryError, JobError, VaultError};

    if let Some(job) = err.downcast_ref::<JobError>() {
        return match job {
            JobError::Failed { .. } => "JOB_FAILED",
            JobError::TimedOut { .. } => "JOB_TIMEOUT",
            JobError::Cancelled { .. } => "CANCELLED",
        };
    }
    if err.downcast_ref::<CleanupError>().is_some() {
        return "CANCELLED";
    }
    if err.downcast_ref::<InventoryError>().is_some() {
        return "MALFORMED_INVENTORY";
    }
    if err.downcast_ref::<VaultError>().is_some() {
        return "INVALID_VAULT";
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "INVALID_CONFIG";
    }
    "ERROR"
}
