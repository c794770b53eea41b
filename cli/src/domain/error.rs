//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or the AWS SDK. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::time::Duration;

use thiserror::Error;

// ── Vault errors ──────────────────────────────────────────────────────────────

/// Errors raised while validating the vault a command targets.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Vault name must not be empty.")]
    EmptyName,

    #[error(
        "Invalid vault name '{0}': must be 1-255 characters of a-z, A-Z, 0-9, '_', '-' or '.'"
    )]
    InvalidName(String),

    #[error("Invalid account id '{0}': must be '-' or a 12-digit AWS account id")]
    InvalidAccountId(String),
}

// ── Job errors ────────────────────────────────────────────────────────────────

/// Errors raised while waiting on an inventory-retrieval job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Inventory job {job_id} failed: {message}")]
    Failed { job_id: String, message: String },

    #[error(
        "Inventory job {job_id} did not finish within {}s. \
         Check it later with: glacier-purge check --job-id {job_id}",
        waited.as_secs()
    )]
    TimedOut { job_id: String, waited: Duration },

    #[error(
        "Cancelled while waiting for inventory job {job_id}. \
         Resume with: glacier-purge check --job-id {job_id}"
    )]
    Cancelled { job_id: String },
}

// ── Inventory errors ──────────────────────────────────────────────────────────

/// Errors raised while decoding an inventory job's output payload.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Inventory payload has no 'ArchiveList' field.")]
    MissingArchiveList,

    #[error("Inventory entry {index} has no 'ArchiveId' field.")]
    MissingArchiveId { index: usize },
}

// ── Cleanup errors ───────────────────────────────────────────────────────────

/// Errors raised while deleting the archives an inventory listed.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error(
        "Interrupted after deleting {deleted} of {total} archives. \
         Run a fresh inventory and delete-archives to finish."
    )]
    Interrupted { deleted: usize, total: usize },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
