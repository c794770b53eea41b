//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{JobDescription, JobId, PurgeConfig, VaultTarget};

// ── Glacier Port Traits ───────────────────────────────────────────────────────

/// Inventory-retrieval job operations.
#[allow(async_fn_in_trait)]
pub trait InventoryJobs {
    /// Start an `inventory-retrieval` job on the vault.
    async fn initiate_inventory_job(&self, vault: &VaultTarget) -> Result<JobId>;
    /// Fetch the current status of a job.
    async fn describe_job(&self, vault: &VaultTarget, job_id: &JobId) -> Result<JobDescription>;
    /// Download the output payload of a completed job.
    async fn get_job_output(&self, vault: &VaultTarget, job_id: &JobId) -> Result<Vec<u8>>;
}

/// Destructive vault operations.
#[allow(async_fn_in_trait)]
pub trait VaultDeleter {
    /// Delete a single archive from the vault.
    async fn delete_archive(&self, vault: &VaultTarget, archive_id: &str) -> Result<()>;
    /// Delete the vault itself. The service rejects this while archives remain.
    async fn delete_vault(&self, vault: &VaultTarget) -> Result<()>;
}

/// Composite trait: any type implementing both sub-traits is a `GlacierVault`.
pub trait GlacierVault: InventoryJobs + VaultDeleter {}

/// Blanket implementation: any type implementing both sub-traits is a `GlacierVault`.
impl<T> GlacierVault for T where T: InventoryJobs + VaultDeleter {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading and saving the persisted configuration.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<PurgeConfig>;
    /// Persist configuration.
    fn save(&self, config: &PurgeConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
