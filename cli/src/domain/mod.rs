//! Domain layer: pure types, validation, and policy.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or the AWS SDK.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod inventory;
pub mod job;
pub mod policy;
pub mod vault;

pub use config::{PurgeConfig, validate_config_key, validate_config_value};
pub use error::{CleanupError, ConfigError, InventoryError, JobError, VaultError};
pub use inventory::{ArchiveRef, Inventory, parse_inventory};
pub use job::{JobDescription, JobId, JobStatus};
pub use policy::{JobFailurePolicy, PollPolicy, PurgePolicy};
pub use vault::VaultTarget;
