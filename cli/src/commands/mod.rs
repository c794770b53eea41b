//! Command implementations

pub mod check;
pub mod config;
pub mod delete_archives;
pub mod delete_vault;
pub mod init;
pub mod purge;
pub mod version;

use clap::Args;

/// Arguments for commands that act on an existing job.
#[derive(Args)]
pub struct JobArgs {
    /// Inventory job id returned by `init`
    #[arg(long = "job-id", alias = "job_id", value_name = "ID")]
    pub job_id: String,
}
