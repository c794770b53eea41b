//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags, PolicyFlags, VaultFlags};
use crate::commands;
use crate::infra::glacier::AwsOptions;
use crate::infra::signal::ctrl_c_signal;

/// Empty and delete an S3 Glacier vault
#[derive(Parser)]
#[command(
    name = "glacier-purge",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Vault name
    #[arg(long, global = true, env = "GLACIER_PURGE_VAULT", value_name = "NAME")]
    pub vault: Option<String>,

    /// Account id owning the vault ('-' for the credentials' own account)
    #[arg(long, global = true, value_name = "ID")]
    pub account_id: Option<String>,

    /// AWS region (defaults to the SDK's provider chain)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS shared-config profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Seconds between job status checks
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    /// Stop waiting on a job after this many seconds (0 waits forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub max_wait: Option<u64>,

    /// Keep going when the inventory job fails instead of aborting
    #[arg(long, global = true)]
    pub continue_on_job_failure: bool,

    /// Do not ask for confirmation before deleting
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initiate an inventory job
    Init(commands::init::InitArgs),

    /// Report whether an inventory job has finished
    Check(commands::JobArgs),

    /// Delete every archive listed by a finished inventory job
    #[command(alias = "delete_archives")]
    DeleteArchives(commands::JobArgs),

    /// Delete the vault
    #[command(alias = "delete_vault")]
    DeleteVault,

    /// Run everything automatically
    Purge,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            vault,
            account_id,
            region,
            profile,
            poll_interval,
            max_wait,
            continue_on_job_failure,
            yes,
            json,
            quiet,
            no_color,
            command,
        } = self;

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            vault: VaultFlags { vault, account_id },
            policy: PolicyFlags {
                poll_interval_secs: poll_interval,
                max_wait_secs: max_wait,
                continue_on_job_failure,
            },
            aws: AwsOptions { region, profile },
            behaviour: BehaviourFlags { yes },
        })?;

        match command {
            Command::Version => commands::version::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Init(args) => {
                app.vault()?;
                let glacier = app.glacier().await;
                commands::init::run(&app, &args, &glacier, &ctrl_c_signal()).await
            }
            Command::Check(args) => {
                app.vault()?;
                let glacier = app.glacier().await;
                commands::check::run(&app, &args, &glacier).await
            }
            Command::DeleteArchives(args) => {
                if !commands::delete_archives::confirm(&app)? {
                    return cancelled(&app);
                }
                let glacier = app.glacier().await;
                commands::delete_archives::run(&app, &args, &glacier, &ctrl_c_signal()).await
            }
            Command::DeleteVault => {
                if !commands::delete_vault::confirm(&app)? {
                    return cancelled(&app);
                }
                let glacier = app.glacier().await;
                commands::delete_vault::run(&app, &glacier).await
            }
            Command::Purge => {
                if !commands::purge::confirm(&app)? {
                    return cancelled(&app);
                }
                let glacier = app.glacier().await;
                commands::purge::run(&app, &glacier, &ctrl_c_signal()).await
            }
        }
    }
}

fn cancelled(app: &AppContext) -> Result<ExitCode> {
    app.renderer().render_cancelled()?;
    Ok(ExitCode::SUCCESS)
}
