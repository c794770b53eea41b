//! `glacier-purge purge`: run every step automatically.

use std::process::ExitCode;

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::app::AppContext;
use crate::application::ports::GlacierVault;
use crate::application::services::vault_purge;
use crate::application::shutdown::ShutdownSignal;

/// Ask before purging. Runs before the client is built.
///
/// # Errors
///
/// Returns an error if the vault is invalid or the prompt cannot be shown.
pub fn confirm(app: &AppContext) -> Result<bool> {
    let vault = app.vault()?;
    if !app.assume_yes && !app.output.quiet && !app.is_json() {
        println!();
        println!(
            "This will {}:",
            "permanently remove".style(app.output.styles.destructive)
        );
        println!("  • Every archive stored in vault {vault}");
        println!("  • The vault itself");
        println!();
        println!("Inventory jobs usually take several hours; the run waits for two of them.");
        println!();
    }
    app.confirm("Continue?")
}

/// Run `glacier-purge purge`.
///
/// # Errors
///
/// Returns an error if any step fails; later steps are not attempted.
pub async fn run(
    app: &AppContext,
    glacier: &impl GlacierVault,
    shutdown: &ShutdownSignal,
) -> Result<ExitCode> {
    let vault = app.vault()?;
    let report =
        vault_purge::purge_vault(glacier, &vault, &app.policy, shutdown, &app.reporter()).await?;
    app.renderer().render_purge(&report)?;
    Ok(ExitCode::SUCCESS)
}
