//! `glacier-purge delete-vault`: delete the vault unconditionally.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::VaultDeleter;
use crate::application::services::vault_purge;

/// Ask before deleting. Runs before the client is built.
///
/// # Errors
///
/// Returns an error if the vault is invalid or the prompt cannot be shown.
pub fn confirm(app: &AppContext) -> Result<bool> {
    let vault = app.vault()?;
    app.confirm(&format!("Delete vault {vault}?"))
}

/// Run `glacier-purge delete-vault`.
///
/// # Errors
///
/// Returns an error if the service refuses the delete (e.g. archives remain).
pub async fn run(app: &AppContext, glacier: &impl VaultDeleter) -> Result<ExitCode> {
    let vault = app.vault()?;
    vault_purge::delete_vault(glacier, &vault, &app.reporter()).await?;
    app.renderer().render_vault_deleted(&vault)?;
    Ok(ExitCode::SUCCESS)
}
