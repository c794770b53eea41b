//! Vault target type and pure validation functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use std::fmt;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::domain::error::VaultError;

/// Account id sentinel understood by Glacier as "the account that signed the request".
pub const CURRENT_ACCOUNT: &str = "-";

/// Glacier vault naming rule: 1-255 of `[A-Za-z0-9_.-]`.
static VAULT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_.\-]{1,255}$").expect("valid regex")
});

static ACCOUNT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]{12}$").expect("valid regex")
});

/// The vault every remote call of a run is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultTarget {
    name: String,
    account_id: Option<String>,
}

impl VaultTarget {
    /// Build a validated target.
    ///
    /// An empty or `-` account id is treated as "current account".
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the name or account id is malformed.
    pub fn new(name: &str, account_id: Option<&str>) -> Result<Self> {
        validate_vault_name(name)?;
        let account_id = match account_id.map(str::trim) {
            None | Some("" | CURRENT_ACCOUNT) => None,
            Some(id) => {
                validate_account_id(id)?;
                Some(id.to_string())
            }
        };
        Ok(Self {
            name: name.to_string(),
            account_id,
        })
    }

    /// Vault name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account id to send on the wire; `-` when none was given.
    #[must_use]
    pub fn account_id(&self) -> &str {
        self.account_id.as_deref().unwrap_or(CURRENT_ACCOUNT)
    }

    /// Whether an explicit (cross-account) id was supplied.
    #[must_use]
    pub fn is_cross_account(&self) -> bool {
        self.account_id.is_some()
    }
}

impl fmt::Display for VaultTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.account_id {
            Some(id) => write!(f, "{}/{}", id, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Validates a vault name.
///
/// # Errors
///
/// Returns an error if the name is empty or contains characters Glacier rejects.
pub fn validate_vault_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VaultError::EmptyName.into());
    }
    if !VAULT_NAME_RE.is_match(name) {
        return Err(VaultError::InvalidName(name.to_string()).into());
    }
    Ok(())
}

/// Validates an explicit account id.
///
/// # Errors
///
/// Returns an error unless the id is `-` or exactly 12 ASCII digits.
pub fn validate_account_id(id: &str) -> Result<()> {
    if id == CURRENT_ACCOUNT || ACCOUNT_ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(VaultError::InvalidAccountId(id.to_string()).into())
    }
}
