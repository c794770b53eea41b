//! Vault inventory document, as returned by an inventory-retrieval job.
//!
//! Pure functions only; no I/O or async.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::InventoryError;

/// One archive listed in the inventory. Only `archive_id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveRef {
    pub archive_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "SHA256TreeHash", skip_serializing_if = "Option::is_none")]
    pub sha256_tree_hash: Option<String>,
}

impl ArchiveRef {
    #[must_use]
    pub fn new(archive_id: impl Into<String>) -> Self {
        Self {
            archive_id: archive_id.into(),
            archive_description: None,
            creation_date: None,
            size: None,
            sha256_tree_hash: None,
        }
    }
}

/// Decoded inventory: vault metadata plus the ordered archive list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub vault_arn: Option<String>,
    pub inventory_date: Option<String>,
    pub archives: Vec<ArchiveRef>,
}

impl Inventory {
    /// Sum of the `Size` fields that were present.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.archives.iter().filter_map(|a| a.size).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawInventory {
    #[serde(rename = "VaultARN")]
    vault_arn: Option<String>,
    inventory_date: Option<String>,
    archive_list: Option<Vec<RawArchive>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawArchive {
    archive_id: Option<String>,
    archive_description: Option<String>,
    creation_date: Option<String>,
    size: Option<u64>,
    #[serde(rename = "SHA256TreeHash")]
    sha256_tree_hash: Option<String>,
}

/// Decode a job output payload.
///
/// Archive order is preserved exactly as listed.
///
/// # Errors
///
/// Returns [`InventoryError`] if the payload is not JSON, has no
/// `ArchiveList`, or lists an archive without an `ArchiveId`.
pub fn parse_inventory(payload: &[u8]) -> Result<Inventory> {
    let raw: RawInventory = serde_json::from_slice(payload).map_err(InventoryError::InvalidJson)?;
    let list = raw.archive_list.ok_or(InventoryError::MissingArchiveList)?;

    let archives = list
        .into_iter()
        .enumerate()
        .map(|(index, a)| {
            let archive_id = a
                .archive_id
                .ok_or(InventoryError::MissingArchiveId { index })?;
            Ok(ArchiveRef {
                archive_id,
                archive_description: a.archive_description,
                creation_date: a.creation_date,
                size: a.size,
                sha256_tree_hash: a.sha256_tree_hash,
            })
        })
        .collect::<Result<Vec<_>, InventoryError>>()?;

    Ok(Inventory {
        vault_arn: raw.vault_arn,
        inventory_date: raw.inventory_date,
        archives,
    })
}
