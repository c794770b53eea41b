//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::PurgeConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<PurgeConfig> {
    store.load()
}

/// Validate and persist a single setting, returning the updated configuration.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the file cannot be written.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<PurgeConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    tracing::info!(key, value, "configuration updated");
    Ok(config)
}
