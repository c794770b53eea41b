//! Domain types and validators for glacier-purge configuration.
//!
//! Pure functions only; no I/O.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::policy::{
    DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, JobFailurePolicy, PollPolicy, PurgePolicy,
};

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "polling.interval_secs",
    "polling.max_wait_secs",
    "on_job_failure",
];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.glacier-purge/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PurgeConfig {
    /// Job polling settings.
    pub polling: PollingConfig,
    /// Policy applied when the first inventory job fails.
    pub on_job_failure: JobFailurePolicy,
}

/// Polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds between `DescribeJob` calls.
    pub interval_secs: u64,
    /// Upper bound on a single job wait, in seconds. `0` waits forever.
    pub max_wait_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            max_wait_secs: DEFAULT_MAX_WAIT.as_secs(),
        }
    }
}

impl PurgeConfig {
    /// Resolve the run policy from this config.
    #[must_use]
    pub fn policy(&self) -> PurgePolicy {
        PurgePolicy {
            poll: PollPolicy {
                interval: Duration::from_secs(self.polling.interval_secs),
                max_wait: (self.polling.max_wait_secs > 0)
                    .then(|| Duration::from_secs(self.polling.max_wait_secs)),
            },
            on_job_failure: self.on_job_failure,
        }
    }

    /// Check values that were not written through [`PurgeConfig::set`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        validate_config_value(
            "polling.interval_secs",
            &self.polling.interval_secs.to_string(),
        )
    }

    /// Apply a validated key/value pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "polling.interval_secs" => self.polling.interval_secs = parse_secs(key, value)?,
            "polling.max_wait_secs" => self.polling.max_wait_secs = parse_secs(key, value)?,
            "on_job_failure" => {
                self.on_job_failure = value
                    .parse::<JobFailurePolicy>()
                    .map_err(|v| invalid(key, &v))?;
            }
            _ => {}
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "polling.interval_secs" => {
            if parse_secs(key, value)? == 0 {
                return Err(invalid(key, value).into());
            }
        }
        "polling.max_wait_secs" => {
            parse_secs(key, value)?;
        }
        "on_job_failure" => {
            value
                .parse::<JobFailurePolicy>()
                .map_err(|v| invalid(key, &v))?;
        }
        _ => {}
    }
    Ok(())
}

fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    let valid = match key {
        "on_job_failure" => JobFailurePolicy::VARIANTS.join(", "),
        "polling.interval_secs" => "a positive number of seconds".to_string(),
        _ => "a number of seconds (0 = no limit)".to_string(),
    };
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid,
    }
}
