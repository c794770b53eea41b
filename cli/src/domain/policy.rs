//! Polling and failure policies that bound a purge run.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default spacing between `DescribeJob` calls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Default ceiling on a single job wait. Inventory jobs usually finish in 3-5 hours.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// How long to wait between polls, and for how long in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until the job is terminal, however long that takes.
    pub max_wait: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: Some(DEFAULT_MAX_WAIT),
        }
    }
}

impl PollPolicy {
    /// Maximum number of `DescribeJob` calls the deadline allows, if bounded.
    ///
    /// Always at least one.
    #[must_use]
    pub fn max_polls(&self) -> Option<u64> {
        let max_wait = self.max_wait?;
        let interval = self.interval.as_millis().max(1);
        let polls = max_wait.as_millis().div_ceil(interval).max(1);
        Some(u64::try_from(polls).unwrap_or(u64::MAX))
    }
}

/// What to do when the first inventory job ends in `Failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobFailurePolicy {
    /// Stop the run before touching any archive.
    #[default]
    Abort,
    /// Log the failure and carry on with whatever inventory the job produced.
    Continue,
}

impl JobFailurePolicy {
    pub const VARIANTS: &'static [&'static str] = &["abort", "continue"];
}

impl fmt::Display for JobFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Abort => "abort",
            Self::Continue => "continue",
        })
    }
}

impl FromStr for JobFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            other => Err(other.to_string()),
        }
    }
}

/// Everything a purge run needs besides the vault and the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgePolicy {
    pub poll: PollPolicy,
    pub on_job_failure: JobFailurePolicy,
}
