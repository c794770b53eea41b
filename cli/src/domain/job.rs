//! Inventory-retrieval job identity and status.
//!
//! Pure types only. The status codes are Glacier's, mapped in `infra::glacier`.

use std::fmt;

use serde::Serialize;

/// Job type sent when initiating a vault inventory.
pub const INVENTORY_RETRIEVAL: &str = "inventory-retrieval";

/// Opaque job identifier returned by the storage service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job status as reported by `DescribeJob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    InProgress,
    Succeeded,
    Failed,
    /// Any status code this tool does not know about. Treated as non-terminal.
    Unknown(String),
}

impl JobStatus {
    /// Map a service status code onto a status.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "InProgress" => Self::InProgress,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire code for this status.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unknown(code) => code,
        }
    }

    /// `true` once no further state change can occur.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for JobStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One `DescribeJob` observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription {
    pub status: JobStatus,
    /// Free-form explanation the service attaches, mostly on failure.
    pub status_message: Option<String>,
}

impl JobDescription {
    #[must_use]
    pub fn new(status: JobStatus) -> Self {
        Self {
            status,
            status_message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }
}
