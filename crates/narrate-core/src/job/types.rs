//! Value types shared between the client adapter and the job controller.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::JobStatus;

/// Opaque job identifier assigned by the synthesis service.
///
/// Immutable once assigned; the client never inspects its structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Wrap a service-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
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

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One observed status payload from `GET /job/{id}`.
///
/// `raw_status` preserves the wire string verbatim so unrecognized values
/// (mapped to [`JobStatus::Unknown`]) can still be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Parsed status.
    pub status: JobStatus,
    /// The status string exactly as the service sent it.
    pub raw_status: String,
    /// Result reference; the service sends this only for finished jobs.
    pub result: Option<String>,
    /// Failure message; the service sends this only for failed jobs.
    pub error: Option<String>,
}

impl StatusUpdate {
    /// Build an update from a raw wire status plus optional fields.
    pub fn from_wire(
        raw_status: impl Into<String>,
        result: Option<String>,
        error: Option<String>,
    ) -> Self {
        let raw_status = raw_status.into();
        Self {
            status: JobStatus::from_wire(&raw_status),
            raw_status,
            result,
            error,
        }
    }
}
