//! Job updates published through the poll task's watch channel.
//!
//! These types are "UI safe" - Clone + Debug + Serialize + Deserialize
//! with no infrastructure dependencies, so frontends can consume them
//! directly.

use narrate_core::{JobId, JobStatus};
use serde::{Deserialize, Serialize};

use crate::resolver::ResolvedAudio;

/// Single discriminated union for all job lifecycle updates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobUpdate {
    /// Submission succeeded; polling is starting.
    Submitted {
        /// Service-assigned job identifier.
        id: JobId,
    },

    /// An interim (non-terminal) status was observed.
    Status {
        /// Job identifier.
        id: JobId,
        /// Parsed status.
        status: JobStatus,
        /// The wire status string verbatim, for display.
        raw_status: String,
    },

    /// The job finished and its audio was resolved.
    Finished {
        /// Job identifier.
        id: JobId,
        /// Resolved audio locator and suggested file name.
        audio: ResolvedAudio,
    },

    /// The service reported the job as failed.
    Failed {
        /// Job identifier.
        id: JobId,
        /// Failure message, verbatim from the service.
        error: String,
    },
}

impl JobUpdate {
    /// Human-readable status line for this update.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Submitted { id } => format!("Job ID: {id} - Processing..."),
            Self::Status { raw_status, .. } => format!("Status: {raw_status}"),
            Self::Finished { .. } => "Ready".to_string(),
            Self::Failed { error, .. } => format!("Failed: {error}"),
        }
    }

    /// Whether this update ends the job's lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished { .. } | Self::Failed { .. })
    }

    /// The job this update belongs to.
    #[must_use]
    pub const fn id(&self) -> &JobId {
        match self {
            Self::Submitted { id }
            | Self::Status { id, .. }
            | Self::Finished { id, .. }
            | Self::Failed { id, .. } => id,
        }
    }
}
