//! Job status as reported by the synthesis service.

use serde::{Deserialize, Serialize};

/// Status of a synthesis job.
///
/// `Unknown` covers any wire value the client does not recognize (the
/// service is known to report compound values like `"queued/started"`
/// while a worker picks the job up). It is a display state, not an
/// error, and polling continues through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Waiting for a worker.
    Queued,
    /// A worker is synthesizing audio.
    Processing,
    /// Audio is ready; a result reference is available.
    Finished,
    /// The service reported a failure for this job.
    Failed,
    /// Unrecognized wire value; treated like `Processing` for ordering.
    Unknown,
}

impl JobStatus {
    /// Convert to the canonical wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire status string.
    ///
    /// Unrecognized values map to `Unknown` rather than failing.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s {
            "queued" => Self::Queued,
            "processing" => Self::Processing,
            "finished" => Self::Finished,
            "failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Whether this status ends the job's lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }

    /// Position in the partial order `Queued < Processing ≈ Unknown < terminal`.
    ///
    /// Used by the state machine to reject regressions.
    #[must_use]
    pub(crate) const fn rank(&self) -> u8 {
        match self {
            Self::Queued => 0,
            Self::Processing | Self::Unknown => 1,
            Self::Finished | Self::Failed => 2,
        }
    }
}
