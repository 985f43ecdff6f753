//! Pure state machine for a single synthesis job.
//!
//! The state machine holds status, result reference, and error message,
//! and enforces monotonic progression toward a terminal state. It never
//! touches timers or the network and never returns an error: invalid
//! transitions are ignored and reported through the returned
//! [`Transition`].

use tracing::{debug, warn};

use super::status::JobStatus;
use super::types::StatusUpdate;

/// What the poll loop must do after applying a status update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Non-terminal status; keep polling and show the interim state.
    Pending,
    /// Job finished; stop polling and resolve the result reference.
    Finished {
        /// Raw result reference returned by the service.
        result: String,
    },
    /// Job failed; stop polling and surface the message.
    Failed {
        /// Failure message, carried verbatim from the service.
        error: String,
    },
    /// Update arrived after a terminal state (or regressed the partial
    /// order) and was ignored.
    Ignored,
}

/// Mutable state for one tracked job.
///
/// Invariants:
/// - `status` is non-decreasing in `Queued < Processing ≈ Unknown < terminal`
/// - `result` is set iff `status == Finished`
/// - `error` is set iff `status == Failed`
#[derive(Clone, Debug)]
pub struct JobState {
    status: JobStatus,
    raw_status: String,
    result: Option<String>,
    error: Option<String>,
}

impl Default for JobState {
    fn default() -> Self {
        Self::new()
    }
}

impl JobState {
    /// Fresh state for a just-submitted job.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: JobStatus::Queued,
            raw_status: JobStatus::Queued.as_str().to_string(),
            result: None,
            error: None,
        }
    }

    /// Current parsed status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Wire status string backing the current status.
    #[must_use]
    pub fn raw_status(&self) -> &str {
        &self.raw_status
    }

    /// Result reference, present iff the job finished.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Failure message, present iff the job failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the job reached `Finished` or `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply one observed status update.
    ///
    /// Updates arriving after a terminal state are ignored, as are
    /// regressions in the status partial order. `result` and `error` are
    /// only ever stored together with their matching terminal status.
    pub fn apply(&mut self, update: &StatusUpdate) -> Transition {
        if self.status.is_terminal() {
            warn!(
                current = self.status.as_str(),
                incoming = %update.raw_status,
                "ignoring status update after terminal state"
            );
            return Transition::Ignored;
        }

        if update.status.rank() < self.status.rank() {
            warn!(
                current = self.status.as_str(),
                incoming = %update.raw_status,
                "ignoring status regression"
            );
            return Transition::Ignored;
        }

        self.status = update.status;
        self.raw_status = update.raw_status.clone();

        match update.status {
            JobStatus::Finished => {
                if update.result.is_none() {
                    debug!("finished status arrived without a result reference");
                }
                // Malformed/empty refs resolve to a locator that fails
                // downstream; resolution itself never fails.
                let result = update.result.clone().unwrap_or_default();
                self.result = Some(result.clone());
                Transition::Finished { result }
            }
            JobStatus::Failed => {
                let error = update
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string());
                self.error = Some(error.clone());
                Transition::Failed { error }
            }
            JobStatus::Queued | JobStatus::Processing | JobStatus::Unknown => Transition::Pending,
        }
    }
}
