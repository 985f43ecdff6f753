//! Job lifecycle error types.
//!
//! Designed to be serializable across process boundaries (CLI output,
//! future IPC surfaces) without depending on non-serializable types;
//! transport errors are captured as strings at the adapter boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for the job lifecycle.
///
/// Only `Submission` and `Synthesis` (plus `PollExhausted`) are
/// user-visible terminal outcomes; individual transient poll failures
/// are absorbed by the scheduler and never appear here.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobError {
    /// The initial submission could not complete. No polling ever starts.
    #[error("Error connecting to backend: {message}")]
    Submission {
        /// Detailed error message.
        message: String,
    },

    /// The service reported the job as failed.
    #[error("Failed: {message}")]
    Synthesis {
        /// Failure message, carried verbatim from the job's error field.
        message: String,
    },

    /// Consecutive transient poll failures exceeded the configured ceiling.
    #[error("Gave up polling after {attempts} consecutive failed status queries")]
    PollExhausted {
        /// Number of consecutive failed queries.
        attempts: u32,
    },

    /// The poll task was cancelled (teardown or a superseding submission).
    #[error("Job cancelled")]
    Cancelled,

    /// General/uncategorized error.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl JobError {
    /// Create a submission error from any message.
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    /// Create a synthesis failure from the service's error field.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Create an uncategorized error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether a fresh submission could plausibly succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Submission { .. } | Self::PollExhausted { .. } | Self::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_message() {
        let err = JobError::submission("connection refused");
        assert_eq!(
            err.to_string(),
            "Error connecting to backend: connection refused"
        );
    }

    #[test]
    fn test_synthesis_error_carries_service_message() {
        let err = JobError::synthesis("synthesis error");
        assert_eq!(err.to_string(), "Failed: synthesis error");
    }

    #[test]
    fn test_poll_exhausted_message() {
        let err = JobError::PollExhausted { attempts: 5 };
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(JobError::submission("x").is_retryable());
        assert!(JobError::PollExhausted { attempts: 3 }.is_retryable());
        assert!(JobError::Cancelled.is_retryable());
        assert!(!JobError::synthesis("x").is_retryable());
        assert!(!JobError::other("x").is_retryable());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let err = JobError::PollExhausted { attempts: 4 };
        let json = serde_json::to_string(&err).unwrap();
        let parsed: JobError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }
}
