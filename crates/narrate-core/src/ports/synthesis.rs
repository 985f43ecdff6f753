//! Synthesis service port: trait abstraction over the remote TTS backend.
//!
//! # Design Rules
//!
//! - DTOs here are transport-agnostic wire shapes (no `narrate-client`
//!   types). Conversion from HTTP responses happens inside the adapter,
//!   never here.
//! - `SynthesisClientPort` is the only surface the job controller and the
//!   CLI need in order to drive the full job lifecycle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::job::{JobId, StatusUpdate};

// ── DTOs ─────────────────────────────────────────────────────────────────────

/// Service liveness report from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Service status label (e.g. `"ok"`).
    pub status: String,
    /// Optional hardware description advertised by the service.
    pub gpu: Option<String>,
}

/// A trained voice profile known to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Profile identifier used in preview requests.
    pub id: String,
    /// Training status label (e.g. `"processing"`, `"trained"`).
    pub status: String,
    /// Checkpoint path when training has finished.
    pub ckpt_path: Option<String>,
}

// ── Error ─────────────────────────────────────────────────────────────────────

/// Errors returned by `SynthesisClientPort` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SynthesisPortError {
    /// The service answered with a non-success HTTP status.
    #[error("Service error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Detail from the response or the request URL.
        message: String,
    },

    /// The job identifier is not known to the service.
    #[error("Job '{job_id}' not found")]
    JobNotFound {
        /// The identifier that was queried.
        job_id: String,
    },

    /// The request could not complete (DNS, refused connection, timeout).
    #[error("Network error: {message}")]
    Network {
        /// Detailed error message.
        message: String,
    },

    /// The service answered with a payload the client could not parse.
    #[error("Invalid response from service: {message}")]
    InvalidResponse {
        /// Description of what was invalid.
        message: String,
    },
}

/// Result type alias for port operations.
pub type SynthesisPortResult<T> = Result<T, SynthesisPortError>;

// ── Port trait ────────────────────────────────────────────────────────────────

/// Port trait for the remote synthesis service.
///
/// Implemented by `SynthesisClient` in `narrate-client`. Consumed by the
/// job controller in `narrate-jobs` and by CLI handlers.
#[async_trait]
pub trait SynthesisClientPort: Send + Sync {
    /// Submit text for synthesis with the default voice.
    ///
    /// The caller is responsible for rejecting empty text before this
    /// point; the port issues exactly one request and never retries.
    async fn submit(&self, text: &str) -> SynthesisPortResult<JobId>;

    /// Submit text for synthesis with a specific trained voice profile.
    async fn submit_preview(&self, voice_id: &str, text: &str) -> SynthesisPortResult<JobId>;

    /// Query the current status of a job.
    async fn job_status(&self, id: &JobId) -> SynthesisPortResult<StatusUpdate>;

    /// Probe service liveness.
    async fn health(&self) -> SynthesisPortResult<HealthReport>;

    /// List trained voice profiles.
    async fn list_voice_profiles(&self) -> SynthesisPortResult<Vec<VoiceProfile>>;

    /// Delete a voice profile and its data. Returns the service's message.
    async fn delete_voice_profile(&self, voice_id: &str) -> SynthesisPortResult<String>;

    /// Locator for a finished job's audio, joined byte-for-byte from the
    /// configured base and the raw result reference. Never fails; a
    /// malformed reference yields a locator that fails downstream.
    fn audio_url(&self, result_ref: &str) -> String;
}
