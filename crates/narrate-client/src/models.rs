//! Internal configuration and wire DTOs for the synthesis service API.
//!
//! Response shapes deliberately tolerate extra fields: the service sends
//! advisory fields (`status`, `message`, `file_count`) alongside the ones
//! the client consumes.

use narrate_core::{HealthReport, StatusUpdate, VoiceProfile};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

// ============================================================================
// Internal Config
// ============================================================================

/// Internal client configuration with a validated base URL.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the synthesis service.
    pub base_url: Url,
    /// User agent string for HTTP requests.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8000").expect("default URL is valid"),
            user_agent: concat!("narrate-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body for `POST /tts`.
#[derive(Debug, Serialize)]
pub struct SubmitRequest<'a> {
    /// Text to synthesize.
    pub text: &'a str,
}

/// Body for `POST /voice/preview`.
#[derive(Debug, Serialize)]
pub struct PreviewRequest<'a> {
    /// Voice profile to synthesize with.
    pub voice_id: &'a str,
    /// Text to synthesize.
    pub text: &'a str,
}

// ============================================================================
// Response Shapes
// ============================================================================

/// Response from either submission endpoint.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    /// Identifier assigned by the service.
    pub job_id: String,
}

/// Response from `GET /job/{id}`.
#[derive(Debug, Deserialize)]
pub struct JobStatusResponse {
    /// Raw status string.
    pub status: String,
    /// Result reference, present for finished jobs.
    #[serde(default)]
    pub result: Option<String>,
    /// Failure message, present for failed jobs.
    #[serde(default)]
    pub error: Option<String>,
}

impl JobStatusResponse {
    /// Convert to the core status update, preserving the raw status string.
    pub fn into_update(self) -> StatusUpdate {
        StatusUpdate::from_wire(self.status, self.result, self.error)
    }
}

/// Response from `GET /health`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    /// Service status label.
    pub status: String,
    /// Optional hardware description.
    #[serde(default)]
    pub gpu: Option<String>,
}

impl HealthResponse {
    /// Convert to the core health report.
    pub fn into_report(self) -> HealthReport {
        HealthReport {
            status: self.status,
            gpu: self.gpu,
        }
    }
}

/// Response from `GET /voice/profiles`.
#[derive(Debug, Deserialize)]
pub struct VoiceProfilesResponse {
    /// All known profiles.
    pub profiles: Vec<VoiceProfileEntry>,
}

/// One profile entry within [`VoiceProfilesResponse`].
#[derive(Debug, Deserialize)]
pub struct VoiceProfileEntry {
    /// Profile identifier.
    pub id: String,
    /// Training status label.
    pub status: String,
    /// Checkpoint path when trained.
    #[serde(default)]
    pub ckpt_path: Option<String>,
}

impl VoiceProfileEntry {
    /// Convert to the core DTO.
    pub fn into_profile(self) -> VoiceProfile {
        VoiceProfile {
            id: self.id,
            status: self.status,
            ckpt_path: self.ckpt_path,
        }
    }
}

/// Response from `DELETE /voice/{id}`.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrate_core::JobStatus;
    use serde_json::json;

    #[test]
    fn test_job_status_response_tolerates_missing_fields() {
        let parsed: JobStatusResponse =
            serde_json::from_value(json!({"status": "queued/started"})).unwrap();
        let update = parsed.into_update();
        assert_eq!(update.status, JobStatus::Unknown);
        assert_eq!(update.raw_status, "queued/started");
        assert!(update.result.is_none());
        assert!(update.error.is_none());
    }

    #[test]
    fn test_job_status_response_finished() {
        let parsed: JobStatusResponse =
            serde_json::from_value(json!({"status": "finished", "result": "abc123.wav"})).unwrap();
        let update = parsed.into_update();
        assert_eq!(update.status, JobStatus::Finished);
        assert_eq!(update.result.as_deref(), Some("abc123.wav"));
    }

    #[test]
    fn test_submit_response_ignores_advisory_fields() {
        // /voice/preview also returns status and message
        let parsed: SubmitResponse = serde_json::from_value(json!({
            "job_id": "j-42",
            "status": "queued",
            "message": "Preview generation started."
        }))
        .unwrap();
        assert_eq!(parsed.job_id, "j-42");
    }

    #[test]
    fn test_voice_profile_entry_conversion() {
        let parsed: VoiceProfileEntry = serde_json::from_value(json!({
            "id": "a1b2c3d4",
            "status": "trained",
            "ckpt_path": "data/models/a1b2c3d4/run0"
        }))
        .unwrap();
        let profile = parsed.into_profile();
        assert_eq!(profile.id, "a1b2c3d4");
        assert_eq!(profile.status, "trained");
        assert_eq!(profile.ckpt_path.as_deref(), Some("data/models/a1b2c3d4/run0"));
    }

    #[test]
    fn test_submit_request_wire_shape() {
        let body = SubmitRequest { text: "Hello world" };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"text": "Hello world"})
        );
    }
}
