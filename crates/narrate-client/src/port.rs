//! Port trait implementation for `SynthesisClient`.
//!
//! This module implements the core-owned `SynthesisClientPort` trait for
//! `SynthesisClient`, mapping internal client errors to core port errors.

use async_trait::async_trait;
use narrate_core::{
    HealthReport, JobId, StatusUpdate, SynthesisClientPort, SynthesisPortError,
    SynthesisPortResult, VoiceProfile,
};

use crate::client::SynthesisClient;
use crate::error::ClientError;
use crate::http::HttpBackend;
use crate::url::build_audio_url;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `SynthesisPortError`.
fn map_error(err: ClientError) -> SynthesisPortError {
    match err {
        ClientError::ApiRequestFailed { status, url } => SynthesisPortError::Api {
            status,
            message: url,
        },
        ClientError::JobNotFound { job_id } => SynthesisPortError::JobNotFound { job_id },
        ClientError::InvalidResponse { message } => SynthesisPortError::InvalidResponse { message },
        ClientError::Network(e) => SynthesisPortError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => SynthesisPortError::InvalidResponse {
            message: e.to_string(),
        },
        ClientError::JsonParse(e) => SynthesisPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> SynthesisClientPort for SynthesisClient<B> {
    async fn submit(&self, text: &str) -> SynthesisPortResult<JobId> {
        self.submit_text(text).await.map_err(map_error)
    }

    async fn submit_preview(&self, voice_id: &str, text: &str) -> SynthesisPortResult<JobId> {
        self.submit_voice_preview(voice_id, text)
            .await
            .map_err(map_error)
    }

    async fn job_status(&self, id: &JobId) -> SynthesisPortResult<StatusUpdate> {
        self.fetch_job_status(id).await.map_err(map_error)
    }

    async fn health(&self) -> SynthesisPortResult<HealthReport> {
        self.fetch_health().await.map_err(map_error)
    }

    async fn list_voice_profiles(&self) -> SynthesisPortResult<Vec<VoiceProfile>> {
        self.fetch_voice_profiles().await.map_err(map_error)
    }

    async fn delete_voice_profile(&self, voice_id: &str) -> SynthesisPortResult<String> {
        self.remove_voice_profile(voice_id).await.map_err(map_error)
    }

    fn audio_url(&self, result_ref: &str) -> String {
        build_audio_url(&self.config, result_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::ScriptedBackend;
    use crate::models::ServiceConfig;
    use serde_json::json;

    #[test]
    fn test_map_error_api_failure() {
        let err = ClientError::ApiRequestFailed {
            status: 503,
            url: "http://localhost:8000/tts".to_string(),
        };
        match map_error(err) {
            SynthesisPortError::Api { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("/tts"));
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_job_not_found() {
        let err = ClientError::JobNotFound {
            job_id: "abc123".to_string(),
        };
        match map_error(err) {
            SynthesisPortError::JobNotFound { job_id } => assert_eq!(job_id, "abc123"),
            other => panic!("expected JobNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_json_parse_becomes_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(ClientError::JsonParse(json_err)),
            SynthesisPortError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_port_submit_through_trait_object() {
        let backend = ScriptedBackend::new().with_response("/tts", json!({"job_id": "j1"}));
        let client = SynthesisClient::with_backend(ServiceConfig::default(), backend);
        let port: &dyn SynthesisClientPort = &client;

        let id = port.submit("Hello world").await.unwrap();
        assert_eq!(id, JobId::new("j1"));
    }

    #[test]
    fn test_port_audio_url() {
        let backend = ScriptedBackend::new();
        let client = SynthesisClient::with_backend(ServiceConfig::default(), backend);
        let port: &dyn SynthesisClientPort = &client;

        assert_eq!(
            port.audio_url("abc123.wav"),
            "http://localhost:8000/static/abc123.wav"
        );
    }
}
