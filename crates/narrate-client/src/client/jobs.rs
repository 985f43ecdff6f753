//! Job submission and status queries.

use narrate_core::{JobId, StatusUpdate};

use super::SynthesisClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::{JobStatusResponse, PreviewRequest, SubmitRequest, SubmitResponse};
use crate::url::{build_job_url, build_preview_url, build_submit_url};

impl<B: HttpBackend> SynthesisClient<B> {
    /// Submit text for synthesis with the default voice.
    ///
    /// Issues exactly one `POST /tts`; a failed submission is surfaced to
    /// the caller and never retried here.
    pub async fn submit_text(&self, text: &str) -> ClientResult<JobId> {
        let url = build_submit_url(&self.config);
        let response: SubmitResponse = self
            .backend
            .post_json(&url, &SubmitRequest { text })
            .await?;
        Ok(JobId::new(response.job_id))
    }

    /// Submit text for synthesis with a trained voice profile.
    pub async fn submit_voice_preview(&self, voice_id: &str, text: &str) -> ClientResult<JobId> {
        let url = build_preview_url(&self.config);
        let response: SubmitResponse = self
            .backend
            .post_json(&url, &PreviewRequest { voice_id, text })
            .await?;
        Ok(JobId::new(response.job_id))
    }

    /// Query the current status of a job.
    pub async fn fetch_job_status(&self, id: &JobId) -> ClientResult<StatusUpdate> {
        let url = build_job_url(&self.config, id);
        let response: JobStatusResponse = self.backend.get_json(&url).await?;
        Ok(response.into_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::http::testing::{Canned, ScriptedBackend};
    use crate::models::ServiceConfig;
    use narrate_core::JobStatus;
    use serde_json::json;

    fn client(backend: ScriptedBackend) -> SynthesisClient<ScriptedBackend> {
        SynthesisClient::with_backend(ServiceConfig::default(), backend)
    }

    #[tokio::test]
    async fn test_submit_text_returns_job_id() {
        let client = client(
            ScriptedBackend::new().with_response("/tts", json!({"job_id": "abc123"})),
        );

        let id = client.submit_text("Hello world").await.unwrap();
        assert_eq!(id, JobId::new("abc123"));
        assert_eq!(
            client.backend.requests(),
            vec!["POST http://localhost:8000/tts"]
        );
    }

    #[tokio::test]
    async fn test_submit_text_surfaces_backend_failure() {
        let client = client(
            ScriptedBackend::new().with_script("/tts", vec![Canned::Status(502)]),
        );

        let err = client.submit_text("Hello").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiRequestFailed { status: 502, .. }
        ));
        // Exactly one request: no retry on submission.
        assert_eq!(client.backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_voice_preview_posts_to_preview_endpoint() {
        let client = client(
            ScriptedBackend::new().with_response("/voice/preview", json!({
                "job_id": "j-9",
                "status": "queued",
                "message": "Preview generation started."
            })),
        );

        let id = client.submit_voice_preview("a1b2c3d4", "Hi").await.unwrap();
        assert_eq!(id, JobId::new("j-9"));
    }

    #[tokio::test]
    async fn test_fetch_job_status_parses_terminal_payload() {
        let client = client(ScriptedBackend::new().with_response(
            "/job/abc123",
            json!({"status": "finished", "result": "abc123.wav"}),
        ));

        let update = client
            .fetch_job_status(&JobId::new("abc123"))
            .await
            .unwrap();
        assert_eq!(update.status, JobStatus::Finished);
        assert_eq!(update.result.as_deref(), Some("abc123.wav"));
    }

    #[tokio::test]
    async fn test_fetch_job_status_maps_unrecognized_status() {
        let client = client(
            ScriptedBackend::new()
                .with_response("/job/j1", json!({"status": "queued/started"})),
        );

        let update = client.fetch_job_status(&JobId::new("j1")).await.unwrap();
        assert_eq!(update.status, JobStatus::Unknown);
        assert_eq!(update.raw_status, "queued/started");
    }
}
