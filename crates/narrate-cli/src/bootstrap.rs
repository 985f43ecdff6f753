//! CLI bootstrap - the composition root.
//!
//! The only place where infrastructure is wired together for the CLI
//! adapter: the reqwest-backed client is instantiated here and handed to
//! handlers behind the port trait.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use narrate_client::{DefaultSynthesisClient, SynthesisClientConfig};
use narrate_core::SynthesisClientPort;
use narrate_jobs::{JobController, PollConfig};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the synthesis service.
    pub base_url: String,
    /// Poll cadence for job status queries.
    pub poll_interval: Duration,
}

impl CliConfig {
    /// Create config with default settings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            poll_interval: Duration::from_millis(1000),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    client: Arc<dyn SynthesisClientPort>,
    poll_interval: Duration,
}

impl CliContext {
    /// Access the synthesis client.
    #[must_use]
    pub fn client(&self) -> &Arc<dyn SynthesisClientPort> {
        &self.client
    }

    /// Build a job controller over the composed client.
    #[must_use]
    pub fn controller(&self) -> JobController {
        let config = PollConfig::new().with_interval(self.poll_interval);
        JobController::new(Arc::clone(&self.client), config)
    }
}

impl std::fmt::Debug for CliContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliContext")
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

/// Bootstrap the CLI application.
///
/// Instantiates the reqwest-backed synthesis client from the given
/// config. An unparsable base URL is an error, not a silent fallback.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client_config = SynthesisClientConfig::new().with_base_url(config.base_url.clone());
    let client = DefaultSynthesisClient::new(&client_config)
        .with_context(|| format!("invalid base URL '{}'", config.base_url))?;

    Ok(CliContext {
        client: Arc::new(client),
        poll_interval: config.poll_interval,
    })
}

/// Bootstrap with a custom client (for testing).
#[must_use]
pub fn bootstrap_with(client: Arc<dyn SynthesisClientPort>, poll_interval: Duration) -> CliContext {
    CliContext {
        client,
        poll_interval,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use narrate_core::{
        HealthReport, JobId, StatusUpdate, SynthesisClientPort, SynthesisPortResult, VoiceProfile,
    };

    /// Canned-response port for handler tests: every operation succeeds
    /// and jobs finish on the first status query.
    pub(crate) struct StubPort;

    impl StubPort {
        pub(crate) fn shared() -> Arc<Self> {
            Arc::new(Self)
        }
    }

    #[async_trait]
    impl SynthesisClientPort for StubPort {
        async fn submit(&self, _text: &str) -> SynthesisPortResult<JobId> {
            Ok(JobId::new("stub-job"))
        }

        async fn submit_preview(&self, _voice_id: &str, _text: &str) -> SynthesisPortResult<JobId> {
            Ok(JobId::new("stub-job"))
        }

        async fn job_status(&self, _id: &JobId) -> SynthesisPortResult<StatusUpdate> {
            Ok(StatusUpdate::from_wire(
                "finished",
                Some("stub-job.wav".to_string()),
                None,
            ))
        }

        async fn health(&self) -> SynthesisPortResult<HealthReport> {
            Ok(HealthReport {
                status: "ok".to_string(),
                gpu: Some("stub gpu".to_string()),
            })
        }

        async fn list_voice_profiles(&self) -> SynthesisPortResult<Vec<VoiceProfile>> {
            Ok(vec![VoiceProfile {
                id: "a1b2".to_string(),
                status: "trained".to_string(),
                ckpt_path: None,
            }])
        }

        async fn delete_voice_profile(&self, voice_id: &str) -> SynthesisPortResult<String> {
            Ok(format!("Voice profile {voice_id} successfully deleted."))
        }

        fn audio_url(&self, result_ref: &str) -> String {
            format!("http://localhost:8000/static/{result_ref}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::StubPort;

    #[test]
    fn test_config_with_defaults() {
        let config = CliConfig::with_defaults();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_bootstrap_builds_context() {
        let config = CliConfig::with_defaults();
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(
            ctx.client().audio_url("abc.wav"),
            "http://localhost:8000/static/abc.wav"
        );
    }

    #[test]
    fn test_bootstrap_rejects_invalid_base_url() {
        let mut config = CliConfig::with_defaults();
        config.base_url = "not a url".to_string();

        let err = bootstrap(&config).unwrap_err();
        assert!(err.to_string().contains("invalid base URL"));
    }

    #[tokio::test]
    async fn test_bootstrap_with_injected_client() {
        let ctx = bootstrap_with(StubPort::shared(), Duration::from_millis(10));
        let report = ctx.client().health().await.unwrap();
        assert_eq!(report.status, "ok");
    }

    #[tokio::test]
    async fn test_context_controller_drives_stub_job() {
        let ctx = bootstrap_with(StubPort::shared(), Duration::from_millis(10));
        let mut controller = ctx.controller();

        let handle = controller.submit("Hello").await.unwrap().unwrap();
        let audio = handle.wait().await.unwrap();
        assert_eq!(audio.url, "http://localhost:8000/static/stub-job.wav");
    }
}
