//! Synthesis service client.
//!
//! This module provides the main client interface for submitting jobs
//! and querying the synthesis service.

mod jobs;
mod service;

use crate::config::SynthesisClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ServiceConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default synthesis client using the reqwest HTTP backend.
pub type DefaultSynthesisClient = SynthesisClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the synthesis service API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultSynthesisClient` for production code. The generic parameter
/// `B` is an implementation detail - external code should not instantiate
/// this directly but use `DefaultSynthesisClient::new()`.
pub struct SynthesisClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ServiceConfig,
}

impl<B: HttpBackend> std::fmt::Debug for SynthesisClient<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DefaultSynthesisClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `ClientError::InvalidUrl` if the configured base URL
    /// cannot be parsed; requests are never silently redirected to a
    /// different host than the one configured.
    pub fn new(config: &SynthesisClientConfig) -> ClientResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config);
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&SynthesisClientConfig::default()).expect("default config is valid")
    }

    fn to_internal_config(config: &SynthesisClientConfig) -> ClientResult<ServiceConfig> {
        Ok(ServiceConfig {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}

impl<B: HttpBackend> SynthesisClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a scripted backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ServiceConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::http::testing::ScriptedBackend;
    use serde_json::json;

    #[test]
    fn test_default_client_creation() {
        let config = SynthesisClientConfig::new();
        let _client = DefaultSynthesisClient::new(&config).unwrap();
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = SynthesisClientConfig::new().with_base_url("not a url");
        let err = DefaultSynthesisClient::new(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_configured_base_url_is_kept_verbatim() {
        let config = SynthesisClientConfig::new().with_base_url("http://tts.internal:9000");
        let client = DefaultSynthesisClient::new(&config).unwrap();
        assert_eq!(client.config.base_url.as_str(), "http://tts.internal:9000/");
    }

    #[test]
    fn test_client_with_scripted_backend() {
        let backend = ScriptedBackend::new().with_response("tts", json!({"job_id": "j1"}));
        let _client = SynthesisClient::with_backend(ServiceConfig::default(), backend);
    }
}
