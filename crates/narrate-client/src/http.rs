//! HTTP backend abstraction for the synthesis service API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest.
//!
//! Requests here are single-shot: the initial submission is never
//! retried, and the bounded retry of status queries belongs to the job
//! controller, not the transport.

use crate::error::{ClientError, ClientResult};
use crate::models::ServiceConfig;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the service.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `SynthesisClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T>;

    /// Post a JSON body to a URL and deserialize the response.
    async fn post_json<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        url: &Url,
        body: &B,
    ) -> ClientResult<T>;

    /// Issue a DELETE and deserialize the response.
    async fn delete_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultSynthesisClient` and interact with it through the
/// `SynthesisClientPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Map a non-success response to the appropriate error.
    fn error_for_status(url: &Url, status: reqwest::StatusCode) -> ClientError {
        if status.as_u16() == 404 {
            if let Some(job_id) = extract_job_id_from_path(url.path()) {
                return ClientError::JobNotFound { job_id };
            }
        }

        ClientError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
        }
    }

    async fn decode<T: DeserializeOwned>(url: &Url, response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(url, status));
        }
        let data: T = response.json().await?;
        Ok(data)
    }
}

/// Try to extract a job ID from a status-query path.
fn extract_job_id_from_path(path: &str) -> Option<String> {
    let path = path.trim_start_matches('/');
    path.strip_prefix("job/")
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .map(ToString::to_string)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
        let response = self.client.get(url.as_str()).send().await?;
        Self::decode(url, response).await
    }

    async fn post_json<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        url: &Url,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(url.as_str()).json(body).send().await?;
        Self::decode(url, response).await
    }

    async fn delete_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
        let response = self.client.delete(url.as_str()).send().await?;
        Self::decode(url, response).await
    }
}

// ============================================================================
// Scripted Backend for Testing
// ============================================================================
