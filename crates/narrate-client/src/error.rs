//! Internal error types for synthesis service operations.
//!
//! These errors are internal to `narrate-client` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors related to synthesis service API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// API request failed with an HTTP error status.
    #[error("Service request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The queried job is not known to the service.
    #[error("Job '{job_id}' not found")]
    JobNotFound {
        /// The job ID that was not found
        job_id: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from service: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ClientError::ApiRequestFailed {
            status: 500,
            url: "http://localhost:8000/tts".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/tts"));
    }

    #[test]
    fn test_job_not_found_error_message() {
        let error = ClientError::JobNotFound {
            job_id: "abc123".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("abc123"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = ClientError::InvalidResponse {
            message: "missing field 'job_id'".to_string(),
        };
        assert!(error.to_string().contains("missing field"));
    }

    #[test]
    fn test_client_result_ok() {
        let result: ClientResult<i32> = Ok(42);
        assert!(matches!(result, Ok(42)));
    }
}
