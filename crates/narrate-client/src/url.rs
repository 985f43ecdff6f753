//! URL construction helpers for the synthesis service API.
//!
//! Pure functions for building service URLs, ensuring consistent URL
//! construction across all API calls. `build_audio_url` is the one
//! exception to returning [`Url`]: the audio locator is a byte-for-byte
//! string join of the base and the raw result reference, so it is built
//! without parsing and can never fail.

use crate::models::ServiceConfig;
use narrate_core::JobId;
use url::Url;

/// Append a path to the configured base, preserving any base path prefix.
fn join_path(config: &ServiceConfig, path: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{path}"));
    url
}

/// Build the URL for `POST /tts`.
pub fn build_submit_url(config: &ServiceConfig) -> Url {
    join_path(config, "tts")
}

/// Build the URL for `POST /voice/preview`.
pub fn build_preview_url(config: &ServiceConfig) -> Url {
    join_path(config, "voice/preview")
}

/// Build the URL for `GET /job/{id}`.
pub fn build_job_url(config: &ServiceConfig, id: &JobId) -> Url {
    join_path(config, &format!("job/{id}"))
}

/// Build the URL for `GET /health`.
pub fn build_health_url(config: &ServiceConfig) -> Url {
    join_path(config, "health")
}

/// Build the URL for `GET /voice/profiles`.
pub fn build_profiles_url(config: &ServiceConfig) -> Url {
    join_path(config, "voice/profiles")
}

/// Build the URL for `DELETE /voice/{id}`.
pub fn build_profile_delete_url(config: &ServiceConfig, voice_id: &str) -> Url {
    join_path(config, &format!("voice/{voice_id}"))
}

/// Build the audio locator for a finished job's result reference.
///
/// Plain string concatenation: the reference is joined to
/// `{base}/static/` exactly as the service sent it. A malformed
/// reference yields a locator that fails downstream.
pub fn build_audio_url(config: &ServiceConfig, result_ref: &str) -> String {
    format!(
        "{}/static/{result_ref}",
        config.base_url.as_str().trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> ServiceConfig {
        ServiceConfig::default()
    }

    #[test]
    fn test_build_submit_url() {
        let url = build_submit_url(&default_config());
        assert_eq!(url.as_str(), "http://localhost:8000/tts");
    }

    #[test]
    fn test_build_job_url() {
        let url = build_job_url(&default_config(), &JobId::new("abc123"));
        assert_eq!(url.as_str(), "http://localhost:8000/job/abc123");
    }

    #[test]
    fn test_build_preview_and_profile_urls() {
        let config = default_config();
        assert_eq!(
            build_preview_url(&config).as_str(),
            "http://localhost:8000/voice/preview"
        );
        assert_eq!(
            build_profiles_url(&config).as_str(),
            "http://localhost:8000/voice/profiles"
        );
        assert_eq!(
            build_profile_delete_url(&config, "a1b2c3d4").as_str(),
            "http://localhost:8000/voice/a1b2c3d4"
        );
    }

    #[test]
    fn test_build_health_url() {
        let url = build_health_url(&default_config());
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn test_base_path_prefix_is_preserved() {
        let config = ServiceConfig {
            base_url: Url::parse("http://gateway.internal/tts-service/").unwrap(),
            ..Default::default()
        };
        assert_eq!(
            build_submit_url(&config).as_str(),
            "http://gateway.internal/tts-service/tts"
        );
        assert_eq!(
            build_job_url(&config, &JobId::new("j1")).as_str(),
            "http://gateway.internal/tts-service/job/j1"
        );
    }

    #[test]
    fn test_build_audio_url_joins_byte_for_byte() {
        let url = build_audio_url(&default_config(), "abc123.wav");
        assert_eq!(url, "http://localhost:8000/static/abc123.wav");
    }

    #[test]
    fn test_build_audio_url_never_fails_on_odd_refs() {
        let config = default_config();
        // Malformed refs are passed through untouched; they fail downstream.
        assert_eq!(
            build_audio_url(&config, "../weird name.wav"),
            "http://localhost:8000/static/../weird name.wav"
        );
        assert_eq!(build_audio_url(&config, ""), "http://localhost:8000/static/");
    }
}
