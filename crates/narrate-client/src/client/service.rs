//! Service health and voice profile management.

use narrate_core::{HealthReport, VoiceProfile};

use super::SynthesisClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::{HealthResponse, MessageResponse, VoiceProfileEntry, VoiceProfilesResponse};
use crate::url::{build_health_url, build_profile_delete_url, build_profiles_url};

impl<B: HttpBackend> SynthesisClient<B> {
    /// Probe service liveness via `GET /health`.
    pub async fn fetch_health(&self) -> ClientResult<HealthReport> {
        let url = build_health_url(&self.config);
        let response: HealthResponse = self.backend.get_json(&url).await?;
        Ok(response.into_report())
    }

    /// List trained voice profiles.
    pub async fn fetch_voice_profiles(&self) -> ClientResult<Vec<VoiceProfile>> {
        let url = build_profiles_url(&self.config);
        let response: VoiceProfilesResponse = self.backend.get_json(&url).await?;
        Ok(response
            .profiles
            .into_iter()
            .map(VoiceProfileEntry::into_profile)
            .collect())
    }

    /// Delete a voice profile; returns the service's outcome message.
    pub async fn remove_voice_profile(&self, voice_id: &str) -> ClientResult<String> {
        let url = build_profile_delete_url(&self.config, voice_id);
        let response: MessageResponse = self.backend.delete_json(&url).await?;
        Ok(response.message)
    }
}
