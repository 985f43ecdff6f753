//! Resolution of a finished job into a playable/downloadable artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finished job's audio, ready for playback or download.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAudio {
    /// Fully-qualified locator for the audio bytes.
    pub url: String,
    /// Suggested download file name, unique per resolution instant.
    pub file_name: String,
}

/// Derive a suggested download file name for the given instant.
///
/// Uses millisecond precision so repeated resolutions within one session
/// do not collide. Independent of the locator itself.
#[must_use]
pub fn suggested_file_name(at: DateTime<Utc>) -> String {
    format!("narrate_{}.wav", at.timestamp_millis())
}

/// Pair an audio locator with a file name derived from the given instant.
///
/// Never fails: the locator is used as-is, and a malformed one simply
/// fails to load downstream.
pub fn resolve_audio(url: impl Into<String>, at: DateTime<Utc>) -> ResolvedAudio {
    ResolvedAudio {
        url: url.into(),
        file_name: suggested_file_name(at),
    }
}
