//! Main commands enum and primary subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the narrate tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize text to speech and download the audio
    Synth {
        /// Text to synthesize
        text: String,
        /// Trained voice profile to preview instead of the default voice
        #[arg(long)]
        voice: Option<String>,
        /// Poll cadence in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
        /// Where to save the audio (defaults to a timestamped file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the audio URL without downloading
        #[arg(long)]
        no_download: bool,
    },

    /// Check synthesis service health
    Health,

    /// List trained voice profiles
    Voices,

    /// Delete a trained voice profile
    DeleteVoice {
        /// ID of the voice profile to delete
        voice_id: String,
    },
}
