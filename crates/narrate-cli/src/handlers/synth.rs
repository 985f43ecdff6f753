//! Synth command handler.
//!
//! Submits text, shows a spinner fed by the job's update channel, and
//! downloads the resolved audio once the job finishes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use narrate_jobs::ResolvedAudio;

use crate::bootstrap::CliContext;

/// Arguments for the synth command.
pub struct SynthArgs {
    /// Text to synthesize.
    pub text: String,
    /// Trained voice profile to preview, if any.
    pub voice: Option<String>,
    /// Explicit output path; defaults to the suggested file name.
    pub output: Option<PathBuf>,
    /// Print the audio URL without downloading.
    pub no_download: bool,
}

/// Execute the synth command.
///
/// Empty text is a no-op, matching the controller's submission contract.
pub async fn execute(ctx: &CliContext, args: SynthArgs) -> Result<()> {
    let mut controller = ctx.controller();

    let handle = match args.voice.as_deref() {
        Some(voice) => controller.submit_preview(voice, &args.text).await?,
        None => controller.submit(&args.text).await?,
    };
    let Some(handle) = handle else {
        println!("Nothing to synthesize.");
        return Ok(());
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(handle.updates().borrow().display());

    let mut updates = handle.updates();
    let watcher_spinner = spinner.clone();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let update = updates.borrow_and_update().clone();
            watcher_spinner.set_message(update.display());
            if update.is_terminal() {
                break;
            }
        }
    });

    let outcome = handle.wait().await;
    watcher.abort();

    match outcome {
        Ok(audio) => {
            spinner.finish_with_message("Ready");
            println!("Audio URL: {}", audio.url);

            if !args.no_download {
                let path = args
                    .output
                    .unwrap_or_else(|| PathBuf::from(&audio.file_name));
                download(&audio, &path).await?;
                println!("Saved to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            spinner.finish_with_message(e.to_string());
            Err(e.into())
        }
    }
}

async fn download(audio: &ResolvedAudio, path: &Path) -> Result<()> {
    debug!(url = %audio.url, "downloading audio");

    let response = reqwest::get(&audio.url)
        .await
        .with_context(|| format!("failed to fetch {}", audio.url))?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
