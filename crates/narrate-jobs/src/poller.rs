//! The per-job poll loop.
//!
//! One task per job, spawned by the controller. Each iteration issues a
//! single status query, feeds the payload to the core state machine, and
//! publishes the outcome through a watch channel. The task resolves
//! exactly once: with audio on `Finished`, with an error on `Failed`,
//! `PollExhausted`, or cancellation.
//!
//! Cancellation is handled via `tokio::select!` around both the tick and
//! the in-flight query; a response that loses the race against the token
//! is discarded rather than applied to a superseded job's state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use narrate_core::{JobError, JobId, JobState, SynthesisClientPort, Transition};

use crate::events::JobUpdate;
use crate::resolver::{ResolvedAudio, resolve_audio};

/// Configuration for the poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Cadence of status queries.
    pub(crate) interval: Duration,
    /// Consecutive failed queries tolerated before giving up.
    pub(crate) max_transient_failures: u32,
    /// Base delay for exponential backoff after a failed query.
    pub(crate) retry_base_delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            max_transient_failures: 5,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl PollConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polling cadence.
    ///
    /// Defaults to 1000 ms.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set how many consecutive failed status queries are tolerated
    /// before the poll resolves with `PollExhausted`.
    ///
    /// Defaults to 5.
    #[must_use]
    pub const fn with_max_transient_failures(mut self, max: u32) -> Self {
        self.max_transient_failures = max;
        self
    }

    /// Set the base delay for exponential backoff between failed queries.
    ///
    /// Defaults to 500 ms.
    #[must_use]
    pub const fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Backoff delay after the given number of consecutive failures:
    /// `base * 2^(failures - 1)`, saturating rather than overflowing for
    /// large failure counts.
    pub(crate) const fn backoff_delay(&self, consecutive_failures: u32) -> Duration {
        let factor = 2u32.saturating_pow(consecutive_failures.saturating_sub(1));
        self.retry_base_delay.saturating_mul(factor)
    }
}

/// Poll a job until it reaches a terminal state.
///
/// Ticks are strictly sequential: the next query is not issued until the
/// previous response (or error) has been processed. Transient query
/// failures leave the job state untouched and are retried with
/// exponential backoff, bounded by `max_transient_failures`.
pub(crate) async fn poll_job(
    client: Arc<dyn SynthesisClientPort>,
    id: JobId,
    config: PollConfig,
    cancel: CancellationToken,
    updates: watch::Sender<JobUpdate>,
) -> Result<ResolvedAudio, JobError> {
    let mut state = JobState::new();
    let mut consecutive_failures: u32 = 0;

    let mut interval = tokio::time::interval(config.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!(job = %id, "poll cancelled while idle");
                return Err(JobError::Cancelled);
            }

            _ = interval.tick() => {}
        }

        let outcome = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                // In-flight response is discarded, not applied.
                debug!(job = %id, "poll cancelled mid-query");
                return Err(JobError::Cancelled);
            }

            outcome = client.job_status(&id) => outcome,
        };

        match outcome {
            Ok(update) => {
                consecutive_failures = 0;
                match state.apply(&update) {
                    Transition::Pending => {
                        let _ = updates.send(JobUpdate::Status {
                            id: id.clone(),
                            status: state.status(),
                            raw_status: state.raw_status().to_string(),
                        });
                    }
                    Transition::Finished { result } => {
                        let audio = resolve_audio(client.audio_url(&result), chrono::Utc::now());
                        let _ = updates.send(JobUpdate::Finished {
                            id: id.clone(),
                            audio: audio.clone(),
                        });
                        return Ok(audio);
                    }
                    Transition::Failed { error } => {
                        let _ = updates.send(JobUpdate::Failed {
                            id: id.clone(),
                            error: error.clone(),
                        });
                        return Err(JobError::synthesis(error));
                    }
                    Transition::Ignored => {}
                }
            }
            Err(e) => {
                consecutive_failures += 1;
                warn!(
                    job = %id,
                    attempt = consecutive_failures,
                    error = %e,
                    "transient poll failure; job state unchanged"
                );

                if consecutive_failures >= config.max_transient_failures {
                    return Err(JobError::PollExhausted {
                        attempts: consecutive_failures,
                    });
                }

                let delay = config.backoff_delay(consecutive_failures);
                tokio::select! {
                    biased;

                    () = cancel.cancelled() => return Err(JobError::Cancelled),
                    () = tokio::time::sleep(delay) => {}
                }
            }
        }
    }
}
