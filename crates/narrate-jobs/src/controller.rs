//! Job controller: submission plus ownership of the single active poll.
//!
//! The controller closes the overlap hazard of a shared mutable timer:
//! each poll is an explicit task guarded by a cancellation handle the
//! controller owns, and `submit` cancels any existing handle before a
//! new request is issued. Callers can also cancel and await the returned
//! [`JobHandle`] directly.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use narrate_core::{JobError, JobId, SynthesisClientPort};

use crate::events::JobUpdate;
use crate::poller::{PollConfig, poll_job};
use crate::resolver::ResolvedAudio;

/// Handle to one job's running poll task.
///
/// Exactly one handle is live per controller at any time. Dropping the
/// handle does not cancel the poll; call [`JobHandle::cancel`] (or let
/// the controller supersede it).
pub struct JobHandle {
    id: JobId,
    cancel: CancellationToken,
    task: JoinHandle<Result<ResolvedAudio, JobError>>,
    updates: watch::Receiver<JobUpdate>,
}

impl std::fmt::Debug for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl JobHandle {
    /// The job this handle tracks.
    #[must_use]
    pub const fn id(&self) -> &JobId {
        &self.id
    }

    /// A receiver for lifecycle updates; the latest update is always
    /// available via `borrow`.
    #[must_use]
    pub fn updates(&self) -> watch::Receiver<JobUpdate> {
        self.updates.clone()
    }

    /// Cancel the poll. Idempotent: cancelling an already-stopped or
    /// finished poll is a no-op.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the poll task has resolved.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the poll to resolve.
    pub async fn wait(self) -> Result<ResolvedAudio, JobError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(JobError::Cancelled),
            Err(e) => Err(JobError::other(e.to_string())),
        }
    }
}

/// The active poll's controller-side bookkeeping.
///
/// The receiver doubles as a liveness probe: the poll task owns the
/// matching sender, so a closed channel means the task has resolved.
struct ActivePoll {
    id: JobId,
    cancel: CancellationToken,
    updates: watch::Receiver<JobUpdate>,
}

impl ActivePoll {
    fn is_live(&self) -> bool {
        self.updates.has_changed().is_ok()
    }
}

/// Drives synthesis jobs from submission to terminal state.
pub struct JobController {
    client: Arc<dyn SynthesisClientPort>,
    config: PollConfig,
    active: Option<ActivePoll>,
}

impl JobController {
    /// Create a controller over the given client.
    pub fn new(client: Arc<dyn SynthesisClientPort>, config: PollConfig) -> Self {
        Self {
            client,
            config,
            active: None,
        }
    }

    /// Submit text for synthesis with the default voice and start polling.
    ///
    /// Empty (or whitespace-only) text is inert: no request is issued, no
    /// state changes, and `Ok(None)` is returned. A failed submission
    /// returns `JobError::Submission` and no poll task is spawned.
    pub async fn submit(&mut self, text: &str) -> Result<Option<JobHandle>, JobError> {
        self.start(None, text).await
    }

    /// Submit text for synthesis with a trained voice profile.
    pub async fn submit_preview(
        &mut self,
        voice_id: &str,
        text: &str,
    ) -> Result<Option<JobHandle>, JobError> {
        self.start(Some(voice_id), text).await
    }

    /// Cancel the active poll, if any. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(active) = self.active.take() {
            debug!(job = %active.id, "cancelling active poll");
            active.cancel.cancel();
        }
    }

    /// The job whose poll task is still running, if any.
    ///
    /// Returns `None` once the poll resolves (terminal state, exhaustion,
    /// cancellation) or after a superseding submission or shutdown.
    #[must_use]
    pub fn active_job(&self) -> Option<&JobId> {
        self.active
            .as_ref()
            .filter(|a| a.is_live())
            .map(|a| &a.id)
    }

    async fn start(
        &mut self,
        voice_id: Option<&str>,
        text: &str,
    ) -> Result<Option<JobHandle>, JobError> {
        if text.trim().is_empty() {
            debug!("empty text; nothing submitted");
            return Ok(None);
        }

        // A new submission supersedes any poll still running.
        self.shutdown();

        let submission = match voice_id {
            Some(voice) => self.client.submit_preview(voice, text).await,
            None => self.client.submit(text).await,
        };
        let id = submission.map_err(|e| JobError::submission(e.to_string()))?;
        info!(job = %id, "submission accepted; polling starts");

        Ok(Some(self.spawn(id)))
    }

    fn spawn(&mut self, id: JobId) -> JobHandle {
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(JobUpdate::Submitted { id: id.clone() });

        let task = tokio::spawn(poll_job(
            Arc::clone(&self.client),
            id.clone(),
            self.config.clone(),
            cancel.clone(),
            tx,
        ));

        self.active = Some(ActivePoll {
            id: id.clone(),
            cancel: cancel.clone(),
            updates: rx.clone(),
        });

        JobHandle {
            id,
            cancel,
            task,
            updates: rx,
        }
    }
}
