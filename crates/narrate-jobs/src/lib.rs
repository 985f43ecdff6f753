//! Asynchronous job-lifecycle controller for narrate.
//!
//! This crate drives a synthesis job from submission to its terminal
//! state: it spawns an explicit, cancellable poll task per job, applies
//! each observed status to the core state machine, absorbs transient
//! query failures up to a bounded ceiling with exponential backoff, and
//! resolves a finished job into a playable [`ResolvedAudio`].
//!
//! A [`JobController`] owns at most one active poll at a time; starting
//! a new submission cancels the previous poll before the new request is
//! issued, and cancellation is idempotent on every path (terminal state,
//! explicit shutdown, superseding submission).

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod controller;
mod events;
mod poller;
mod resolver;

// ============================================================================
// Public API
// ============================================================================

pub use controller::{JobController, JobHandle};
pub use events::JobUpdate;
pub use poller::PollConfig;
pub use resolver::{ResolvedAudio, resolve_audio, suggested_file_name};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
