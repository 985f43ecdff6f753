//! Core domain types and port definitions for narrate.
//!
//! This crate holds everything adapters share: the job identifier, the
//! status state machine, the serializable job error taxonomy, and the
//! `SynthesisClientPort` trait that HTTP adapters implement. It has no
//! dependency on any transport, timer, or runtime.

#![deny(unused_crate_dependencies)]

pub mod job;
pub mod ports;

// Re-export commonly used types for convenience
pub use job::{JobError, JobId, JobState, JobStatus, StatusUpdate, Transition};
pub use ports::{
    HealthReport, SynthesisClientPort, SynthesisPortError, SynthesisPortResult, VoiceProfile,
};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
