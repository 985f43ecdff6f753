//! Command handlers.
//!
//! Each handler receives the composed [`crate::bootstrap::CliContext`]
//! and delegates the actual work to the client and job crates.

pub mod health;
pub mod synth;
pub mod voices;
