#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultSynthesisClient is meant
// to be used through the SynthesisClientPort trait, not its internal generic
// structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultSynthesisClient;

// Configuration
pub use config::SynthesisClientConfig;

// Errors
pub use error::{ClientError, ClientResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
