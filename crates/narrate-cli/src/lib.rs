//! Command-line adapter for the narrate synthesis pipeline.
//!
//! The library half of the binary: parser, commands, bootstrap, and the
//! command handlers. `main.rs` only wires these together.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Dependencies used only by main.rs
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
