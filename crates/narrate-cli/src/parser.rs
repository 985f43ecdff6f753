//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the narrate tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "narrate")]
#[command(about = "Submit text to a synthesis service and fetch the audio")]
#[command(version)]
pub struct Cli {
    /// Base URL of the synthesis service
    #[arg(
        long = "base-url",
        global = true,
        env = "NARRATE_BASE_URL",
        default_value = "http://localhost:8000"
    )]
    pub base_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
