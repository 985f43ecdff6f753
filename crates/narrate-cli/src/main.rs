//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; command dispatch
//! routes to handlers which delegate to the client and job crates.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use narrate_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --verbose overrides RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        narrate_cli::Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = CliConfig::with_defaults();
    config.base_url = cli.base_url;

    match command {
        Commands::Synth {
            text,
            voice,
            interval_ms,
            output,
            no_download,
        } => {
            config.poll_interval = Duration::from_millis(interval_ms);
            let ctx = bootstrap(&config)?;
            let args = handlers::synth::SynthArgs {
                text,
                voice,
                output,
                no_download,
            };
            handlers::synth::execute(&ctx, args).await?;
        }
        Commands::Health => {
            let ctx = bootstrap(&config)?;
            handlers::health::execute(&ctx).await?;
        }
        Commands::Voices => {
            let ctx = bootstrap(&config)?;
            handlers::voices::list(&ctx).await?;
        }
        Commands::DeleteVoice { voice_id } => {
            let ctx = bootstrap(&config)?;
            handlers::voices::delete(&ctx, &voice_id).await?;
        }
    }

    Ok(())
}
