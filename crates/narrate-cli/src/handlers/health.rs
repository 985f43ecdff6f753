//! Health command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the health command.
///
/// Queries the service health endpoint and prints the reported status
/// and GPU availability.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let report = ctx.client().health().await?;

    println!("Service status: {}", report.status);
    match report.gpu {
        Some(gpu) => println!("GPU: {gpu}"),
        None => println!("GPU: unavailable"),
    }

    Ok(())
}
