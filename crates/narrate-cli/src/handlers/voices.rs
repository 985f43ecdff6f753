//! Voice profile command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the voices command.
///
/// Lists all trained voice profiles known to the service.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let profiles = ctx.client().list_voice_profiles().await?;

    if profiles.is_empty() {
        println!("No trained voice profiles.");
        println!("Train one through the service before previewing a voice.");
        return Ok(());
    }

    println!("Found {} voice profile(s):\n", profiles.len());
    println!("{:<36} {:<12} Checkpoint", "ID", "Status");

    for profile in profiles {
        println!(
            "{:<36} {:<12} {}",
            profile.id,
            profile.status,
            profile.ckpt_path.as_deref().unwrap_or("--")
        );
    }

    Ok(())
}

/// Execute the delete-voice command.
pub async fn delete(ctx: &CliContext, voice_id: &str) -> Result<()> {
    let message = ctx.client().delete_voice_profile(voice_id).await?;
    println!("{message}");
    Ok(())
}
