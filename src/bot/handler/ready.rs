//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The slash
//! commands are (re-)registered in every configured guild at this point, so command
//! definitions always match the running build.

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::{bot::command::all_commands, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged per guild and do not stop the bot; commands
/// already registered in that guild stay usable.
///
/// # Arguments
/// - `state` - Application state holding the configured guild ids
/// - `ctx` - Discord context for registering commands and setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("Space Station 14")));

    for &guild_id in &state.config.guild_ids {
        match GuildId::new(guild_id)
            .set_commands(&ctx.http, all_commands())
            .await
        {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            ),
            Err(e) => tracing::error!("Failed to register commands in guild {}: {}", guild_id, e),
        }
    }
}
