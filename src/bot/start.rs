use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Starts the Discord bot in a blocking manner
///
/// Creates the serenity client with the shared application state and runs it until
/// the gateway connection shuts down.
///
/// # Arguments
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if client creation or the gateway connection fails
pub async fn start_bot(state: AppState) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let token = state.config.discord_token.clone();
    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
