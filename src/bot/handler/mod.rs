use serenity::all::{Context, EventHandler, GuildMemberUpdateEvent, Interaction, Member, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called for slash commands, component clicks and modal submits
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.state, ctx, old, new, event).await;
    }
}
