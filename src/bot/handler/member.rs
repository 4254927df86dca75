use serenity::all::{
    ChannelId, Context, CreateMessage, GuildMemberUpdateEvent, Member, RoleId, User,
};

use crate::{
    service::sponsor::{tracked_role_changes, SponsorService},
    state::AppState,
};

/// Handles the guild_member_update event when a member is updated in a guild (roles, nickname, etc.)
///
/// Compares the cached previous roles with the new ones and reacts to the first
/// tracked sponsor role gained or lost. Without a cached previous member there is
/// nothing to compare against and the event is skipped.
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(old) = old else {
        tracing::debug!(
            "No cached member for {} in guild {}, skipping role diff",
            event.user.name,
            event.guild_id
        );
        return;
    };

    let old_roles: Vec<u64> = old.roles.iter().map(|role| role.get()).collect();
    let new_roles: Vec<u64> = event.roles.iter().map(|role| role.get()).collect();
    let change = tracked_role_changes(&old_roles, &new_roles, &state.config.tracked_role_ids);

    if let Some(role_id) = change.added {
        sponsor_role_added(state, &ctx, &event, role_id).await;
    }

    if let Some(role_id) = change.removed {
        let still_sponsor = state
            .config
            .tracked_role_ids
            .iter()
            .any(|role| new_roles.contains(role));

        if still_sponsor {
            tracing::info!(
                "{} lost sponsor role {} but still holds another one",
                event.user.name,
                role_id
            );
        } else {
            sponsor_role_removed(state, &ctx, &event, role_id).await;
        }
    }
}

async fn sponsor_role_added(
    state: &AppState,
    ctx: &Context,
    event: &GuildMemberUpdateEvent,
    role_id: u64,
) {
    let user = &event.user;
    tracing::info!("{} received sponsor role {}", user.name, role_id);

    let thanks = format!(
        "Thank you for supporting the server! 💛\nUse /my_ckey in <#{}> to link your in-game account and unlock your perks.",
        state.config.ckey_channel_id
    );
    if let Err(e) = user
        .direct_message(&ctx.http, CreateMessage::new().content(thanks))
        .await
    {
        tracing::warn!("Failed to DM {} about their sponsor role: {}", user.name, e);
    }

    if let Err(e) = ChannelId::new(state.config.ckey_channel_id)
        .say(
            &ctx.http,
            format!(
                "<@{}>, thank you for your support! Link your in-game account here with /my_ckey.",
                user.id.get()
            ),
        )
        .await
    {
        tracing::warn!("Failed to post sponsor hint for {}: {}", user.name, e);
    }

    if let Err(e) = ctx
        .http
        .add_member_role(
            event.guild_id,
            user.id,
            RoleId::new(state.config.boosty_role_id),
            Some("Sponsor role received"),
        )
        .await
    {
        tracing::error!("Failed to add BOOSTY role to {}: {}", user.name, e);
    }

    state
        .action_log
        .record_for(
            &user.name,
            user.id.get(),
            &format!("Received sponsor role {role_id}"),
        )
        .await;
}

async fn sponsor_role_removed(
    state: &AppState,
    ctx: &Context,
    event: &GuildMemberUpdateEvent,
    role_id: u64,
) {
    let user = &event.user;
    tracing::info!("{} lost sponsor role {}", user.name, role_id);

    notify_expiry(state, ctx, user).await;

    match SponsorService::new(&state.sponsors, &state.disposables)
        .remove_sponsor(&user.name)
        .await
    {
        Ok(true) => tracing::info!("Removed sponsor record of {}", user.name),
        Ok(false) => tracing::debug!("{} had no sponsor record", user.name),
        Err(e) => tracing::error!("Failed to remove sponsor record of {}: {}", user.name, e),
    }

    if let Err(e) = ctx
        .http
        .remove_member_role(
            event.guild_id,
            user.id,
            RoleId::new(state.config.boosty_role_id),
            Some("Sponsor role expired"),
        )
        .await
    {
        tracing::error!("Failed to remove BOOSTY role from {}: {}", user.name, e);
    }

    state
        .action_log
        .record_for(
            &user.name,
            user.id.get(),
            &format!("Lost sponsor role {role_id}"),
        )
        .await;
}

/// Tells the member their perks ended, by DM or, when DMs are closed, in the info
/// channel.
async fn notify_expiry(state: &AppState, ctx: &Context, user: &User) {
    const NOTICE: &str =
        "your sponsor subscription has ended and your in-game perks were removed. Thank you for your support!";

    let dm = CreateMessage::new().content(format!("Hi! {NOTICE}"));
    let Err(e) = user.direct_message(&ctx.http, dm).await else {
        return;
    };
    tracing::debug!("Could not DM {}, falling back to the info channel: {}", user.name, e);

    if let Err(e) = ChannelId::new(state.config.info_channel_id)
        .say(&ctx.http, format!("<@{}>, {NOTICE}", user.id.get()))
        .await
    {
        tracing::warn!("Failed to post expiry notice for {}: {}", user.name, e);
    }
}
