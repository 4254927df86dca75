use serenity::all::{
    ButtonStyle, CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateCommand, CreateEmbed, CreateEmbedFooter, EditInteractionResponse,
};

use crate::{
    bot::{
        command::{ephemeral, requester},
        component::{schedule_expiry, ComponentAction},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::leaderboard::{BalancePage, PlaytimeEntry},
    service::{
        interaction::{PendingInteraction, BALANCE_PAGER_TTL},
        leaderboard::{format_balance, format_playtime, medal, LeaderboardService},
    },
    state::AppState,
};

const LEADERBOARD_COLOR: u32 = 0x2ECC71;

pub fn register_top_play_time() -> CreateCommand {
    CreateCommand::new("top_play_time").description("Top 10 players by time played")
}

pub fn register_top_balance() -> CreateCommand {
    CreateCommand::new("top_balance").description("Richest characters on the server")
}

pub fn playtime_description(entries: &[PlaytimeEntry]) -> String {
    if entries.is_empty() {
        return "No playtime recorded yet.".to_string();
    }

    entries
        .iter()
        .zip(1u64..)
        .map(|(entry, rank)| {
            format!(
                "{} **{}**: {}",
                medal(rank),
                entry.user_name,
                format_playtime(entry.total_seconds)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn balance_description(page: &BalancePage) -> String {
    if page.entries.is_empty() {
        return "No balances recorded yet.".to_string();
    }

    page.entries
        .iter()
        .zip(page.first_rank()..)
        .map(|(entry, rank)| {
            format!(
                "{} **{}** ({}): {} $",
                medal(rank),
                entry.user_name,
                entry.char_name,
                format_balance(entry.bank_balance)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn balance_embed(page: &BalancePage) -> CreateEmbed {
    CreateEmbed::new()
        .title("💰 Top balance")
        .description(balance_description(page))
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{} · {} players",
            page.page + 1,
            page.total_pages,
            page.total_count
        )))
        .color(LEADERBOARD_COLOR)
}

fn pager_buttons(page: &BalancePage, token: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentAction::BalancePrevious.custom_id(token))
            .label("◀")
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_previous()),
        CreateButton::new(ComponentAction::BalanceNext.custom_id(token))
            .label("▶")
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_next()),
    ])]
}

/// /top_play_time
pub async fn top_play_time(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require_channel(
        &requester,
        command.channel_id.get(),
        &state.config.top_commands_channel_ids,
    )?;

    command.defer(&ctx.http).await?;

    let edit = match LeaderboardService::new(&state.db).top_playtime().await {
        Ok(entries) => EditInteractionResponse::new().embed(
            CreateEmbed::new()
                .title("🕒 Top playtime")
                .description(playtime_description(&entries))
                .color(LEADERBOARD_COLOR),
        ),
        Err(e) => EditInteractionResponse::new().content(e.to_reply()),
    };

    command.edit_response(&ctx.http, edit).await?;

    Ok(())
}

/// /top_balance
pub async fn top_balance(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require_channel(
        &requester,
        command.channel_id.get(),
        &state.config.top_commands_channel_ids,
    )?;

    command.defer(&ctx.http).await?;

    let page = match LeaderboardService::new(&state.db).balance_page(0).await {
        Ok(page) => page,
        Err(e) => {
            command
                .edit_response(&ctx.http, EditInteractionResponse::new().content(e.to_reply()))
                .await?;
            return Ok(());
        }
    };

    let mut edit = EditInteractionResponse::new().embed(balance_embed(&page));

    // A single page needs no pager.
    let session = if page.total_pages > 1 {
        let token = state
            .sessions
            .open(
                requester.user_id,
                PendingInteraction::BalancePager { page: page.page },
                BALANCE_PAGER_TTL,
            )
            .await;
        edit = edit.components(pager_buttons(&page, &token));
        Some(token)
    } else {
        None
    };

    command.edit_response(&ctx.http, edit).await?;

    if let Some(session_token) = session {
        schedule_expiry(
            ctx.http.clone(),
            state.sessions.clone(),
            session_token,
            command.token.clone(),
            BALANCE_PAGER_TTL,
            None,
        );
    }

    Ok(())
}

/// Previous or next button of the balance pager.
pub async fn turn_page(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    token: &str,
    forward: bool,
) -> Result<(), AppError> {
    let Some(session) = state.sessions.get(token).await else {
        component
            .create_response(
                &ctx.http,
                ephemeral("⌛ These buttons have expired. Run /top_balance again."),
            )
            .await?;
        return Ok(());
    };

    let PendingInteraction::BalancePager { page } = session.pending else {
        return Ok(());
    };
    let requested = if forward {
        page.saturating_add(1)
    } else {
        page.saturating_sub(1)
    };

    component.defer(&ctx.http).await?;

    let edit = match LeaderboardService::new(&state.db)
        .balance_page(requested)
        .await
    {
        Ok(page) => {
            state
                .sessions
                .update(token, PendingInteraction::BalancePager { page: page.page })
                .await;
            EditInteractionResponse::new()
                .embed(balance_embed(&page))
                .components(pager_buttons(&page, token))
        }
        Err(e) => EditInteractionResponse::new()
            .content(e.to_reply())
            .components(Vec::new()),
    };

    component.edit_response(&ctx.http, edit).await?;

    Ok(())
}
