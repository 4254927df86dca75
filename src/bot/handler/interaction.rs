//! Dispatch of slash commands, component clicks and modal submits.
//!
//! Handlers return `Result<(), AppError>`; any error that escapes a handler is turned
//! into an ephemeral reply here through `AppError::to_reply`. Handlers that defer
//! their response render their own errors, so a failed reply here is only logged.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, Interaction, ModalInteraction,
};

use crate::{
    bot::{
        command::{achievement, catalog, dice, ephemeral, leaderboard, sponsor},
        component::{parse_custom_id, ComponentAction},
    },
    error::{internal::InternalError, AppError},
    state::AppState,
};

pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(state, &ctx, &component).await,
        Interaction::Modal(modal) => handle_modal(state, &ctx, &modal).await,
        _ => {}
    }
}

async fn handle_command(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    tracing::debug!("/{} from {}", command.data.name, command.user.name);

    let result = match command.data.name.as_str() {
        "get_reachs" => achievement::get_reachs(state, ctx, command).await,
        "set_reach" => achievement::set_reach(state, ctx, command).await,
        "remove_reach" => achievement::remove_reach(state, ctx, command).await,
        "reach_catalog_add" => catalog::add(state, ctx, command).await,
        "reach_catalog_edit" => catalog::edit(state, ctx, command).await,
        "reach_catalog_remove" => catalog::remove(state, ctx, command).await,
        "top_play_time" => leaderboard::top_play_time(state, ctx, command).await,
        "top_balance" => leaderboard::top_balance(state, ctx, command).await,
        "my_ckey" => sponsor::my_ckey(state, ctx, command).await,
        "change_my_name_color" => sponsor::change_my_name_color(state, ctx, command).await,
        "add_disposable" => sponsor::add_disposable(state, ctx, command).await,
        "roll" => dice::roll(ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        if let Err(e) = command.create_response(&ctx.http, ephemeral(e.to_reply())).await {
            tracing::error!("Failed to send error reply for /{}: {}", command.data.name, e);
        }
    }
}

async fn handle_component(state: &AppState, ctx: &Context, component: &ComponentInteraction) {
    let result = match parse_custom_id(&component.data.custom_id) {
        Ok((ComponentAction::GrantSelect, token)) => {
            achievement::grant_selected(state, ctx, component, token).await
        }
        Ok((ComponentAction::BalancePrevious, token)) => {
            leaderboard::turn_page(state, ctx, component, token, false).await
        }
        Ok((ComponentAction::BalanceNext, token)) => {
            leaderboard::turn_page(state, ctx, component, token, true).await
        }
        Ok((ComponentAction::CkeySubmit, _)) => Err(AppError::from(
            InternalError::MalformedCustomId(component.data.custom_id.clone()),
        )),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        if let Err(e) = component.create_response(&ctx.http, ephemeral(e.to_reply())).await {
            tracing::error!(
                "Failed to send error reply for {}: {}",
                component.data.custom_id,
                e
            );
        }
    }
}

async fn handle_modal(state: &AppState, ctx: &Context, modal: &ModalInteraction) {
    let result = match parse_custom_id(&modal.data.custom_id) {
        Ok((ComponentAction::CkeySubmit, token)) => {
            achievement::ckey_submitted(state, ctx, modal, token).await
        }
        Ok(_) => Err(InternalError::MalformedCustomId(modal.data.custom_id.clone()).into()),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        if let Err(e) = modal.create_response(&ctx.http, ephemeral(e.to_reply())).await {
            tracing::error!("Failed to send error reply for {}: {}", modal.data.custom_id, e);
        }
    }
}
