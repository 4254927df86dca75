use serenity::all::{
    ActionRowComponent, CommandInteraction, CommandOptionType, ComponentInteraction,
    ComponentInteractionDataKind, Context, CreateActionRow, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateModal, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, InputTextStyle, ModalInteraction,
};

use crate::{
    bot::{
        command::{ephemeral, message, requester, truncate, CommandOptions},
        component::{schedule_expiry, ComponentAction},
    },
    error::{internal::InternalError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::achievement::{
        GrantMenu, GrantOutcome, GrantPreparation, PlayerAchievementsView, RevokeOutcome,
    },
    service::{
        achievement::AchievementService,
        interaction::{PendingInteraction, CKEY_PROMPT_TTL, GRANT_MENU_TTL},
    },
    state::AppState,
};

/// Discord allows at most 25 options in a select menu.
const MAX_MENU_OPTIONS: usize = 25;
const MAX_OPTION_LABEL: usize = 100;
const MAX_OPTION_DESCRIPTION: usize = 100;
const MAX_EMBED_DESCRIPTION: usize = 4096;

const ACHIEVEMENT_COLOR: u32 = 0xF1C40F;
const CKEY_INPUT_ID: &str = "ckey";
const MENU_EXPIRED: &str = "⌛ This menu has expired. Run /set_reach again.";

pub fn register_get_reachs() -> CreateCommand {
    CreateCommand::new("get_reachs")
        .description("Show the achievements of a member")
        .add_option(CreateCommandOption::new(
            CommandOptionType::User,
            "user",
            "Member to look up, defaults to you",
        ))
}

pub fn register_set_reach() -> CreateCommand {
    CreateCommand::new("set_reach")
        .description("Grant an achievement to a member")
        .add_option(CreateCommandOption::new(
            CommandOptionType::User,
            "user",
            "Member to grant the achievement to, defaults to you",
        ))
}

pub fn register_remove_reach() -> CreateCommand {
    CreateCommand::new("remove_reach")
        .description("Take an achievement away from a member")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member to revoke from")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "achievement", "Achievement id")
                .required(true),
        )
}

/// Embed text listing earned achievements, unknown ids flagged.
pub fn achievements_description(view: &PlayerAchievementsView) -> String {
    if view.is_empty() {
        return format!("**{}** has no achievements yet.", view.display_name);
    }

    let lines = view
        .earned
        .iter()
        .map(|definition| format!("🏆 **{}**\n{}", definition.title, definition.description))
        .chain(
            view.unknown
                .iter()
                .map(|id| format!("❓ `{id}` (no longer in the catalog)")),
        )
        .collect::<Vec<_>>()
        .join("\n\n");

    truncate(&lines, MAX_EMBED_DESCRIPTION)
}

/// /get_reachs
pub async fn get_reachs(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    let options = CommandOptions::new(command);
    let display_name = options
        .user_display_name("user")
        .unwrap_or_else(|| requester.display_name.clone());

    let view = AchievementService::new(&state.catalog, &state.store, &state.db)
        .get_by_display_name(&display_name)
        .await?;

    let embed = CreateEmbed::new()
        .title(format!("Achievements of {}", view.display_name))
        .description(achievements_description(&view))
        .footer(CreateEmbedFooter::new(format!("ckey: {}", view.ckey)))
        .color(ACHIEVEMENT_COLOR);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}

/// /set_reach
///
/// Opens the grant select menu, or the ckey modal when the store has no record for
/// the member yet.
pub async fn set_reach(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageAchievements])?;

    let display_name = CommandOptions::new(command)
        .user_display_name("user")
        .unwrap_or_else(|| requester.display_name.clone());

    let preparation = AchievementService::new(&state.catalog, &state.store, &state.db)
        .prepare_grant(&display_name)
        .await?;

    let (response, session) =
        preparation_response(state, requester.user_id, &display_name, preparation).await;
    command.create_response(&ctx.http, response).await?;

    if let Some(session_token) = session {
        schedule_expiry(
            ctx.http.clone(),
            state.sessions.clone(),
            session_token,
            command.token.clone(),
            GRANT_MENU_TTL,
            Some(MENU_EXPIRED),
        );
    }

    Ok(())
}

/// Response to a grant preparation, with the token of a select menu session that
/// needs an expiry timer.
async fn preparation_response(
    state: &AppState,
    owner_id: u64,
    display_name: &str,
    preparation: GrantPreparation,
) -> (CreateInteractionResponse, Option<String>) {
    match preparation {
        GrantPreparation::CkeyRequired => {
            let token = state
                .sessions
                .open(
                    owner_id,
                    PendingInteraction::CkeyPrompt {
                        display_name: display_name.trim().to_string(),
                    },
                    CKEY_PROMPT_TTL,
                )
                .await;

            let modal = CreateModal::new(
                ComponentAction::CkeySubmit.custom_id(&token),
                truncate(&format!("Ckey of {}", display_name.trim()), 45),
            )
            .components(vec![CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, "Player ckey", CKEY_INPUT_ID)
                    .placeholder("In-game account name")
                    .required(true),
            )]);

            // Modals cannot be disabled; the session TTL alone rejects late submits.
            (CreateInteractionResponse::Modal(modal), None)
        }
        GrantPreparation::AllGranted { ckey } => (
            ephemeral(format!(
                "**{}** (`{ckey}`) already has every achievement.",
                display_name.trim()
            )),
            None,
        ),
        GrantPreparation::Ready(menu) => {
            let content = grant_menu_content(&menu);
            let options = grant_menu_options(&menu);
            let token = state
                .sessions
                .open(owner_id, PendingInteraction::GrantMenu(menu), GRANT_MENU_TTL)
                .await;

            let select = CreateSelectMenu::new(
                ComponentAction::GrantSelect.custom_id(&token),
                CreateSelectMenuKind::String { options },
            )
            .placeholder("Achievement");

            let response = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .components(vec![CreateActionRow::SelectMenu(select)])
                    .ephemeral(true),
            );

            (response, Some(token))
        }
    }
}

fn grant_menu_content(menu: &GrantMenu) -> String {
    let mut content = format!(
        "Choose an achievement for **{}** (`{}`):",
        menu.display_name, menu.ckey
    );
    if menu.available.len() > MAX_MENU_OPTIONS {
        content.push_str(&format!(
            "\nShowing the first {MAX_MENU_OPTIONS} of {} achievements.",
            menu.available.len()
        ));
    }
    content
}

fn grant_menu_options(menu: &GrantMenu) -> Vec<CreateSelectMenuOption> {
    menu.available
        .iter()
        .take(MAX_MENU_OPTIONS)
        .map(|definition| {
            CreateSelectMenuOption::new(
                truncate(&definition.title, MAX_OPTION_LABEL),
                definition.id.clone(),
            )
            .description(truncate(&definition.description, MAX_OPTION_DESCRIPTION))
        })
        .collect()
}

/// Achievement picked from the grant select menu.
pub async fn grant_selected(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    token: &str,
) -> Result<(), AppError> {
    let Some(session) = state.sessions.get(token).await else {
        component
            .create_response(&ctx.http, closed_menu(MENU_EXPIRED))
            .await?;
        return Ok(());
    };

    if session.owner_id != component.user.id.get() {
        component
            .create_response(&ctx.http, ephemeral("This menu belongs to someone else."))
            .await?;
        return Ok(());
    }

    let requester = requester(component.member.as_ref(), &component.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageAchievements])?;

    let id = match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first(),
        _ => None,
    }
    .ok_or_else(|| InternalError::MalformedCustomId(component.data.custom_id.clone()))?;

    let Some(session) = state.sessions.close(token).await else {
        component
            .create_response(&ctx.http, closed_menu(MENU_EXPIRED))
            .await?;
        return Ok(());
    };
    let PendingInteraction::GrantMenu(menu) = session.pending else {
        return Err(InternalError::MalformedCustomId(component.data.custom_id.clone()).into());
    };

    let content = match AchievementService::new(&state.catalog, &state.store, &state.db)
        .grant(&menu.ckey, &menu.display_name, id)
        .await
    {
        Ok(GrantOutcome::Granted { title }) => {
            state
                .action_log
                .record(
                    &requester,
                    &format!(
                        "Granted achievement '{}' to {} ({})",
                        id, menu.display_name, menu.ckey
                    ),
                )
                .await;
            tracing::info!(
                "{} granted '{}' to {} ({})",
                requester.name,
                id,
                menu.display_name,
                menu.ckey
            );
            format!(
                "✅ Achievement **{title}** granted to **{}** (`{}`).",
                menu.display_name, menu.ckey
            )
        }
        Ok(GrantOutcome::AlreadyGranted { title }) => {
            format!("**{}** already has **{title}**.", menu.display_name)
        }
        Err(e) => e.to_reply(),
    };

    component
        .create_response(&ctx.http, closed_menu(content))
        .await?;

    Ok(())
}

/// Ckey submitted through the modal opened by /set_reach.
pub async fn ckey_submitted(
    state: &AppState,
    ctx: &Context,
    modal: &ModalInteraction,
    token: &str,
) -> Result<(), AppError> {
    let Some(session) = state.sessions.close(token).await else {
        modal
            .create_response(
                &ctx.http,
                ephemeral("⌛ This form has expired. Run /set_reach again."),
            )
            .await?;
        return Ok(());
    };

    if session.owner_id != modal.user.id.get() {
        modal
            .create_response(&ctx.http, ephemeral("This form belongs to someone else."))
            .await?;
        return Ok(());
    }

    let requester = requester(modal.member.as_ref(), &modal.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageAchievements])?;

    let PendingInteraction::CkeyPrompt { display_name } = session.pending else {
        return Err(InternalError::MalformedCustomId(modal.data.custom_id.clone()).into());
    };

    let ckey = modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == CKEY_INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
        .unwrap_or_default();

    let preparation = AchievementService::new(&state.catalog, &state.store, &state.db)
        .prepare_grant_for_ckey(&display_name, &ckey)
        .await?;

    let (response, session) =
        preparation_response(state, requester.user_id, &display_name, preparation).await;
    modal.create_response(&ctx.http, response).await?;

    if let Some(session_token) = session {
        schedule_expiry(
            ctx.http.clone(),
            state.sessions.clone(),
            session_token,
            modal.token.clone(),
            GRANT_MENU_TTL,
            Some(MENU_EXPIRED),
        );
    }

    Ok(())
}

/// Replaces the select menu message with a final text.
fn closed_menu(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .content(content)
            .components(Vec::new()),
    )
}

/// /remove_reach
pub async fn remove_reach(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageAchievements])?;

    let options = CommandOptions::new(command);
    let display_name = options
        .user_display_name("user")
        .ok_or_else(|| AppError::BadRequest("Option 'user' is required.".to_string()))?;
    let id = options.required_string("achievement")?;

    let outcome = AchievementService::new(&state.catalog, &state.store, &state.db)
        .revoke(&display_name, id)
        .await?;

    let reply = match outcome {
        RevokeOutcome::Revoked { ckey, title } => {
            state
                .action_log
                .record(
                    &requester,
                    &format!("Removed achievement '{id}' from {display_name} ({ckey})"),
                )
                .await;
            tracing::info!(
                "{} removed '{}' from {} ({})",
                requester.name,
                id,
                display_name,
                ckey
            );
            message(format!(
                "❌ Achievement **{title}** removed from **{display_name}** (`{ckey}`)."
            ))
        }
        RevokeOutcome::NotHeld { title, .. } => {
            ephemeral(format!("**{display_name}** does not have **{title}**."))
        }
    };

    command.create_response(&ctx.http, reply).await?;

    Ok(())
}
