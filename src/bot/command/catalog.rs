use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{message, requester, CommandOptions},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        achievement::{CreateAchievementParam, UpdateAchievementParam},
        discord::Requester,
    },
    service::catalog::{CatalogService, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN},
    state::AppState,
};

fn id_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        "id",
        "Achievement id (lowercase latin letters, digits, underscores)",
    )
    .required(true)
}

pub fn register_add() -> CreateCommand {
    CreateCommand::new("reach_catalog_add")
        .description("Add an achievement to the catalog")
        .add_option(id_option())
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "title", "Achievement title")
                .max_length(MAX_TITLE_LEN as u16)
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "description",
                "Achievement description",
            )
            .max_length(MAX_DESCRIPTION_LEN as u16)
            .required(true),
        )
}

pub fn register_edit() -> CreateCommand {
    CreateCommand::new("reach_catalog_edit")
        .description("Edit the title or description of an achievement")
        .add_option(id_option())
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "title", "New title")
                .max_length(MAX_TITLE_LEN as u16),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "description", "New description")
                .max_length(MAX_DESCRIPTION_LEN as u16),
        )
}

pub fn register_remove() -> CreateCommand {
    CreateCommand::new("reach_catalog_remove")
        .description("Remove an achievement from the catalog and from every player")
        .add_option(id_option())
}

fn authorize(state: &AppState, command: &CommandInteraction) -> Result<Requester, AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageAchievements])?;
    Ok(requester)
}

/// /reach_catalog_add
pub async fn add(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = authorize(state, command)?;
    let options = CommandOptions::new(command);

    let definition = CatalogService::new(&state.catalog, &state.store)
        .add(CreateAchievementParam {
            id: options.required_string("id")?.to_string(),
            title: options.required_string("title")?.to_string(),
            description: options.required_string("description")?.to_string(),
        })
        .await?;

    state
        .action_log
        .record(
            &requester,
            &format!("Added catalog achievement '{}'", definition.id),
        )
        .await;
    tracing::info!("{} added achievement '{}'", requester.name, definition.id);

    command
        .create_response(
            &ctx.http,
            message(format!(
                "➕ Achievement **{}** (`{}`) added to the catalog.",
                definition.title, definition.id
            )),
        )
        .await?;

    Ok(())
}

/// /reach_catalog_edit
pub async fn edit(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = authorize(state, command)?;
    let options = CommandOptions::new(command);

    let definition = CatalogService::new(&state.catalog, &state.store)
        .edit(UpdateAchievementParam {
            id: options.required_string("id")?.to_string(),
            title: options.string("title").map(str::to_string),
            description: options.string("description").map(str::to_string),
        })
        .await?;

    state
        .action_log
        .record(
            &requester,
            &format!("Edited catalog achievement '{}'", definition.id),
        )
        .await;
    tracing::info!("{} edited achievement '{}'", requester.name, definition.id);

    command
        .create_response(
            &ctx.http,
            message(format!(
                "✏️ Achievement `{}` updated: **{}**\n{}",
                definition.id, definition.title, definition.description
            )),
        )
        .await?;

    Ok(())
}

/// /reach_catalog_remove
pub async fn remove(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = authorize(state, command)?;
    let id = CommandOptions::new(command).required_string("id")?;

    let purged = CatalogService::new(&state.catalog, &state.store)
        .remove(id)
        .await?;

    state
        .action_log
        .record(
            &requester,
            &format!("Removed catalog achievement '{id}' from {purged} players"),
        )
        .await;
    tracing::info!(
        "{} removed achievement '{}' ({} players affected)",
        requester.name,
        id,
        purged
    );

    command
        .create_response(
            &ctx.http,
            message(format!(
                "🗑️ Achievement `{}` removed from the catalog and from {purged} player(s).",
                id.trim().to_lowercase()
            )),
        )
        .await?;

    Ok(())
}
