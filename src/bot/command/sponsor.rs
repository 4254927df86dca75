use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{ephemeral, message, requester, CommandOptions},
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::discord::Requester,
    service::sponsor::SponsorService,
    state::AppState,
};

pub fn register_my_ckey() -> CreateCommand {
    CreateCommand::new("my_ckey")
        .description("Link your in-game ckey to your sponsor perks")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "ckey", "Your in-game ckey")
                .required(true),
        )
}

pub fn register_change_my_name_color() -> CreateCommand {
    CreateCommand::new("change_my_name_color")
        .description("Change the color of your in-game name")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "color_hex",
                "Color in the #RRGGBB format",
            )
            .required(true),
        )
}

pub fn register_add_disposable() -> CreateCommand {
    CreateCommand::new("add_disposable")
        .description("Set the consumable shop credits of a sponsor")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "Discord username of the sponsor",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "slots", "Number of slots")
                .min_int_value(0)
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "tokens", "Number of tokens")
                .min_int_value(0)
                .required(true),
        )
}

/// Sponsor commands are only accepted from sponsors in the ckey channel.
fn authorize_sponsor(state: &AppState, command: &CommandInteraction) -> Result<(Requester, u64), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    let guard = AuthGuard::new(&state.config);

    guard.require(&requester, &[Permission::Sponsor])?;
    guard.require_channel(
        &requester,
        command.channel_id.get(),
        &[state.config.ckey_channel_id],
    )?;

    let role_id = guard
        .sponsor_roles(&requester)
        .first()
        .copied()
        .ok_or(AuthError::NotSponsor(requester.user_id))?;

    Ok((requester, role_id))
}

/// /my_ckey
pub async fn my_ckey(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (requester, role_id) = authorize_sponsor(state, command)?;
    let ckey = CommandOptions::new(command).required_string("ckey")?.trim();

    let outcome = SponsorService::new(&state.sponsors, &state.disposables)
        .set_ckey(&requester.name, role_id, ckey)
        .await?;

    let mut reply = format!("✅ Your ckey is now `{ckey}`.");
    match outcome.previous_ckey.as_deref() {
        Some(previous) if previous != ckey => {
            state
                .action_log
                .record(&requester, &format!("Changed ckey from {previous} to {ckey}"))
                .await;
            if outcome.credits_moved {
                reply.push_str(&format!(" Your credits were moved over from `{previous}`."));
            }
        }
        Some(_) => {
            state
                .action_log
                .record(&requester, &format!("Confirmed ckey {ckey}"))
                .await;
        }
        None => {
            state
                .action_log
                .record(&requester, &format!("Registered ckey {ckey}"))
                .await;
        }
    }
    tracing::info!("Sponsor {} set ckey {}", requester.name, ckey);

    command.create_response(&ctx.http, ephemeral(reply)).await?;

    Ok(())
}

/// /change_my_name_color
pub async fn change_my_name_color(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (requester, _) = authorize_sponsor(state, command)?;
    let color = CommandOptions::new(command)
        .required_string("color_hex")?
        .trim();

    SponsorService::new(&state.sponsors, &state.disposables)
        .set_color(&requester.name, color)
        .await?;

    state
        .action_log
        .record(&requester, &format!("Changed name color to {color}"))
        .await;

    command
        .create_response(
            &ctx.http,
            ephemeral(format!("🎨 Your name color is now `{color}`.")),
        )
        .await?;

    Ok(())
}

/// /add_disposable
pub async fn add_disposable(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let requester = requester(command.member.as_deref(), &command.user)?;
    AuthGuard::new(&state.config).require(&requester, &[Permission::ManageCredits])?;

    let options = CommandOptions::new(command);
    let name = options.required_string("name")?.trim();
    let slots = options.required_integer("slots")?;
    let tokens = options.required_integer("tokens")?;

    let outcome = SponsorService::new(&state.sponsors, &state.disposables)
        .set_credits(name, slots, tokens)
        .await?;

    state
        .action_log
        .record(
            &requester,
            &format!(
                "Set {slots} slots and {tokens} tokens for {name} ({})",
                outcome.ckey
            ),
        )
        .await;
    tracing::info!(
        "{} set credits of {} ({}): {} slots, {} tokens",
        requester.name,
        name,
        outcome.ckey,
        slots,
        tokens
    );

    let verb = if outcome.created { "Created" } else { "Updated" };
    command
        .create_response(
            &ctx.http,
            message(format!(
                "✅ {verb} credits of **{name}** (`{}`): {slots} slots, {tokens} tokens.",
                outcome.ckey
            )),
        )
        .await?;

    Ok(())
}
