use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::{
    bot::command::{message, CommandOptions},
    error::AppError,
    model::discord::Requester,
    service::dice::DiceExpression,
};

pub fn register_roll() -> CreateCommand {
    CreateCommand::new("roll")
        .description("Roll dice, e.g. 1d6, 2d20+3")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "dice", "Dice in the NdM+K format")
                .required(true),
        )
}

/// /roll
pub async fn roll(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let input = CommandOptions::new(command).required_string("dice")?;
    let expression = DiceExpression::parse(input)?;

    // The thread rng is not Send, so it must not live across an await.
    let rendered = expression.roll(&mut rand::rng()).render();

    command
        .create_response(
            &ctx.http,
            message(format!(
                "🎲 {} rolled `{}`: {}",
                Requester::from_user(&command.user).mention(),
                input.trim().to_lowercase(),
                rendered
            )),
        )
        .await?;

    Ok(())
}
