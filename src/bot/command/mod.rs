//! Slash commands: registration, option access and reply helpers.

pub mod achievement;
pub mod catalog;
pub mod dice;
pub mod leaderboard;
pub mod sponsor;

use serenity::all::{
    CommandInteraction, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, Member, ResolvedOption, ResolvedValue, User,
};

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::Requester,
};

/// Every slash command the bot registers in its guilds.
pub fn all_commands() -> Vec<CreateCommand> {
    vec![
        achievement::register_get_reachs(),
        achievement::register_set_reach(),
        achievement::register_remove_reach(),
        catalog::register_add(),
        catalog::register_edit(),
        catalog::register_remove(),
        leaderboard::register_top_play_time(),
        leaderboard::register_top_balance(),
        sponsor::register_my_ckey(),
        sponsor::register_change_my_name_color(),
        sponsor::register_add_disposable(),
        dice::register_roll(),
    ]
}

/// Identity of the member behind an interaction.
///
/// Guild commands always carry member data; its absence means the interaction came
/// from a DM.
pub fn requester(member: Option<&Member>, user: &User) -> Result<Requester, AppError> {
    member
        .map(Requester::from_member)
        .ok_or_else(|| AuthError::NotInGuild(user.id.get()).into())
}

/// Resolved options of a slash command, looked up by name.
pub struct CommandOptions<'a> {
    options: Vec<ResolvedOption<'a>>,
}

impl<'a> CommandOptions<'a> {
    pub fn new(command: &'a CommandInteraction) -> Self {
        Self {
            options: command.data.options(),
        }
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.value(name) {
            Some(ResolvedValue::String(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn required_string(&self, name: &str) -> Result<&'a str, AppError> {
        self.string(name)
            .ok_or_else(|| AppError::BadRequest(format!("Option '{name}' is required.")))
    }

    pub fn required_integer(&self, name: &str) -> Result<i64, AppError> {
        match self.value(name) {
            Some(ResolvedValue::Integer(value)) => Ok(*value),
            _ => Err(AppError::BadRequest(format!("Option '{name}' is required."))),
        }
    }

    /// Display name of a user option: guild nickname when present, otherwise the
    /// global or user name.
    pub fn user_display_name(&self, name: &str) -> Option<String> {
        match self.value(name) {
            Some(ResolvedValue::User(user, member)) => Some(
                member
                    .and_then(|member| member.nick.clone())
                    .unwrap_or_else(|| user.display_name().to_string()),
            ),
            _ => None,
        }
    }
}

/// Public message reply.
pub fn message(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content))
}

/// Reply only the requester can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Cuts text to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
