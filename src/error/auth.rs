use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Requester lacks every role allowed to run the command.
    ///
    /// Raised both when a command is invoked and again when a follow-up interaction
    /// (select menu choice, modal submit) arrives, since roles may change in between.
    #[error("User {user_id} was denied access: {reason}")]
    AccessDenied { user_id: u64, reason: String },

    /// Requester holds none of the tracked sponsor roles.
    #[error("User {0} does not hold a tracked sponsor role")]
    NotSponsor(u64),

    /// Command arrived without guild member data (e.g. from a DM).
    #[error("User {0} used a guild command outside of a guild")]
    NotInGuild(u64),

    /// Command is restricted to specific channels and was used elsewhere.
    #[error("User {user_id} used a restricted command in channel {channel_id}")]
    ChannelNotAllowed {
        user_id: u64,
        channel_id: u64,
        /// Channels the command may be used in.
        allowed: Vec<u64>,
    },
}

impl AuthError {
    /// Converts authorization errors into requester-facing text.
    ///
    /// The full error is logged at debug level for diagnostics while the reply stays
    /// generic.
    ///
    /// # Returns
    /// - `String` - Fixed message for the error kind
    pub fn to_reply(&self) -> String {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied { .. } => {
                "You do not have permission to use this command.".to_string()
            }
            Self::NotSponsor(_) => "You are not a sponsor.".to_string(),
            Self::NotInGuild(_) => "This command can only be used inside a server.".to_string(),
            Self::ChannelNotAllowed { allowed, .. } => match allowed.as_slice() {
                [] => "This command is not available in any channel.".to_string(),
                channels => format!(
                    "This command can only be used in {}.",
                    channels
                        .iter()
                        .map(|id| format!("<#{id}>"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
        }
    }
}
