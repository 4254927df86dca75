//! Custom ids of interactive components and their expiry.
//!
//! Every select menu, button and modal the bot sends carries a custom id of the form
//! `action:token`, where the token keys an entry of `InteractionSessionService`.

use serenity::all::{EditInteractionResponse, Http};
use serenity::builder::Builder;
use std::sync::Arc;
use std::time::Duration;

use crate::{error::internal::InternalError, service::interaction::InteractionSessionService};

/// Action encoded in the prefix of a component custom id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    /// Achievement picked from the grant select menu.
    GrantSelect,
    /// Ckey submitted through the modal.
    CkeySubmit,
    BalancePrevious,
    BalanceNext,
}

impl ComponentAction {
    fn prefix(self) -> &'static str {
        match self {
            Self::GrantSelect => "reach_grant",
            Self::CkeySubmit => "reach_ckey",
            Self::BalancePrevious => "top_balance_prev",
            Self::BalanceNext => "top_balance_next",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "reach_grant" => Some(Self::GrantSelect),
            "reach_ckey" => Some(Self::CkeySubmit),
            "top_balance_prev" => Some(Self::BalancePrevious),
            "top_balance_next" => Some(Self::BalanceNext),
            _ => None,
        }
    }

    pub fn custom_id(self, token: &str) -> String {
        format!("{}:{}", self.prefix(), token)
    }
}

/// Splits a custom id into its action and session token.
///
/// # Returns
/// - `Ok((ComponentAction, &str))` - Known action and non-empty token
/// - `Err(InternalError::MalformedCustomId)` - Id was not produced by `custom_id`
pub fn parse_custom_id(custom_id: &str) -> Result<(ComponentAction, &str), InternalError> {
    custom_id
        .split_once(':')
        .filter(|(_, token)| !token.is_empty())
        .and_then(|(prefix, token)| ComponentAction::from_prefix(prefix).map(|action| (action, token)))
        .ok_or_else(|| InternalError::MalformedCustomId(custom_id.to_string()))
}

/// Removes the components of a message once its session times out.
///
/// Runs in the background. If the session was consumed or already timed out through a
/// late click, the message has been updated by that interaction and is left alone.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `sessions` - Registry holding the session
/// - `session_token` - Token embedded in the component custom ids
/// - `interaction_token` - Token of the interaction whose response carries the components
/// - `ttl` - Time-to-live the session was opened with
/// - `notice` - Replacement message content, `None` keeps the current content
pub fn schedule_expiry(
    http: Arc<Http>,
    sessions: InteractionSessionService,
    session_token: String,
    interaction_token: String,
    ttl: Duration,
    notice: Option<&'static str>,
) {
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;

        if !sessions.expire(&session_token).await {
            return;
        }

        let mut edit = EditInteractionResponse::new().components(Vec::new());
        if let Some(notice) = notice {
            edit = edit.content(notice);
        }

        if let Err(e) = edit.execute(&http, &interaction_token).await {
            tracing::warn!("Failed to disable expired components: {}", e);
        } else {
            tracing::debug!("Disabled components of expired session {}", session_token);
        }
    });
}
