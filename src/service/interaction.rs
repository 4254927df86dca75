//! Short-lived state behind interactive message components.
//!
//! A select menu, a modal or a pager button only carries a custom id back to the
//! bot. The state needed to finish the interaction (the player being edited, the
//! page being shown) lives here under a random token embedded in that id, and is
//! dropped once its time-to-live has passed.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::achievement::GrantMenu;

/// How long the achievement select menu accepts a choice.
pub const GRANT_MENU_TTL: Duration = Duration::from_secs(120);

/// How long the ckey modal accepts a submission.
pub const CKEY_PROMPT_TTL: Duration = Duration::from_secs(300);

/// How long the balance leaderboard buttons keep working.
pub const BALANCE_PAGER_TTL: Duration = Duration::from_secs(300);

/// How long an expired session is kept so its expiry timer can still find it.
const PRUNE_GRACE: Duration = Duration::from_secs(60);

const TOKEN_LENGTH: usize = 16;

/// What the bot is waiting for on an open interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingInteraction {
    /// Select menu listing the achievements a player can still be granted.
    GrantMenu(GrantMenu),
    /// Modal asking for the ckey of a player the store does not know yet.
    CkeyPrompt {
        /// Display name of the member the achievement is for.
        display_name: String,
    },
    /// Balance leaderboard message with previous/next buttons.
    BalancePager {
        /// Zero-based page currently shown.
        page: u64,
    },
}

/// Session returned to callers, without its expiry bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    /// Discord user who opened the interaction.
    pub owner_id: u64,
    pub pending: PendingInteraction,
}

#[derive(Clone)]
struct Session {
    owner_id: u64,
    pending: PendingInteraction,
    expires_at: Instant,
}

impl Session {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn is_stale(&self, grace: Duration) -> bool {
        Instant::now() >= self.expires_at + grace
    }

    fn to_active(&self) -> ActiveSession {
        ActiveSession {
            owner_id: self.owner_id,
            pending: self.pending.clone(),
        }
    }
}

/// In-memory registry of open interactions keyed by token.
///
/// Cloning is cheap and every clone shares the same registry.
#[derive(Clone)]
pub struct InteractionSessionService {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    prune_grace: Duration,
}

impl InteractionSessionService {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            prune_grace: PRUNE_GRACE,
        }
    }

    #[cfg(test)]
    fn with_prune_grace(prune_grace: Duration) -> Self {
        Self {
            prune_grace,
            ..Self::new()
        }
    }

    /// Opens a session and returns its token.
    ///
    /// Sessions expired for longer than the prune grace are dropped on every open, so
    /// abandoned menus never pile up.
    pub async fn open(&self, owner_id: u64, pending: PendingInteraction, ttl: Duration) -> String {
        let token = Self::generate_token();
        let session = Session {
            owner_id,
            pending,
            expires_at: Instant::now() + ttl,
        };

        let grace = self.prune_grace;
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_stale(grace));
        sessions.insert(token.clone(), session);

        token
    }

    /// Looks up a live session.
    ///
    /// # Returns
    /// - `Some(ActiveSession)` - Session exists and has not expired
    /// - `None` - Unknown token, or the session expired (it is removed)
    pub async fn get(&self, token: &str) -> Option<ActiveSession> {
        let mut sessions = self.sessions.write().await;

        match sessions.get(token) {
            Some(session) if session.is_expired() => {
                sessions.remove(token);
                None
            }
            Some(session) => Some(session.to_active()),
            None => None,
        }
    }

    /// Replaces the pending state of a live session, keeping its expiry.
    ///
    /// # Returns
    /// - `true` - Session was updated
    /// - `false` - Session is unknown or expired
    pub async fn update(&self, token: &str, pending: PendingInteraction) -> bool {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(token) {
            Some(session) if !session.is_expired() => {
                session.pending = pending;
                true
            }
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Removes a session, returning it if it was still live.
    pub async fn close(&self, token: &str) -> Option<ActiveSession> {
        self.sessions
            .write()
            .await
            .remove(token)
            .filter(|session| !session.is_expired())
            .map(|session| session.to_active())
    }

    /// Removes a session whether or not it has expired yet.
    ///
    /// Used by the expiry timer: `true` means the controls were never consumed and
    /// still need to be disabled on the message.
    pub async fn expire(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InteractionSessionService {
    fn default() -> Self {
        Self::new()
    }
}
