use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::discord::Requester,
};

pub enum Permission {
    /// Grant, revoke and edit achievements.
    ManageAchievements,
    /// Hand out consumable sponsor shop credits.
    ManageCredits,
    /// Hold one of the tracked sponsor roles.
    Sponsor,
}

/// Role and channel checks for command invocations.
///
/// Checks run against the roles carried by the interaction itself, so a callback
/// arriving minutes after the command is judged by the member's current roles.
pub struct AuthGuard<'a> {
    config: &'a Config,
}

impl<'a> AuthGuard<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn require(
        &self,
        requester: &Requester,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::ManageAchievements => {
                    if !requester.has_any_role(&self.config.achievements_allowed_role_ids) {
                        return Err(AuthError::AccessDenied {
                            user_id: requester.user_id,
                            reason: "missing an achievement management role".to_string(),
                        }
                        .into());
                    }
                }
                Permission::ManageCredits => {
                    if !requester.has_any_role(&self.config.credits_allowed_role_ids) {
                        return Err(AuthError::AccessDenied {
                            user_id: requester.user_id,
                            reason: "missing a credits management role".to_string(),
                        }
                        .into());
                    }
                }
                Permission::Sponsor => {
                    if self.sponsor_roles(requester).is_empty() {
                        return Err(AuthError::NotSponsor(requester.user_id).into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Rejects commands used outside of the allowed channels.
    pub fn require_channel(
        &self,
        requester: &Requester,
        channel_id: u64,
        allowed: &[u64],
    ) -> Result<(), AppError> {
        if allowed.contains(&channel_id) {
            return Ok(());
        }

        Err(AuthError::ChannelNotAllowed {
            user_id: requester.user_id,
            channel_id,
            allowed: allowed.to_vec(),
        }
        .into())
    }

    /// Tracked sponsor roles held by the requester, in configuration order.
    pub fn sponsor_roles(&self, requester: &Requester) -> Vec<u64> {
        self.config
            .tracked_role_ids
            .iter()
            .copied()
            .filter(|role_id| requester.role_ids.contains(role_id))
            .collect()
    }
}
