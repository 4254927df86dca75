use chrono::Local;

use crate::{
    data::{disposable::DisposableRepository, sponsor::SponsorRepository},
    error::AppError,
    model::sponsor::{
        CreditsOutcome, DisposableRecord, SetCkeyOutcome, SponsorRecord, SponsorRoleChange,
        CKEY_PATTERN, DEFAULT_NAME_COLOR, HEX_COLOR_PATTERN,
    },
};

pub struct SponsorService<'a> {
    sponsors: &'a SponsorRepository,
    disposables: &'a DisposableRepository,
}

impl<'a> SponsorService<'a> {
    pub fn new(sponsors: &'a SponsorRepository, disposables: &'a DisposableRepository) -> Self {
        Self {
            sponsors,
            disposables,
        }
    }

    /// Registers the in-game ckey of a sponsor
    ///
    /// The record is rewritten with the given sponsor role, the current time and the
    /// default name color. Credits held under a previous ckey follow the sponsor to
    /// the new one.
    pub async fn set_ckey(
        &self,
        discord_name: &str,
        role_id: u64,
        ckey: &str,
    ) -> Result<SetCkeyOutcome, AppError> {
        let ckey = ckey.trim();
        if !CKEY_PATTERN.is_match(ckey) {
            return Err(AppError::BadRequest(
                "Ckey may only contain latin letters, digits or underscores.".to_string(),
            ));
        }

        let record = SponsorRecord {
            discord_name: discord_name.to_string(),
            ckey: ckey.to_string(),
            role_id,
            updated_at: Local::now().naive_local(),
            color: DEFAULT_NAME_COLOR.to_string(),
        };

        let previous_ckey = self.sponsors.upsert(&record).await?;

        let credits_moved = match previous_ckey.as_deref() {
            Some(old) if old != ckey => self.disposables.rename_ckey(old, ckey).await?,
            _ => false,
        };

        Ok(SetCkeyOutcome {
            previous_ckey,
            credits_moved,
        })
    }

    /// Changes the in-game name color of a registered sponsor
    pub async fn set_color(&self, discord_name: &str, color_hex: &str) -> Result<(), AppError> {
        let color_hex = color_hex.trim();
        if !HEX_COLOR_PATTERN.is_match(color_hex) {
            return Err(AppError::BadRequest(
                "Invalid HEX code. Use the #RRGGBB format.".to_string(),
            ));
        }

        if !self.sponsors.set_color(discord_name, color_hex).await? {
            return Err(AppError::NotFound(
                "Your record was not found. Please use /my_ckey first.".to_string(),
            ));
        }

        Ok(())
    }

    /// Sets the consumable credits of the sponsor with the given Discord username
    pub async fn set_credits(
        &self,
        discord_name: &str,
        slots: i64,
        tokens: i64,
    ) -> Result<CreditsOutcome, AppError> {
        if slots < 0 || tokens < 0 {
            return Err(AppError::BadRequest(
                "Slots and tokens must not be negative.".to_string(),
            ));
        }

        let discord_name = discord_name.trim();
        let Some(ckey) = self.sponsors.find_ckey(discord_name).await? else {
            return Err(AppError::NotFound(format!(
                "User with Discord name '{discord_name}' is not in the sponsor list. They need to use /my_ckey first."
            )));
        };

        let created = self
            .disposables
            .upsert(&DisposableRecord {
                ckey: ckey.clone(),
                slots,
                tokens,
            })
            .await?;

        Ok(CreditsOutcome { ckey, created })
    }

    /// Drops the sponsor record of a member who lost their sponsor role
    pub async fn remove_sponsor(&self, discord_name: &str) -> Result<bool, AppError> {
        self.sponsors.remove(discord_name).await
    }
}

/// Tracked roles gained and lost between two role sets.
///
/// Only the first gained and first lost tracked role, in configuration order, are
/// reported.
pub fn tracked_role_changes(old_roles: &[u64], new_roles: &[u64], tracked: &[u64]) -> SponsorRoleChange {
    SponsorRoleChange {
        added: tracked
            .iter()
            .copied()
            .find(|role| new_roles.contains(role) && !old_roles.contains(role)),
        removed: tracked
            .iter()
            .copied()
            .find(|role| old_roles.contains(role) && !new_roles.contains(role)),
    }
}
