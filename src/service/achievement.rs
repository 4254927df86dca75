use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;

use crate::{
    data::{
        catalog::AchievementCatalog, game::GameDatabaseRepository,
        player_achievement::PlayerAchievementStore,
    },
    error::AppError,
    model::achievement::{
        normalize_key, GrantMenu, GrantOutcome, GrantPreparation, PlayerAchievementsView,
        RevokeOutcome,
    },
};

pub struct AchievementService<'a> {
    catalog: &'a AchievementCatalog,
    store: &'a PlayerAchievementStore,
    db: &'a DatabaseConnection,
}

impl<'a> AchievementService<'a> {
    pub fn new(
        catalog: &'a AchievementCatalog,
        store: &'a PlayerAchievementStore,
        db: &'a DatabaseConnection,
    ) -> Self {
        Self { catalog, store, db }
    }

    /// Achievements of the player whose record carries `display_name`
    ///
    /// Earned ids missing from the catalog are returned separately and logged.
    pub async fn get_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<PlayerAchievementsView, AppError> {
        let Some((ckey, held)) = self
            .store
            .get_player_achievements_by_display_name(display_name)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "No achievements found for Discord name '{}'.",
                display_name.trim()
            )));
        };

        let catalog = self.catalog.get_all().await?;
        let mut earned = Vec::new();
        let mut unknown = Vec::new();

        for id in held {
            match catalog.get(&id) {
                Some(definition) => earned.push(definition.clone()),
                None => {
                    tracing::warn!("Player {} holds unknown achievement '{}'", ckey, id);
                    unknown.push(id);
                }
            }
        }

        Ok(PlayerAchievementsView {
            ckey,
            display_name: display_name.trim().to_string(),
            earned,
            unknown,
        })
    }

    /// Prepares a grant for the member with the given display name
    ///
    /// When the store already knows the display name, its ckey is verified against the
    /// game database. Otherwise the caller has to ask for the ckey.
    pub async fn prepare_grant(&self, display_name: &str) -> Result<GrantPreparation, AppError> {
        let Some((stored_ckey, held)) = self
            .store
            .get_player_achievements_by_display_name(display_name)
            .await?
        else {
            return Ok(GrantPreparation::CkeyRequired);
        };

        let Some(ckey) = GameDatabaseRepository::new(self.db)
            .resolve_ckey(&stored_ckey)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Ckey '{}' of player '{}' was not found in the game database. Please check the data.",
                stored_ckey,
                display_name.trim()
            )));
        };

        self.build_menu(ckey, display_name, &held).await
    }

    /// Prepares a grant for a ckey typed in by the requester
    ///
    /// Creates an empty store record for players the store has not seen yet, so the
    /// display name is linked to the ckey even if no achievement gets picked.
    pub async fn prepare_grant_for_ckey(
        &self,
        display_name: &str,
        ckey_input: &str,
    ) -> Result<GrantPreparation, AppError> {
        let ckey_input = normalize_key(ckey_input);
        if ckey_input.is_empty() {
            return Err(AppError::BadRequest("Ckey must not be empty.".to_string()));
        }

        let Some(ckey) = GameDatabaseRepository::new(self.db)
            .resolve_ckey(&ckey_input)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Ckey '{ckey_input}' was not found in the game database."
            )));
        };

        let held = match self.store.get_player_achievements(&ckey).await? {
            Some(held) => held,
            None => {
                self.store
                    .upsert_player(&ckey, display_name, Vec::<String>::new())
                    .await?;
                tracing::info!("Created record for {} ({})", display_name.trim(), ckey);
                BTreeSet::new()
            }
        };

        self.build_menu(ckey, display_name, &held).await
    }

    async fn build_menu(
        &self,
        ckey: String,
        display_name: &str,
        held: &BTreeSet<String>,
    ) -> Result<GrantPreparation, AppError> {
        let available: Vec<_> = self
            .catalog
            .get_all()
            .await?
            .into_values()
            .filter(|definition| !held.contains(&definition.id))
            .collect();

        if available.is_empty() {
            return Ok(GrantPreparation::AllGranted { ckey });
        }

        Ok(GrantPreparation::Ready(GrantMenu {
            ckey,
            display_name: display_name.trim().to_string(),
            available,
        }))
    }

    /// Grants a catalog achievement to a player
    ///
    /// Granting an achievement the player already holds is reported as an outcome,
    /// not an error, since two open menus may pick the same entry.
    pub async fn grant(
        &self,
        ckey: &str,
        display_name: &str,
        id: &str,
    ) -> Result<GrantOutcome, AppError> {
        let Some(definition) = self.catalog.get(id).await? else {
            return Err(AppError::NotFound(format!(
                "Achievement '{}' no longer exists.",
                normalize_key(id)
            )));
        };

        let added = self
            .store
            .add_achievement(ckey, display_name, &definition.id)
            .await?;

        Ok(if added {
            GrantOutcome::Granted {
                title: definition.title,
            }
        } else {
            GrantOutcome::AlreadyGranted {
                title: definition.title,
            }
        })
    }

    /// Revokes an achievement from the player whose record carries `display_name`
    ///
    /// Ids missing from the catalog can still be revoked.
    pub async fn revoke(&self, display_name: &str, id: &str) -> Result<RevokeOutcome, AppError> {
        let id = normalize_key(id);
        if id.is_empty() {
            return Err(AppError::BadRequest(
                "Achievement id must not be empty.".to_string(),
            ));
        }

        let Some((ckey, _)) = self
            .store
            .get_player_achievements_by_display_name(display_name)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "No achievements found for Discord name '{}'.",
                display_name.trim()
            )));
        };

        let title = self
            .catalog
            .get(&id)
            .await?
            .map_or_else(|| id.clone(), |definition| definition.title);

        let removed = self
            .store
            .remove_achievement(&ckey, display_name, &id)
            .await?;

        Ok(if removed {
            RevokeOutcome::Revoked { ckey, title }
        } else {
            RevokeOutcome::NotHeld { ckey, title }
        })
    }
}
