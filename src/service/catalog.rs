use crate::{
    data::{catalog::AchievementCatalog, player_achievement::PlayerAchievementStore},
    error::AppError,
    model::achievement::{
        is_valid_achievement_id, normalize_key, AchievementDefinition, CreateAchievementParam,
        UpdateAchievementParam,
    },
};

/// Longest title accepted; titles become select menu labels.
pub const MAX_TITLE_LEN: usize = 100;

/// Longest description accepted; descriptions are listed in embed fields.
pub const MAX_DESCRIPTION_LEN: usize = 300;

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty.")));
    }
    if value.contains(['|', '\n', '\r']) {
        return Err(AppError::BadRequest(format!(
            "{field} must not contain '|' or line breaks."
        )));
    }
    if value.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max_len} characters long."
        )));
    }

    Ok(value.to_string())
}

fn validate_id(id: &str) -> Result<String, AppError> {
    let id = normalize_key(id);
    if !is_valid_achievement_id(&id) {
        return Err(AppError::BadRequest(
            "Achievement id may only contain lowercase latin letters, digits and underscores."
                .to_string(),
        ));
    }
    Ok(id)
}

pub struct CatalogService<'a> {
    catalog: &'a AchievementCatalog,
    store: &'a PlayerAchievementStore,
}

impl<'a> CatalogService<'a> {
    pub fn new(catalog: &'a AchievementCatalog, store: &'a PlayerAchievementStore) -> Self {
        Self { catalog, store }
    }

    /// Adds a new achievement to the catalog
    pub async fn add(&self, param: CreateAchievementParam) -> Result<AchievementDefinition, AppError> {
        let definition = AchievementDefinition {
            id: validate_id(&param.id)?,
            title: validate_text("Title", &param.title, MAX_TITLE_LEN)?,
            description: validate_text("Description", &param.description, MAX_DESCRIPTION_LEN)?,
        };

        let duplicate = || {
            AppError::BadRequest(format!("Achievement '{}' already exists.", definition.id))
        };

        if self.catalog.exists(&definition.id).await? {
            return Err(duplicate());
        }
        // Another edit may have added the id since the check.
        if !self.catalog.add(definition.clone()).await? {
            return Err(duplicate());
        }

        Ok(definition)
    }

    /// Changes the title and/or description of an achievement
    pub async fn edit(&self, param: UpdateAchievementParam) -> Result<AchievementDefinition, AppError> {
        let id = validate_id(&param.id)?;

        if param.title.is_none() && param.description.is_none() {
            return Err(AppError::BadRequest(
                "Provide a new title or description.".to_string(),
            ));
        }

        let title = param
            .title
            .map(|title| validate_text("Title", &title, MAX_TITLE_LEN))
            .transpose()?;
        let description = param
            .description
            .map(|description| validate_text("Description", &description, MAX_DESCRIPTION_LEN))
            .transpose()?;

        self.catalog
            .update(&id, title, description)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Achievement '{id}' does not exist.")))
    }

    /// Removes an achievement from the catalog and from every player holding it
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of players the achievement was taken from
    pub async fn remove(&self, id: &str) -> Result<usize, AppError> {
        let id = validate_id(id)?;

        if !self.catalog.remove(&id).await? {
            return Err(AppError::NotFound(format!("Achievement '{id}' does not exist.")));
        }

        self.store.remove_achievement_from_all_players(&id).await
    }
}
