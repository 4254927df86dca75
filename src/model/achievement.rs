//! Achievement domain models and parameters.
//!
//! Provides the catalog definition type, the per-player record persisted by the
//! achievement store, and the outcome types returned by achievement operations so
//! that the bot layer can render every case explicitly.

use regex::Regex;
use std::{collections::BTreeSet, sync::LazyLock};

/// Valid achievement identifier after normalization.
pub static ACHIEVEMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("achievement id pattern is valid"));

/// Normalizes a ckey or achievement id: trimmed and lowercased.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Checks an already normalized achievement id against `ACHIEVEMENT_ID_PATTERN`.
pub fn is_valid_achievement_id(id: &str) -> bool {
    ACHIEVEMENT_ID_PATTERN.is_match(id)
}

/// Makes a Discord display name safe to store in a `|` delimited line.
///
/// Field separators become `¦` and line breaks become spaces, so the stored name
/// reads the same but can never shift the ckey or achievement fields.
pub fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '|' => '¦',
            '\r' | '\n' => ' ',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Catalog entry describing one achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDefinition {
    /// Normalized identifier, unique within the catalog.
    pub id: String,
    /// Human readable name shown in menus and embeds.
    pub title: String,
    pub description: String,
}

impl AchievementDefinition {
    /// Serializes the definition as a catalog line (`id|title|description`).
    pub fn to_line(&self) -> String {
        format!("{}|{}|{}", self.id, self.title, self.description)
    }
}

/// Achievements earned by a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAchievementRecord {
    /// Canonical, normalized player identifier.
    pub ckey: String,
    /// Best-effort Discord display name, kept for readability only.
    pub display_name: String,
    /// Earned achievement ids, ordered for deterministic output.
    pub achievements: BTreeSet<String>,
}

impl PlayerAchievementRecord {
    /// Serializes the record as a store line (`display_name|ckey|id_1,id_2`).
    pub fn to_line(&self) -> String {
        let achievements = self
            .achievements
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");

        format!("{}|{}|{}", self.display_name, self.ckey, achievements)
    }
}

/// Parameters for adding a catalog entry.
#[derive(Debug, Clone)]
pub struct CreateAchievementParam {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Parameters for editing a catalog entry; `None` keeps the current value.
#[derive(Debug, Clone)]
pub struct UpdateAchievementParam {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A player's achievements resolved against the catalog for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAchievementsView {
    pub ckey: String,
    pub display_name: String,
    /// Earned achievements present in the catalog, ordered by id.
    pub earned: Vec<AchievementDefinition>,
    /// Earned ids missing from the catalog.
    pub unknown: Vec<String>,
}

impl PlayerAchievementsView {
    pub fn is_empty(&self) -> bool {
        self.earned.is_empty() && self.unknown.is_empty()
    }
}

/// Achievements a player may still be granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantMenu {
    pub ckey: String,
    pub display_name: String,
    /// Catalog entries the player does not hold yet, ordered by id.
    pub available: Vec<AchievementDefinition>,
}

/// Result of preparing a grant for a display name or ckey.
#[derive(Debug, Clone, PartialEq)]
pub enum GrantPreparation {
    /// No store record carries the display name; the ckey must be asked for.
    CkeyRequired,
    /// The player already holds every catalog entry.
    AllGranted { ckey: String },
    /// Achievements that can be offered in a select menu.
    Ready(GrantMenu),
}

/// Result of granting an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    Granted { title: String },
    /// Already held, e.g. granted by a concurrent menu.
    AlreadyGranted { title: String },
}

/// Result of revoking an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked { ckey: String, title: String },
    NotHeld { ckey: String, title: String },
}
