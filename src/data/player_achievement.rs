//! Player achievement store backed by a `display_name|ckey|id,id` text file.
//!
//! Every operation takes the store lock, reads and parses the whole file, applies its
//! change and, when something changed, rewrites the file atomically before releasing
//! the lock. Reads take the same lock so they never observe a half-applied
//! read-modify-write cycle of another command.

use std::{collections::BTreeSet, path::PathBuf};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::achievement::{normalize_key, sanitize_display_name, PlayerAchievementRecord},
    util::fs::{atomic_write, join_lines, read_if_exists},
};

/// Parses store file contents into records in file order.
///
/// Blank and `#` lines are ignored, lines with fewer than two fields or an empty
/// ckey are logged and skipped. A repeated ckey replaces the earlier record in place.
pub fn parse_store(content: &str) -> Vec<PlayerAchievementRecord> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split('|');
        let (Some(display_name), Some(ckey)) = (parts.next(), parts.next()) else {
            tracing::warn!(
                "Skipping store line {}: expected at least 'display_name|ckey'",
                line_number
            );
            continue;
        };

        let ckey = normalize_key(ckey);
        if ckey.is_empty() {
            tracing::warn!("Skipping store line {}: empty ckey", line_number);
            continue;
        }

        let achievements = parts
            .next()
            .map(normalize_ids)
            .unwrap_or_default();

        put_record(
            &mut records,
            PlayerAchievementRecord {
                ckey,
                display_name: display_name.trim().to_string(),
                achievements,
            },
        );
    }

    records
}

fn normalize_ids(field: &str) -> BTreeSet<String> {
    field
        .split(',')
        .map(normalize_key)
        .filter(|id| !id.is_empty())
        .collect()
}

/// Replaces the record with the same ckey or appends a new one.
fn put_record(records: &mut Vec<PlayerAchievementRecord>, record: PlayerAchievementRecord) {
    match records.iter_mut().find(|r| r.ckey == record.ckey) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

/// Flat-file store of earned achievements, one line per player.
pub struct PlayerAchievementStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl PlayerAchievementStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Achievements of the player with the given ckey.
    ///
    /// # Returns
    /// - `Ok(Some(ids))` - Player has a record (possibly with no achievements)
    /// - `Ok(None)` - No record for the ckey
    pub async fn get_player_achievements(
        &self,
        ckey: &str,
    ) -> Result<Option<BTreeSet<String>>, AppError> {
        let ckey = normalize_key(ckey);
        let _guard = self.lock.lock().await;

        Ok(self
            .read_records()
            .await?
            .into_iter()
            .find(|record| record.ckey == ckey)
            .map(|record| record.achievements))
    }

    /// Finds a player by the display name stored next to their ckey.
    ///
    /// The name is sanitized like stored names and then compared exactly; the first
    /// match in file order wins.
    ///
    /// # Returns
    /// - `Ok(Some((ckey, ids)))` - Matching record
    /// - `Ok(None)` - No record carries this display name
    pub async fn get_player_achievements_by_display_name(
        &self,
        display_name: &str,
    ) -> Result<Option<(String, BTreeSet<String>)>, AppError> {
        let display_name = sanitize_display_name(display_name);
        let _guard = self.lock.lock().await;

        Ok(self
            .read_records()
            .await?
            .into_iter()
            .find(|record| record.display_name == display_name)
            .map(|record| (record.ckey, record.achievements)))
    }

    /// Creates or wholesale replaces a player's record.
    pub async fn upsert_player<I, S>(
        &self,
        ckey: &str,
        display_name: &str,
        achievements: I,
    ) -> Result<(), AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let record = PlayerAchievementRecord {
            ckey: normalize_key(ckey),
            display_name: sanitize_display_name(display_name),
            achievements: achievements
                .into_iter()
                .map(|id| normalize_key(id.as_ref()))
                .filter(|id| !id.is_empty())
                .collect(),
        };

        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;

        tracing::info!(
            "Upserting player {} ({}) with {} achievement(s)",
            record.display_name,
            record.ckey,
            record.achievements.len()
        );

        put_record(&mut records, record);
        self.write_records(&records).await
    }

    /// Adds an achievement to a player, creating the record if needed.
    ///
    /// A non-empty `display_name` replaces the stored one.
    ///
    /// # Returns
    /// - `Ok(true)` - Achievement was added
    /// - `Ok(false)` - Player already had it; nothing was written
    pub async fn add_achievement(
        &self,
        ckey: &str,
        display_name: &str,
        id: &str,
    ) -> Result<bool, AppError> {
        let ckey = normalize_key(ckey);
        let id = normalize_key(id);
        let display_name = sanitize_display_name(display_name);

        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;

        let record = match records.iter().position(|r| r.ckey == ckey) {
            Some(index) => &mut records[index],
            None => {
                records.push(PlayerAchievementRecord {
                    ckey: ckey.clone(),
                    display_name: display_name.clone(),
                    achievements: BTreeSet::new(),
                });
                let last = records.len() - 1;
                &mut records[last]
            }
        };

        if !record.achievements.insert(id.clone()) {
            return Ok(false);
        }
        if !display_name.is_empty() {
            record.display_name = display_name;
        }

        tracing::info!(
            "Added achievement '{}' to {} ({})",
            id,
            record.display_name,
            ckey
        );

        self.write_records(&records).await?;
        Ok(true)
    }

    /// Removes an achievement from a player.
    ///
    /// A non-empty `display_name` replaces the stored one when the removal happens.
    ///
    /// # Returns
    /// - `Ok(true)` - Achievement was removed
    /// - `Ok(false)` - No record for the ckey, or the player did not have it
    pub async fn remove_achievement(
        &self,
        ckey: &str,
        display_name: &str,
        id: &str,
    ) -> Result<bool, AppError> {
        let ckey = normalize_key(ckey);
        let id = normalize_key(id);
        let display_name = sanitize_display_name(display_name);

        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;

        let Some(record) = records.iter_mut().find(|r| r.ckey == ckey) else {
            return Ok(false);
        };
        if !record.achievements.remove(&id) {
            return Ok(false);
        }
        if !display_name.is_empty() {
            record.display_name = display_name;
        }

        tracing::info!(
            "Removed achievement '{}' from {} ({})",
            id,
            record.display_name,
            ckey
        );

        self.write_records(&records).await?;
        Ok(true)
    }

    /// Strips an achievement from every player.
    ///
    /// The file is only rewritten when at least one player held the achievement.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of players the achievement was removed from
    pub async fn remove_achievement_from_all_players(&self, id: &str) -> Result<usize, AppError> {
        let id = normalize_key(id);

        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;

        let removed = records
            .iter_mut()
            .map(|record| record.achievements.remove(&id))
            .filter(|removed| *removed)
            .count();

        if removed > 0 {
            self.write_records(&records).await?;
            tracing::info!("Removed achievement '{}' from {} player(s)", id, removed);
        }

        Ok(removed)
    }

    /// Must be called with the store lock held.
    async fn read_records(&self) -> Result<Vec<PlayerAchievementRecord>, AppError> {
        Ok(read_if_exists(&self.path)
            .await?
            .map(|content| parse_store(&content))
            .unwrap_or_default())
    }

    /// Must be called with the store lock held.
    async fn write_records(&self, records: &[PlayerAchievementRecord]) -> Result<(), AppError> {
        let lines: Vec<String> = records.iter().map(PlayerAchievementRecord::to_line).collect();

        atomic_write(&self.path, join_lines(&lines))
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to write {}: {}", self.path.display(), e);
            })
    }
}
