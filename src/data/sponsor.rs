//! Sponsor records shared with the game server.
//!
//! The file is owned by the game server as much as by the bot, so edits work on raw
//! lines: only lines belonging to the sponsor being changed are touched and
//! everything else is written back as it was read.

use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::sponsor::{SponsorRecord, FIELD_SEPARATOR},
    util::fs::{atomic_write, join_lines, read_if_exists},
};

/// Splits a sponsors line into its fields.
fn fields(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(FIELD_SEPARATOR)
        .collect()
}

fn belongs_to(line: &str, discord_name: &str) -> bool {
    fields(line).first() == Some(&discord_name)
}

pub struct SponsorRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SponsorRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Ckey registered by the sponsor with the given Discord username.
    pub async fn find_ckey(&self, discord_name: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;

        Ok(self
            .read_lines()
            .await?
            .iter()
            .filter(|line| belongs_to(line, discord_name))
            .find_map(|line| fields(line).get(1).map(|ckey| ckey.trim().to_string())))
    }

    /// Replaces the sponsor's line or appends a new one.
    ///
    /// # Returns
    /// - `Ok(Some(ckey))` - Sponsor already had a line; the ckey it carried
    /// - `Ok(None)` - A new line was appended
    pub async fn upsert(&self, record: &SponsorRecord) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;

        let mut lines = self.read_lines().await?;
        let mut previous_ckey = None;
        let mut found = false;

        for line in lines.iter_mut() {
            if !belongs_to(line, &record.discord_name) {
                continue;
            }
            if !found {
                previous_ckey = fields(line).get(1).map(|ckey| ckey.trim().to_string());
            }
            found = true;
            *line = record.to_line();
        }

        if !found {
            lines.push(record.to_line());
        }

        self.write_lines(&lines).await?;
        Ok(previous_ckey)
    }

    /// Sets the name color of an existing sponsor.
    ///
    /// # Returns
    /// - `Ok(true)` - Color was written
    /// - `Ok(false)` - Sponsor has no line in the file
    pub async fn set_color(&self, discord_name: &str, color: &str) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;

        let mut lines = self.read_lines().await?;
        let mut found = false;

        for line in lines.iter_mut() {
            if !belongs_to(line, discord_name) {
                continue;
            }
            found = true;

            let mut parts: Vec<String> = fields(line).into_iter().map(str::to_string).collect();
            match parts.get_mut(4) {
                Some(existing) => *existing = color.to_string(),
                None => parts.push(color.to_string()),
            }
            *line = parts.join(FIELD_SEPARATOR);
        }

        if found {
            self.write_lines(&lines).await?;
        }

        Ok(found)
    }

    /// Deletes the sponsor's lines.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one line was removed
    /// - `Ok(false)` - Sponsor had no line; the file is left untouched
    pub async fn remove(&self, discord_name: &str) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;

        let lines = self.read_lines().await?;
        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| !belongs_to(line, discord_name))
            .collect();

        if kept.len() == before {
            return Ok(false);
        }

        self.write_lines(&kept).await?;
        tracing::info!("Removed sponsor {} from {}", discord_name, self.path.display());
        Ok(true)
    }

    async fn read_lines(&self) -> Result<Vec<String>, AppError> {
        Ok(read_if_exists(&self.path)
            .await?
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }

    async fn write_lines(&self, lines: &[String]) -> Result<(), AppError> {
        atomic_write(&self.path, join_lines(lines)).await
    }
}
