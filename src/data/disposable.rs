//! Consumable sponsor shop credits, one `ckey, slots, tokens` line per player.

use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    model::sponsor::{DisposableRecord, FIELD_SEPARATOR},
    util::fs::{atomic_write, join_lines, read_if_exists},
};

fn line_ckey(line: &str) -> &str {
    line.split(FIELD_SEPARATOR).next().unwrap_or_default().trim()
}

pub struct DisposableRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DisposableRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Sets the credits of a ckey, replacing any existing line for it.
    ///
    /// # Returns
    /// - `Ok(true)` - No line existed and one was appended
    /// - `Ok(false)` - Existing line(s) were replaced
    pub async fn upsert(&self, record: &DisposableRecord) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;

        let mut lines = self.read_lines().await?;
        let mut replaced = false;

        for line in lines.iter_mut() {
            if line_ckey(line) == record.ckey {
                *line = record.to_line();
                replaced = true;
            }
        }

        if !replaced {
            lines.push(record.to_line());
        }

        self.write_lines(&lines).await?;
        Ok(!replaced)
    }

    /// Moves the credits of `old_ckey` to `new_ckey`.
    ///
    /// Missing slot or token fields are written back as `0`. A missing file is left
    /// missing.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one line was renamed
    /// - `Ok(false)` - `old_ckey` has no credits
    pub async fn rename_ckey(&self, old_ckey: &str, new_ckey: &str) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;

        let mut lines = self.read_lines().await?;
        let mut renamed = false;

        for line in lines.iter_mut() {
            if line_ckey(line) != old_ckey {
                continue;
            }

            let mut parts = line.split(FIELD_SEPARATOR).skip(1).map(str::trim);
            let slots = parts.next().filter(|s| !s.is_empty()).unwrap_or("0");
            let tokens = parts.next().filter(|s| !s.is_empty()).unwrap_or("0");

            *line = [new_ckey, slots, tokens].join(FIELD_SEPARATOR);
            renamed = true;
        }

        if renamed {
            self.write_lines(&lines).await?;
            tracing::info!("Moved credits from {} to {}", old_ckey, new_ckey);
        }

        Ok(renamed)
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
