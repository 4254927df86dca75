//! Achievement catalog backed by a `id|title|description` text file.
//!
//! The catalog is read often (every menu, every listing) and edited rarely, so readers
//! share an immutable snapshot behind an `RwLock` while edits are serialized through a
//! separate mutex. An edit rewrites the file atomically and then reloads the snapshot,
//! so the in-memory table always mirrors what is on disk.

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, RwLock};

use crate::{
    error::AppError,
    model::achievement::{is_valid_achievement_id, normalize_key, AchievementDefinition},
    util::fs::{atomic_write, join_lines, read_if_exists},
};

type CatalogTable = BTreeMap<String, AchievementDefinition>;

/// Outcome of parsing a single catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogLine {
    /// Blank line or `#` comment.
    Ignored,
    Entry(AchievementDefinition),
    Malformed(String),
}

fn parse_line(line: &str) -> CatalogLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return CatalogLine::Ignored;
    }

    let parts: Vec<&str> = line.split('|').collect();
    let [id, title, description] = parts.as_slice() else {
        return CatalogLine::Malformed(format!(
            "expected 'id|title|description', got {} field(s)",
            parts.len()
        ));
    };

    let id = normalize_key(id);
    if !is_valid_achievement_id(&id) {
        return CatalogLine::Malformed(format!(
            "id '{id}' may only contain lowercase letters, digits and underscores"
        ));
    }

    CatalogLine::Entry(AchievementDefinition {
        id,
        title: title.trim().to_string(),
        description: description.trim().to_string(),
    })
}

/// Result of parsing a whole catalog file.
#[derive(Debug, Default)]
pub struct ParsedCatalog {
    pub entries: CatalogTable,
    /// 1-based numbers of lines that were skipped as malformed.
    pub skipped: Vec<usize>,
}

/// Parses catalog file contents.
///
/// Blank and `#` lines are ignored. Malformed lines are logged and skipped; when an id
/// appears twice the later line wins.
pub fn parse_catalog(content: &str) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            CatalogLine::Ignored => {}
            CatalogLine::Entry(definition) => {
                parsed.entries.insert(definition.id.clone(), definition);
            }
            CatalogLine::Malformed(reason) => {
                tracing::warn!("Skipping catalog line {}: {}", line_number, reason);
                parsed.skipped.push(line_number);
            }
        }
    }

    parsed
}

/// Achievement definitions loaded from the catalog file and kept in memory.
pub struct AchievementCatalog {
    path: PathBuf,
    /// `None` until the first load.
    snapshot: RwLock<Option<Arc<CatalogTable>>>,
    /// Serializes edits so concurrent read-modify-write cycles cannot drop each other.
    write_lock: Mutex<()>,
}

impl AchievementCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(None),
            write_lock: Mutex::new(()),
        }
    }

    /// Loads the catalog file and replaces the in-memory table.
    ///
    /// A missing file yields an empty catalog. On a read failure the table is reset
    /// to empty and the error is returned.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of definitions loaded
    /// - `Err(AppError::IoErr)` - Catalog file exists but could not be read
    pub async fn load(&self) -> Result<usize, AppError> {
        let content = match read_if_exists(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to load catalog from {}: {}", self.path.display(), e);
                *self.snapshot.write().await = Some(Arc::new(CatalogTable::new()));
                return Err(e);
            }
        };

        let entries = match content {
            Some(content) => parse_catalog(&content).entries,
            None => {
                tracing::warn!("Catalog file {} not found", self.path.display());
                CatalogTable::new()
            }
        };

        let count = entries.len();
        *self.snapshot.write().await = Some(Arc::new(entries));

        tracing::info!(
            "Loaded {} achievement(s) from {}",
            count,
            self.path.display()
        );

        Ok(count)
    }

    /// Current table, loading it on first use.
    async fn snapshot(&self) -> Result<Arc<CatalogTable>, AppError> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        self.load().await?;

        Ok(self.snapshot.read().await.clone().unwrap_or_default())
    }

    /// Copy of every definition, keyed and ordered by id.
    pub async fn get_all(&self) -> Result<BTreeMap<String, AchievementDefinition>, AppError> {
        Ok(self.snapshot().await?.as_ref().clone())
    }

    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.snapshot().await?.contains_key(&normalize_key(id)))
    }

    pub async fn get(&self, id: &str) -> Result<Option<AchievementDefinition>, AppError> {
        Ok(self.snapshot().await?.get(&normalize_key(id)).cloned())
    }

    /// Number of loaded definitions; 0 before the first load.
    pub async fn len(&self) -> usize {
        self.snapshot
            .read()
            .await
            .as_ref()
            .map_or(0, |table| table.len())
    }

    /// Appends a definition to the catalog file.
    ///
    /// # Returns
    /// - `Ok(true)` - Definition was written and the catalog reloaded
    /// - `Ok(false)` - A definition with the same id already exists
    /// - `Err(AppError)` - Reading or rewriting the file failed
    pub async fn add(&self, definition: AchievementDefinition) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut lines = self.read_lines().await?;
        if lines
            .iter()
            .any(|line| matches!(parse_line(line), CatalogLine::Entry(ref d) if d.id == definition.id))
        {
            return Ok(false);
        }

        lines.push(definition.to_line());
        self.rewrite(&lines).await?;

        tracing::info!("Added achievement '{}' to the catalog", definition.id);
        Ok(true)
    }

    /// Replaces the title and/or description of an existing definition.
    ///
    /// Every other line of the file, comments included, is kept verbatim.
    ///
    /// # Returns
    /// - `Ok(Some(definition))` - The definition as written
    /// - `Ok(None)` - No definition with that id exists
    /// - `Err(AppError)` - Reading or rewriting the file failed
    pub async fn update(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Option<AchievementDefinition>, AppError> {
        let id = normalize_key(id);
        let _guard = self.write_lock.lock().await;

        let mut lines = self.read_lines().await?;
        let mut updated = None;

        for line in lines.iter_mut() {
            let CatalogLine::Entry(current) = parse_line(line) else {
                continue;
            };
            if current.id != id {
                continue;
            }

            let definition = AchievementDefinition {
                id: current.id,
                title: title.clone().unwrap_or(current.title),
                description: description.clone().unwrap_or(current.description),
            };
            *line = definition.to_line();
            updated = Some(definition);
        }

        if updated.is_some() {
            self.rewrite(&lines).await?;
            tracing::info!("Updated achievement '{}' in the catalog", id);
        }

        Ok(updated)
    }

    /// Deletes every line defining `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one line was removed
    /// - `Ok(false)` - No definition with that id exists
    pub async fn remove(&self, id: &str) -> Result<bool, AppError> {
        let id = normalize_key(id);
        let _guard = self.write_lock.lock().await;

        let lines = self.read_lines().await?;
        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| !matches!(parse_line(line), CatalogLine::Entry(ref d) if d.id == id))
            .collect();

        if kept.len() == before {
            return Ok(false);
        }

        self.rewrite(&kept).await?;

        tracing::info!("Removed achievement '{}' from the catalog", id);
        Ok(true)
    }

    async fn read_lines(&self) -> Result<Vec<String>, AppError> {
        Ok(read_if_exists(&self.path)
            .await?
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }

    async fn rewrite(&self, lines: &[String]) -> Result<(), AppError> {
        atomic_write(&self.path, join_lines(lines)).await?;
        self.load().await?;
        Ok(())
    }
}
