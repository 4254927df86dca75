//! Append-only audit log of member actions.

use chrono::Local;
use std::path::PathBuf;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};

use crate::model::discord::Requester;

/// Formats one audit line, newline included.
pub fn format_entry(timestamp: &str, user_name: &str, user_id: u64, action: &str) -> String {
    format!("[{timestamp}] User: {user_name} (ID: {user_id}) - Action: {action}\n")
}

pub struct ActionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ActionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Appends an action performed by `requester`.
    ///
    /// Failures are logged and swallowed; a broken audit log never fails a command.
    pub async fn record(&self, requester: &Requester, action: &str) {
        self.record_for(&requester.name, requester.user_id, action)
            .await
    }

    /// Appends an action performed by the member with the given name and id.
    pub async fn record_for(&self, user_name: &str, user_id: u64, action: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let entry = format_entry(&timestamp, user_name, user_id, action);

        let _guard = self.lock.lock().await;
        if let Err(e) = self.append(entry.as_bytes()).await {
            tracing::error!(
                "Failed to write action log {}: {}",
                self.path.display(),
                e
            );
        }
    }

    async fn append(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await
    }
}
