//! Flat-file helpers shared by the file-backed repositories.
//!
//! Every data file the bot owns is small and line oriented, so repositories read the
//! whole file, rebuild it in memory and replace it through `atomic_write`. The new
//! contents are written to a temporary file in the same directory, flushed to disk
//! and renamed over the target; a reader therefore sees either the complete old file
//! or the complete new one.

use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::{Builder, PersistError};

use crate::error::{internal::InternalError, AppError};

/// Reads a whole file, treating a missing file as absent.
///
/// # Arguments
/// - `path` - File to read
///
/// # Returns
/// - `Ok(Some(String))` - File contents
/// - `Ok(None)` - File does not exist
/// - `Err(AppError::IoErr)` - Any other read failure
pub async fn read_if_exists(path: &Path) -> Result<Option<String>, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Joins lines into file contents, terminating every line with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push('\n');
        out
    })
}

/// Atomically replaces `path` with `contents`.
///
/// The blocking write runs on tokio's blocking pool. If any step fails the
/// temporary file is deleted and the original file is left untouched.
///
/// # Arguments
/// - `path` - File to replace (created if missing)
/// - `contents` - Complete new contents
///
/// # Returns
/// - `Ok(())` - New contents are visible at `path`
/// - `Err(AppError::IoErr)` - Temporary file could not be created or written
/// - `Err(AppError::InternalError(Persist))` - Rename over the target failed
pub async fn atomic_write(path: &Path, contents: String) -> Result<(), AppError> {
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || write_and_persist(target, contents.as_bytes()))
        .await
        .map_err(|e| InternalError::BlockingTask(e.to_string()))?
}

fn write_and_persist(target: PathBuf, contents: &[u8]) -> Result<(), AppError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = Builder::new()
        .prefix(".tmp-")
        .suffix(".tmp")
        .tempfile_in(&dir)?;

    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    // A failed persist hands the temp file back; dropping it removes it from disk.
    tmp.persist(&target).map_err(|PersistError { error, file }| {
        drop(file);
        InternalError::Persist {
            path: target.clone(),
            source: error,
        }
    })?;

    Ok(())
}
