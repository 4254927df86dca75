use std::path::PathBuf;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Component or modal custom id doesn't follow the `action:token` layout
    ///
    /// Only ids produced by the bot itself should ever arrive, so this points at a
    /// stale message from an older build or a forged interaction.
    #[error("Malformed component custom id '{0}'")]
    MalformedCustomId(String),

    /// Failure to move a freshly written temporary file over its target
    ///
    /// The temporary file is removed when this error is produced, the previous
    /// version of the target stays intact.
    #[error("Failed to persist file {path}: {source}")]
    Persist {
        /// The file that was being replaced
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Blocking file task panicked or was cancelled
    #[error("Blocking file task failed: {0}")]
    BlockingTask(String),
}
