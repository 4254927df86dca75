//! Error types and chat reply mapping.
//!
//! This module provides the application's error hierarchy and the conversion logic
//! for turning errors into messages shown to the member who invoked a command. The
//! `AppError` enum serves as the top-level error type that wraps domain-specific
//! errors; `AppError::to_reply` is the single place where errors are matched and
//! rendered, so command handlers never decide on their own what to leak.

pub mod auth;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, internal::InternalError};

/// Message returned to the requester for every system fault.
///
/// Details of the underlying failure are logged server-side only.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while processing the command. Please try again later or contact an administrator.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// conversion to chat replies. Most variants use `#[from]` for automatic error
/// conversion. Domain-specific errors like `AuthError` render their own reply, while
/// system faults are logged and replaced by a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authorization error (missing role, wrong channel, not a sponsor).
    ///
    /// Delegates to `AuthError::to_reply()` for the requester-facing text.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Game database error from SeaORM.
    ///
    /// Reported to the requester as a generic failure with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Flat-file read or write failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected internal state, see `InternalError`.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Requested player, achievement or record does not exist.
    ///
    /// # Fields
    /// - Message describing what was not found, shown verbatim to the requester
    #[error("{0}")]
    NotFound(String),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid, shown verbatim to the requester
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text shown to the member who invoked the command.
    ///
    /// Validation and not-found errors carry their own message. Authorization errors
    /// delegate to `AuthError::to_reply()`. Every other variant is a system fault: it
    /// is logged with full details and replaced by `GENERIC_FAILURE_MESSAGE` to avoid
    /// leaking file paths, SQL or Discord internals into the chat.
    ///
    /// # Returns
    /// - `String` - Message safe to send to the requester
    pub fn to_reply(&self) -> String {
        match self {
            Self::AuthErr(err) => err.to_reply(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::IoErr(_)
            | Self::DiscordErr(_)
            | Self::InternalError(_) => {
                tracing::error!("{}", self);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
