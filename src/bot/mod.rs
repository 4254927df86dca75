//! Discord bot integration: slash commands, interactive components and role events.
//!
//! The bot registers its slash commands in every configured guild once connected,
//! answers command invocations and component callbacks, and mirrors sponsor role
//! changes onto the sponsor files.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild data, including the member cache used for role diffs
//! - `GUILD_MEMBERS` - Receive member updates (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod handler;
pub mod start;
