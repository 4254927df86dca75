//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! achievements, sponsor perks and leaderboard rows. Flat-file lines and database rows
//! are converted into these types at the repository boundary, and the bot layer
//! renders them into embeds and messages.

pub mod achievement;
pub mod discord;
pub mod leaderboard;
pub mod sponsor;
