//! Storage layer for flat files and the game database.
//!
//! This module contains the repositories behind every piece of state the bot reads or
//! writes. File-backed repositories own the lock guarding their file and replace it
//! atomically on every change; the game database repository issues read-only queries
//! against the game server's PostgreSQL schema. Repositories return domain models so
//! the service layer never sees file lines or raw rows.

pub mod action_log;
pub mod catalog;
pub mod disposable;
pub mod game;
pub mod player_achievement;
pub mod sponsor;

#[cfg(test)]
mod test;
