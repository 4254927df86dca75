//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds every shared resource the
//! bot needs to answer commands. The state is built once during startup and handed
//! to the serenity event handler; each command borrows what it needs from it.
//!
//! Flat-file repositories own their lock as a field, so they are wrapped in `Arc`
//! and every clone of the state serializes access through the same lock.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::Config,
    data::{
        action_log::ActionLog, catalog::AchievementCatalog, disposable::DisposableRepository,
        player_achievement::PlayerAchievementStore, sponsor::SponsorRepository,
    },
    service::interaction::InteractionSessionService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - repositories and the config are behind `Arc`
/// - `InteractionSessionService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Read-only connection pool to the game server database.
    pub db: DatabaseConnection,

    pub catalog: Arc<AchievementCatalog>,
    pub store: Arc<PlayerAchievementStore>,
    pub sponsors: Arc<SponsorRepository>,
    pub disposables: Arc<DisposableRepository>,
    pub action_log: Arc<ActionLog>,

    /// Open select menus, modals and pagers.
    pub sessions: InteractionSessionService,
}

impl AppState {
    /// Creates the state, pointing every repository at the path from configuration.
    ///
    /// Nothing is read here; the catalog is loaded separately during startup and the
    /// other files are read on demand.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `db` - Game database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        Self {
            catalog: Arc::new(AchievementCatalog::new(&config.achievements_catalog_path)),
            store: Arc::new(PlayerAchievementStore::new(&config.players_achievements_path)),
            sponsors: Arc::new(SponsorRepository::new(&config.sponsors_file_path)),
            disposables: Arc::new(DisposableRepository::new(&config.disposable_file_path)),
            action_log: Arc::new(ActionLog::new(&config.action_log_path)),
            sessions: InteractionSessionService::new(),
            config: Arc::new(config),
            db,
        }
    }
}
