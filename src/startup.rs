use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::{config::Config, error::AppError, state::AppState};

/// Connects to the game server's PostgreSQL database.
///
/// The bot only ever reads from this database, so no migrations are run. The pool is
/// kept small since queries are issued by chat commands only.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool
/// - `Err(AppError)` - Invalid connection settings or the database is unreachable
pub async fn connect_to_game_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(config.game_database.connection_url()?);
    opt.max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    tracing::info!(
        "Connected to game database {} on {}:{}",
        config.game_database.name,
        config.game_database.host,
        config.game_database.port
    );

    Ok(db)
}

/// Builds the application state and loads the achievement catalog.
///
/// A catalog that fails to load leaves the bot running with an empty catalog; the
/// error is logged and the next successful edit reloads it.
pub async fn build_state(config: Config, db: DatabaseConnection) -> AppState {
    let state = AppState::new(config, db);

    if let Err(e) = state.catalog.load().await {
        tracing::error!("Failed to load achievement catalog: {}", e);
    }
    tracing::info!(
        "Achievement catalog ready with {} entries",
        state.catalog.len().await
    );

    state
}
