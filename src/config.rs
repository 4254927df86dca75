//! Environment-based application configuration.
//!
//! All settings are read once at startup into a single typed `Config`. Loading never
//! stops at the first problem: every missing or unparsable key is collected and
//! reported together, then the process exits before connecting to anything.

use std::path::PathBuf;
use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_env_value, parse_id, parse_id_list},
};

/// Connection settings for the game server's PostgreSQL database.
#[derive(Debug, Clone)]
pub struct GameDatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl GameDatabaseConfig {
    /// Builds the `postgres://` connection URL.
    ///
    /// Credentials and the database name are percent-encoded by the `url` crate, so
    /// passwords containing `@`, `/` or `:` are safe.
    ///
    /// # Returns
    /// - `Ok(String)` - Connection URL for SeaORM
    /// - `Err(ConfigError::InvalidEnvVar)` - Host cannot form a valid URL
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        let invalid_host = |reason: String| ConfigError::InvalidEnvVar {
            key: "SS14_DB_HOST".to_string(),
            value: self.host.clone(),
            reason,
        };

        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port))
            .map_err(|e| invalid_host(e.to_string()))?;

        url.set_username(&self.user)
            .map_err(|_| invalid_host("URL cannot carry credentials".to_string()))?;
        url.set_password(Some(&self.password))
            .map_err(|_| invalid_host("URL cannot carry credentials".to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_host("URL cannot carry a database name".to_string()))?
            .push(&self.name);

        Ok(url.to_string())
    }
}

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Guilds the slash commands are registered in.
    pub guild_ids: Vec<u64>,

    /// Paid sponsor roles whose holders get shop perks.
    pub tracked_role_ids: Vec<u64>,
    /// Role mirrored onto every sponsor.
    pub boosty_role_id: u64,
    pub ckey_channel_id: u64,
    pub info_channel_id: u64,
    /// Channels where leaderboard commands may be used.
    pub top_commands_channel_ids: Vec<u64>,

    /// Roles allowed to grant, revoke and edit achievements.
    pub achievements_allowed_role_ids: Vec<u64>,
    /// Roles allowed to hand out consumable credits.
    pub credits_allowed_role_ids: Vec<u64>,

    pub sponsors_file_path: PathBuf,
    pub disposable_file_path: PathBuf,
    pub action_log_path: PathBuf,
    pub achievements_catalog_path: PathBuf,
    pub players_achievements_path: PathBuf,

    pub game_database: GameDatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a key, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every key present and valid
    /// - `Err(ConfigError)` - The single problem found, or `Multiple` listing all of them
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env = EnvReader {
            lookup,
            errors: Vec::new(),
        };

        let config = Self {
            discord_token: env.string("DISCORD_TOKEN"),
            guild_ids: env.id_list("GUILD_IDS"),
            tracked_role_ids: env.id_list("TRACKED_ROLES"),
            boosty_role_id: env.id("BOOSTY_ROLE_ID"),
            ckey_channel_id: env.id("CKEY_CHANNEL_ID"),
            info_channel_id: env.id("INFO_CHANNEL_ID"),
            top_commands_channel_ids: env.id_list("TOP_COMMANDS_ALLOWED_CHANNELS"),
            achievements_allowed_role_ids: env.id_list("ACHIEVEMENTS_ALLOWED_ROLE_IDS"),
            credits_allowed_role_ids: env.id_list("CREDITS_ALLOWED_ROLE_IDS"),
            sponsors_file_path: env.path("SPONSORS_FILE_PATH"),
            disposable_file_path: env.path("DISPOSABLE_FILE_PATH"),
            action_log_path: env.path("LOG_FILE_PATH"),
            achievements_catalog_path: env.path("ACHIEVEMENTS_CATALOG_PATH"),
            players_achievements_path: env.path("PLAYERS_ACHIEVEMENTS_PATH"),
            game_database: GameDatabaseConfig {
                host: env.string("SS14_DB_HOST"),
                port: env.number("SS14_DB_PORT"),
                name: env.string("SS14_DB_NAME"),
                user: env.string("SS14_DB_USER"),
                password: env.string("SS14_DB_PASSWORD"),
            },
        };

        let mut errors = env.errors;
        match errors.len() {
            0 => Ok(config),
            1 => Err(errors.remove(0)),
            _ => Err(ConfigError::Multiple(errors)),
        }
    }
}

/// Reads typed values and records every failure instead of returning early.
struct EnvReader<F> {
    lookup: F,
    errors: Vec<ConfigError>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&mut self, key: &str) -> Option<String> {
        match (self.lookup)(key).filter(|value| !value.trim().is_empty()) {
            Some(value) => Some(value),
            None => {
                self.errors
                    .push(ConfigError::MissingEnvVar(key.to_string()));
                None
            }
        }
    }

    fn string(&mut self, key: &str) -> String {
        self.raw(key).unwrap_or_default()
    }

    fn path(&mut self, key: &str) -> PathBuf {
        PathBuf::from(self.string(key))
    }

    fn number<T>(&mut self, key: &str) -> T
    where
        T: std::str::FromStr + Default,
        T::Err: std::fmt::Display,
    {
        let Some(value) = self.raw(key) else {
            return T::default();
        };

        parse_env_value(key, &value).unwrap_or_else(|e| {
            self.errors.push(e);
            T::default()
        })
    }

    fn id(&mut self, key: &str) -> u64 {
        let Some(value) = self.raw(key) else {
            return 0;
        };

        parse_id(key, &value).unwrap_or_else(|e| {
            self.errors.push(e);
            0
        })
    }

    fn id_list(&mut self, key: &str) -> Vec<u64> {
        let Some(value) = self.raw(key) else {
            return Vec::new();
        };

        parse_id_list(key, &value).unwrap_or_else(|e| {
            self.errors.push(e);
            Vec::new()
        })
    }
}
