use std::{fmt::Display, num::NonZeroU64, str::FromStr};

use crate::error::config::ConfigError;

/// Parses a single value of an environment variable into `T`
///
/// # Arguments
/// - `key` - Name of the environment variable, used for error reporting
/// - `value` - Raw value of the environment variable
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - Value could not be parsed as `T`
pub fn parse_env_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a comma separated list of Discord ids
///
/// Whitespace around items is ignored. An empty item (e.g. `1,,2`) is rejected rather
/// than skipped so that typos in role or channel lists surface at startup.
///
/// # Arguments
/// - `key` - Name of the environment variable, used for error reporting
/// - `value` - Raw comma separated value
///
/// # Returns
/// - `Ok(Vec<u64>)` - Parsed ids in input order
/// - `Err(ConfigError::InvalidEnvVar)` - At least one item is not a valid u64
pub fn parse_id_list(key: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value.split(',').map(|item| parse_id(key, item)).collect()
}

/// Parses a single Discord id; snowflakes are never zero.
pub fn parse_id(key: &str, value: &str) -> Result<u64, ConfigError> {
    parse_env_value::<NonZeroU64>(key, value).map(NonZeroU64::get)
}
