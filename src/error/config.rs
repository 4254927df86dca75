use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into its typed field.
    #[error("Invalid value '{value}' for environment variable {key}: {reason}")]
    InvalidEnvVar {
        key: String,
        value: String,
        reason: String,
    },

    /// Every problem found while loading the configuration.
    ///
    /// Startup collects all missing and invalid keys before failing so an operator can
    /// fix the environment in one pass.
    #[error("Invalid configuration: {}", join_errors(.0))]
    Multiple(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
