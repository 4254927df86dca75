mod bot;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_game_database(&config).await?;
    let state = startup::build_state(config, db).await;

    bot::start::start_bot(state).await
}
