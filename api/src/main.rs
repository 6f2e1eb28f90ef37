use api::{App, ApiError, Config};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // RUST_LOG=api=debug,messages_core=trace narrows or widens the output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    init_tracing();

    // Variables already set in the process environment win over .env entries
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "environment file loaded"),
        Err(_) => debug!("no environment file, reading process environment only"),
    }

    let config = Config::parse();
    info!(storage = ?config.storage, environment = ?config.environment, "starting messages API");

    App::new(config).await?.start().await
}
