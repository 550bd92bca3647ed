use anyhow::{Context, Result};
use clap::Parser;

use softpharos_server::db::{create_pool_with_options, migrations};
use softpharos_server::tracing_setup::{init_tracing, TracingConfig};
use softpharos_server::{run_server, AppState, ServerArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = ServerArgs::parse();
    init_tracing(&TracingConfig { debug: args.debug })?;

    let config = args.server_config();
    tracing::info!("Starting SoftPharos API on {}", config.bind_addr);

    let pool = create_pool_with_options(&args.database_url(), args.pool_options())
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run database migrations")?;

    run_server(AppState::postgres(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
