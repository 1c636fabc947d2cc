//! Autopilot parking HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin autopilot-server
//!
//! # Preload the catalog and listen on another port
//! SEED_LOCATIONS=data/locations.json PORT=9090 cargo run --bin autopilot-server
//! ```
//!
//! # Environment Variables
//!
//! - `AUTOPILOT_CONFIG`: path to a TOML config file
//! - `HOST`, `PORT`: bind address (default: 0.0.0.0:8080)
//! - `CIVIL_TIMEZONE`: zone the rules are evaluated in (default: America/Chicago)
//! - `SEED_LOCATIONS`: JSON array of locations loaded at startup
//! - `RUST_LOG`: log filter (default: info)

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use autopilot_parking::config::ServerConfig;
use autopilot_parking::db::{self, LocalRepository, LocationRepository};
use autopilot_parking::error::ConfigError;
use autopilot_parking::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting autopilot parking server");

    let config = ServerConfig::load().context("loading server configuration")?;
    let timezone = config.civil_timezone()?;
    info!(timezone = %timezone.name(), "civil clock configured");

    let repository = Arc::new(LocalRepository::new());
    if let Some(path) = &config.catalog.seed_path {
        db::seed_locations(repository.as_ref(), path)
            .await
            .map_err(|e| ConfigError::Seed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
    }
    info!(locations = repository.len(), "location catalog ready");

    let state = AppState::new(repository as Arc<dyn LocationRepository>, timezone);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
