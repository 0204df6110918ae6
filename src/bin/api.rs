//! SurfsUp API Server
//!
//! Run with: cargo run --bin surfsup-api [-- path/to/config.toml]
//!
//! # Configuration
//!
//! Settings come from the config file given as the first argument, otherwise
//! from the default locations (see [`Config::load_default`]). Environment
//! variables override either:
//! - `SURFSUP_BACKEND`: sqlite or csv (default: sqlite)
//! - `SURFSUP_DATABASE`: SQLite path (default: Resources/hawaii.sqlite)
//! - `SURFSUP_STATIONS_CSV` / `SURFSUP_MEASUREMENTS_CSV`: CSV paths
//! - `SURFSUP_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SURFSUP_API_PORT`: Port to listen on (default: 5000)
//! - `SURFSUP_LOG_LEVEL` / `SURFSUP_LOG_FORMAT`: logging
//! - `RUST_LOG`: overrides the log filter entirely

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use surfsup::api::{serve, AppState};
use surfsup::config::Config;
use surfsup::query::QueryExecutor;
use surfsup::storage::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_with_env(&path)?,
        None => Config::load_default(),
    };

    surfsup::logging::init(&config.logging);

    tracing::info!("Starting SurfsUp API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data backend: {:?}", config.data.backend);

    // Open the data source, snapshot it, close it
    let dataset = Dataset::open(&config.data).context("failed to load climate dataset")?;
    if dataset.is_empty() {
        tracing::warn!("Dataset has no measurements; climate queries will fail");
    }

    let executor = Arc::new(QueryExecutor::new(Arc::new(dataset)));
    let state = AppState::new(executor, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("SurfsUp API server stopped");
    Ok(())
}
