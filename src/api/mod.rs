//! SurfsUp REST API
//!
//! HTTP API layer for SurfsUp, built with Axum.
//!
//! # Endpoints
//!
//! ## Discovery
//! - `GET /` - List available routes
//!
//! ## Climate
//! - `GET /api/v1.0/precipitation` - Trailing-year precipitation `{date: prcp}`
//! - `GET /api/v1.0/stations` - Stations by temperature observation count
//! - `GET /api/v1.0/tobs` - Trailing-year temperatures of the most active station
//! - `GET /api/v1.0/:start` - `TMIN`/`TAVG`/`TMAX` from `start` onward
//! - `GET /api/v1.0/:start/:end` - `TMIN`/`TAVG`/`TMAX` between two dates
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use surfsup::api::{serve, AppState};
//! use surfsup::config::ApiConfig;
//! use surfsup::query::QueryExecutor;
//! use surfsup::storage::{Dataset, SqliteSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SqliteSource::open("Resources/hawaii.sqlite")?;
//!     let dataset = Arc::new(Dataset::load(&source)?);
//!     source.close()?;
//!
//!     let executor = Arc::new(QueryExecutor::new(dataset));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(executor, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(routes::climate::precipitation))
        .route("/stations", get(routes::climate::stations))
        .route("/tobs", get(routes::climate::tobs))
        // Same handler, optional trailing segment
        .route("/:start", get(routes::climate::temperature_range))
        .route("/:start/:end", get(routes::climate::temperature_range));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::climate::home))
        .nest("/api/v1.0", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::climate::not_found)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SurfsUp API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SurfsUp API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
