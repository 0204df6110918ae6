//! # SurfsUp
//!
//! Read-only climate analysis over a historical dataset of daily precipitation
//! and temperature observations from multiple weather stations.
//!
//! ## Features
//!
//! - **Trailing-year precipitation**: anchored at the newest observation, not "now"
//! - **Station activity**: stations ranked by temperature observation count
//! - **Most active station**: trailing-year temperatures of the busiest station
//! - **Range statistics**: min/avg/max temperature over any date range
//!
//! ## Modules
//!
//! - [`storage`]: Data sources and the validated dataset snapshot
//! - [`query`]: Window resolution, aggregation and result shaping
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surfsup::query::{shape, QueryExecutor};
//! use surfsup::storage::{Dataset, SqliteSource};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load a snapshot and release the database
//!     let source = SqliteSource::open("Resources/hawaii.sqlite")?;
//!     let dataset = Arc::new(Dataset::load(&source)?);
//!     source.close()?;
//!
//!     let executor = QueryExecutor::new(dataset);
//!
//!     let ranking = executor.station_activity_ranking()?;
//!     for entry in shape::station_activity(&ranking) {
//!         println!("{}: {}", entry.station, entry.observation_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod query;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{
    CsvSource, DataSource, Dataset, DatasetStats, Measurement, MemorySource, SqliteSource,
    Station, StorageError, StorageResult,
};

pub use query::{
    DateRange, QueryError, QueryExecutor, QueryResult, StationActivity, TemperatureObservation,
    TemperatureStats, TemperatureSummary, TrailingWindow,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Backend, Config, ConfigError, DataConfig, LogFormat, LoggingConfig};
