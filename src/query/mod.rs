//! SurfsUp Query Engine
//!
//! Read-only analytics over the climate dataset:
//!
//! - **window**: trailing-year window and caller date ranges
//! - **executor**: the four aggregate queries
//! - **shape**: conversion into response records
//!
//! # Queries
//!
//! ```text
//! precipitation  → trailing-year {date: prcp}
//! stations       → stations by temperature observation count
//! tobs           → trailing-year temperatures of the most active station
//! <start>[/<end>] → TMIN / TAVG / TMAX over a date range
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use surfsup::query::{shape, DateRange, QueryExecutor};
//!
//! let executor = QueryExecutor::new(dataset);
//! let range = DateRange::new("2017-01-01", Some("2017-01-31".to_string()));
//! let stats = executor.temperature_range(&range)?;
//! let summary = shape::temperature_summary(&range, &stats);
//! ```

mod error;
mod executor;
pub mod shape;
mod window;

pub use error::{QueryError, QueryResult};
pub use executor::{QueryExecutor, StationObservations, TemperatureStats};
pub use shape::{
    PrecipitationMap, StationActivity, TemperatureObservation, TemperatureSummary,
};
pub use window::{
    most_recent_date, trailing_year_start, DateRange, TrailingWindow, TRAILING_WINDOW_DAYS,
};
