//! Query error types
//!
//! Defines all error conditions that can occur while answering a climate query.
//! An empty result for a date range is not an error; it is reported as absent
//! aggregates.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// There are no measurements at all, so no "most recent date" exists
    #[error("Dataset contains no measurements")]
    EmptyDataset,

    /// A date could not be interpreted as `YYYY-MM-DD`
    #[error("Malformed date: {0}")]
    MalformedDate(String),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
