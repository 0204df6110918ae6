//! Storage layer error types
//!
//! Defines all errors that can occur while reading the climate dataset.

use thiserror::Error;

/// Errors that can occur while loading data from a data source
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite query or connection failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// CSV parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A measurement references a station that does not exist
    #[error("Referential integrity error: measurement row {row} references unknown station {station}")]
    ReferentialIntegrity { station: String, row: usize },

    /// Two stations share an identifier
    #[error("Duplicate station identifier: {0}")]
    DuplicateStation(String),

    /// A measurement date is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date {date:?} in measurement row {row}")]
    InvalidDate { date: String, row: usize },

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::ReferentialIntegrity {
            station: "USC00000000".to_string(),
            row: 3,
        };
        assert_eq!(
            err.to_string(),
            "Referential integrity error: measurement row 3 references unknown station USC00000000"
        );

        let err = StorageError::DuplicateStation("USC00519281".to_string());
        assert_eq!(err.to_string(), "Duplicate station identifier: USC00519281");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let storage_err: StorageError = io_err.into();
        assert!(matches!(storage_err, StorageError::Io(_)));
    }
}
