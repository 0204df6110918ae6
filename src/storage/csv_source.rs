//! CSV data source
//!
//! Reads a pair of CSV files with headers:
//!
//! ```text
//! stations.csv:      station,name,latitude,longitude,elevation
//! measurements.csv:  station,date,prcp,tobs
//! ```
//!
//! Empty `prcp`/`tobs` cells are read as missing readings.

use crate::storage::{DataSource, Measurement, Station, StorageResult};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Data source backed by two CSV files
#[derive(Debug, Clone)]
pub struct CsvSource {
    stations_path: PathBuf,
    measurements_path: PathBuf,
}

impl CsvSource {
    pub fn new(stations_path: impl Into<PathBuf>, measurements_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            measurements_path: measurements_path.into(),
        }
    }

    fn read_all<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let records = reader
            .deserialize()
            .collect::<Result<Vec<T>, csv::Error>>()?;

        tracing::debug!("Read {} records from {:?}", records.len(), path);
        Ok(records)
    }
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn stations(&self) -> StorageResult<Vec<Station>> {
        Self::read_all(&self.stations_path)
    }

    fn measurements(&self) -> StorageResult<Vec<Measurement>> {
        Self::read_all(&self.measurements_path)
    }
}
