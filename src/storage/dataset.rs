//! Validated, immutable dataset snapshot
//!
//! `Dataset::load` performs the one bulk read against a [`DataSource`] and
//! checks the invariants every query relies on:
//!
//! - station identifiers are unique
//! - every measurement references a known station
//! - every measurement date is a strict `YYYY-MM-DD` calendar date, so string
//!   order and calendar order agree
//!
//! A dangling station reference fails the load instead of silently shrinking
//! join results later.

use crate::config::{Backend, DataConfig};
use crate::storage::types::parse_date;
use crate::storage::{
    CsvSource, DataSource, Measurement, SqliteSource, Station, StorageError, StorageResult,
};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// Read-only snapshot of stations and measurements
#[derive(Debug, Clone)]
pub struct Dataset {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    /// station id -> position in `stations`
    station_positions: HashMap<String, usize>,
}

/// Summary of a loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetStats {
    pub station_count: usize,
    pub measurement_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl std::fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} stations, {} measurements",
            self.station_count, self.measurement_count
        )?;
        if let (Some(first), Some(last)) = (&self.first_date, &self.last_date) {
            write!(f, " ({} to {})", first, last)?;
        }
        Ok(())
    }
}

impl Dataset {
    /// Load and validate a snapshot from a data source
    pub fn load(source: &dyn DataSource) -> StorageResult<Self> {
        let start = Instant::now();

        let stations = source.stations()?;
        let measurements = source.measurements()?;
        let dataset = Self::from_records(stations, measurements)?;

        tracing::info!(
            source = source.name(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded dataset: {}",
            dataset.stats()
        );

        Ok(dataset)
    }

    /// Open the configured backend, load a snapshot and close the backend
    pub fn open(config: &DataConfig) -> StorageResult<Self> {
        match config.backend {
            Backend::Sqlite => {
                let source = SqliteSource::open(&config.sqlite_path)?;
                let dataset = Self::load(&source)?;
                tracing::info!("Snapshot taken from {:?}, closing connection", source.path());
                source.close()?;
                Ok(dataset)
            }
            Backend::Csv => {
                let source = CsvSource::new(&config.stations_csv, &config.measurements_csv);
                Self::load(&source)
            }
        }
    }

    /// Validate records that are already in memory
    pub fn from_records(
        stations: Vec<Station>,
        measurements: Vec<Measurement>,
    ) -> StorageResult<Self> {
        let mut station_positions = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            if station_positions
                .insert(station.station.clone(), idx)
                .is_some()
            {
                return Err(StorageError::DuplicateStation(station.station.clone()));
            }
        }

        for (row, m) in measurements.iter().enumerate() {
            if !station_positions.contains_key(&m.station) {
                return Err(StorageError::ReferentialIntegrity {
                    station: m.station.clone(),
                    row,
                });
            }
            if parse_date(&m.date).is_none() {
                return Err(StorageError::InvalidDate {
                    date: m.date.clone(),
                    row,
                });
            }
        }

        Ok(Self {
            stations,
            measurements,
            station_positions,
        })
    }

    /// All stations in source order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All measurements in source order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Look up a station by identifier
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.station_positions.get(id).map(|&idx| &self.stations[idx])
    }

    /// Position of a station in source order
    pub fn station_position(&self, id: &str) -> Option<usize> {
        self.station_positions.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        let first_date = self.measurements.iter().map(|m| &m.date).min().cloned();
        let last_date = self.measurements.iter().map(|m| &m.date).max().cloned();

        DatasetStats {
            station_count: self.stations.len(),
            measurement_count: self.measurements.len(),
            first_date,
            last_date,
        }
    }
}
