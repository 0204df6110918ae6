//! In-memory data source
//!
//! Holds records directly. Used by tests, benchmarks and anything that
//! already has the rows at hand.

use crate::storage::{DataSource, Measurement, Station, StorageResult};

/// Data source backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl MemorySource {
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    /// Builder method: add a station
    pub fn station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Builder method: add a measurement
    pub fn measurement(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn stations(&self) -> StorageResult<Vec<Station>> {
        Ok(self.stations.clone())
    }

    fn measurements(&self) -> StorageResult<Vec<Measurement>> {
        Ok(self.measurements.clone())
    }
}
