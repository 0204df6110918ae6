//! Core record types for the climate dataset
//!
//! - `Station`: reference data for one weather station
//! - `Measurement`: one daily observation reported by a station
//!
//! Both are read-only snapshots; nothing in this crate creates or mutates them
//! after they are loaded from a [`DataSource`](crate::storage::DataSource).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by every measurement (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A weather station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Unique station identifier (e.g. "USC00519281")
    pub station: String,
    /// Human readable station name
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in feet
    pub elevation: f64,
}

impl Station {
    /// Create a station with zeroed coordinates
    pub fn new(station: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            elevation: 0.0,
        }
    }

    /// Builder method: set coordinates and elevation
    pub fn located(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
        self
    }
}

/// A single daily observation
///
/// `prcp` is `None` when the station recorded no precipitation reading that
/// day. That is "no reading", not zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Station identifier, references [`Station::station`]
    pub station: String,
    /// Observation date as `YYYY-MM-DD`
    pub date: String,
    /// Precipitation in inches
    pub prcp: Option<f64>,
    /// Temperature observation in degrees Fahrenheit
    pub tobs: Option<f64>,
}

impl Measurement {
    /// Create a measurement with no readings
    pub fn new(station: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            date: date.into(),
            prcp: None,
            tobs: None,
        }
    }

    /// Builder method: set precipitation
    pub fn prcp(mut self, prcp: f64) -> Self {
        self.prcp = Some(prcp);
        self
    }

    /// Builder method: set temperature
    pub fn tobs(mut self, tobs: f64) -> Self {
        self.tobs = Some(tobs);
        self
    }
}

/// Parse a strict `YYYY-MM-DD` date
///
/// Rejects anything that would not sort the same way lexicographically and
/// chronologically, such as "2017-8-1".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
