//! Data Transfer Objects
//!
//! Response types owned by the HTTP layer. Query results use the records in
//! [`crate::query::shape`] directly.

use serde::{Deserialize, Serialize};

use crate::storage::DatasetStats;

/// Resource paths listed by the discovery endpoint
pub const AVAILABLE_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// Discovery response
#[derive(Debug, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub available_routes: Vec<String>,
}

impl Default for DiscoveryResponse {
    fn default() -> Self {
        Self {
            available_routes: AVAILABLE_ROUTES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Path parameters for temperature range queries
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    pub dataset: DatasetStats,
    pub uptime_seconds: u64,
    pub version: String,
}
