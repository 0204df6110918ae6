//! Climate Routes
//!
//! - GET / - Discovery (lists available routes)
//! - GET /api/v1.0/precipitation - Trailing-year precipitation by date
//! - GET /api/v1.0/stations - Stations ranked by observation count
//! - GET /api/v1.0/tobs - Trailing-year temperatures of the most active station
//! - GET /api/v1.0/:start - Temperature stats from `start` onward
//! - GET /api/v1.0/:start/:end - Temperature stats between `start` and `end`

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DiscoveryResponse, RangeParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::query::{
    shape, DateRange, PrecipitationMap, StationActivity, TemperatureObservation,
    TemperatureSummary,
};
use crate::storage::parse_date;

/// GET /
pub async fn home() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse::default())
}

/// GET /api/v1.0/precipitation
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PrecipitationMap>> {
    let series = state.executor.precipitation_series()?;
    Ok(Json(shape::precipitation_map(&series)))
}

/// GET /api/v1.0/stations
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<StationActivity>>> {
    let ranking = state.executor.station_activity_ranking()?;
    Ok(Json(shape::station_activity(&ranking)))
}

/// GET /api/v1.0/tobs
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TemperatureObservation>>> {
    let result = state.executor.most_active_station_observations()?;
    tracing::debug!(station = %result.station, "Serving most active station temperatures");
    Ok(Json(shape::temperature_observations(&result)))
}

/// GET /api/v1.0/:start and /api/v1.0/:start/:end
///
/// One handler for both routes; a missing `end` means open-ended.
pub async fn temperature_range(
    State(state): State<Arc<AppState>>,
    Path(params): Path<RangeParams>,
) -> ApiResult<Json<TemperatureSummary>> {
    let range = parse_range(params)?;
    let stats = state.executor.temperature_range(&range)?;
    Ok(Json(shape::temperature_summary(&range, &stats)))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Validate path dates and build the range
fn parse_range(params: RangeParams) -> ApiResult<DateRange> {
    validate_date("start", &params.start)?;
    if let Some(ref end) = params.end {
        validate_date("end", end)?;
    }
    Ok(DateRange::new(params.start, params.end))
}

fn validate_date(field: &str, value: &str) -> ApiResult<()> {
    if parse_date(value).is_none() {
        return Err(ApiError::Validation(format!(
            "Invalid {} date {:?}, expected YYYY-MM-DD",
            field, value
        )));
    }
    Ok(())
}
