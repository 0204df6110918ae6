//! Result shaping
//!
//! Converts executor output into the documented response shapes:
//!
//! - precipitation → `{date: prcp}` mapping
//! - ranking → `[{station, observation_count}]`
//! - observations → `[{date, temperature}]`
//! - range stats → `{start_date, end_date?, TMIN, TAVG, TMAX}`
//!
//! Sequence order from the executor is preserved.

use crate::query::executor::{StationObservations, TemperatureStats};
use crate::query::window::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Precipitation keyed by date
pub type PrecipitationMap = BTreeMap<String, f64>;

/// One entry of the station ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: usize,
}

/// One temperature reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureObservation {
    pub date: String,
    pub temperature: f64,
}

/// Temperature statistics over a date range
///
/// `end_date` is left out of the serialized record entirely when the range
/// was open-ended. Aggregates serialize as `null` when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureSummary {
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

/// Collapse a precipitation series into one value per date
///
/// When several stations report the same date, the last one in series order
/// wins.
pub fn precipitation_map(series: &[(String, f64)]) -> PrecipitationMap {
    series
        .iter()
        .map(|(date, prcp)| (date.clone(), *prcp))
        .collect()
}

pub fn station_activity(ranking: &[(String, usize)]) -> Vec<StationActivity> {
    ranking
        .iter()
        .map(|(station, count)| StationActivity {
            station: station.clone(),
            observation_count: *count,
        })
        .collect()
}

pub fn temperature_observations(result: &StationObservations) -> Vec<TemperatureObservation> {
    result
        .observations
        .iter()
        .map(|(date, temperature)| TemperatureObservation {
            date: date.clone(),
            temperature: *temperature,
        })
        .collect()
}

/// Build the range record, rounding the average to two decimals
pub fn temperature_summary(range: &DateRange, stats: &TemperatureStats) -> TemperatureSummary {
    TemperatureSummary {
        start_date: range.start().to_string(),
        end_date: range.end().map(str::to_string),
        tmin: stats.min,
        tavg: stats.avg.map(round2),
        tmax: stats.max,
    }
}

/// Two decimals, ties to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::window::TrailingWindow;
    use serde_json::json;

    #[test]
    fn test_precipitation_map() {
        let series = vec![
            ("2017-08-20".to_string(), 0.05),
            ("2017-08-23".to_string(), 0.10),
        ];
        let map = precipitation_map(&series);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({"2017-08-20": 0.05, "2017-08-23": 0.10})
        );
    }

    #[test]
    fn test_precipitation_map_duplicate_date_last_wins() {
        let series = vec![
            ("2017-08-22".to_string(), 0.1),
            ("2017-08-23".to_string(), 0.4),
            ("2017-08-23".to_string(), 0.2),
        ];
        let map = precipitation_map(&series);
        assert_eq!(map.len(), 2);
        assert_eq!(map["2017-08-23"], 0.2);
    }

    #[test]
    fn test_station_activity_preserves_order() {
        let ranking = vec![("S2".to_string(), 9), ("S1".to_string(), 4)];
        let shaped = station_activity(&ranking);
        assert_eq!(
            serde_json::to_value(&shaped).unwrap(),
            json!([
                {"station": "S2", "observation_count": 9},
                {"station": "S1", "observation_count": 4}
            ])
        );
    }

    #[test]
    fn test_temperature_observations() {
        let result = StationObservations {
            station: "S1".to_string(),
            window: TrailingWindow {
                anchor: "2017-08-23".to_string(),
                start: "2016-08-23".to_string(),
            },
            observations: vec![("2016-08-23".to_string(), 77.0)],
        };
        let shaped = temperature_observations(&result);
        assert_eq!(
            serde_json::to_value(&shaped).unwrap(),
            json!([{"date": "2016-08-23", "temperature": 77.0}])
        );
    }

    #[test]
    fn test_temperature_summary_bounded() {
        let range = DateRange::new("2017-01-01", Some("2017-01-02".to_string()));
        let stats = TemperatureStats {
            min: Some(60.0),
            avg: Some(61.0),
            max: Some(62.0),
            count: 2,
        };
        let value = serde_json::to_value(temperature_summary(&range, &stats)).unwrap();
        assert_eq!(
            value,
            json!({
                "start_date": "2017-01-01",
                "end_date": "2017-01-02",
                "TMIN": 60.0,
                "TAVG": 61.0,
                "TMAX": 62.0
            })
        );
    }

    #[test]
    fn test_temperature_summary_rounds_ties_to_even() {
        let range = DateRange::new("2017-01-01", None);
        let stats = TemperatureStats {
            min: Some(65.0),
            avg: Some(577.0 / 8.0),
            max: Some(79.0),
            count: 8,
        };
        assert_eq!(temperature_summary(&range, &stats).tavg, Some(72.12));

        let stats = TemperatureStats {
            avg: Some(579.0 / 8.0),
            ..stats
        };
        assert_eq!(temperature_summary(&range, &stats).tavg, Some(72.38));
    }

    #[test]
    fn test_temperature_summary_open_ended_omits_end_date() {
        let range = DateRange::new("2017-01-01", None);
        let stats = TemperatureStats {
            min: Some(56.0),
            avg: Some(72.123456),
            max: Some(87.0),
            count: 10,
        };
        let value = serde_json::to_value(temperature_summary(&range, &stats)).unwrap();
        assert!(value.get("end_date").is_none());
        assert_eq!(value["TAVG"], json!(72.12));
    }

    #[test]
    fn test_temperature_summary_no_rows_is_null() {
        let range = DateRange::new("2030-01-01", None);
        let value =
            serde_json::to_value(temperature_summary(&range, &TemperatureStats::default()))
                .unwrap();
        assert_eq!(
            value,
            json!({"start_date": "2030-01-01", "TMIN": null, "TAVG": null, "TMAX": null})
        );
    }
}
