//! Query Executor
//!
//! Answers the four climate queries against a loaded [`Dataset`]:
//!
//! 1. Precipitation over the trailing year
//! 2. Stations ranked by temperature observation count
//! 3. Trailing-year temperatures of the most active station
//! 4. Min/avg/max temperature over a caller supplied range
//!
//! # Execution Pipeline
//!
//! ```text
//! Dataset → Window → Filter → Group/Aggregate → Order → Result
//! ```
//!
//! Every call is stateless and only reads the shared snapshot, so one executor
//! can serve any number of concurrent requests.

use crate::query::error::{QueryError, QueryResult};
use crate::query::window::{DateRange, TrailingWindow};
use crate::storage::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Temperature observations of one station inside the trailing window
#[derive(Debug, Clone, PartialEq)]
pub struct StationObservations {
    /// The most active station
    pub station: String,
    /// Window the observations were filtered to
    pub window: TrailingWindow,
    /// `(date, temperature)` ascending by date
    pub observations: Vec<(String, f64)>,
}

/// Raw temperature aggregates; `None` when no rows matched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
    /// Number of temperature readings aggregated
    pub count: usize,
}

/// Query executor
pub struct QueryExecutor {
    /// Shared read-only snapshot
    dataset: Arc<Dataset>,
}

impl QueryExecutor {
    /// Create a new query executor
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Trailing window anchored at the newest observation
    pub fn trailing_window(&self) -> QueryResult<TrailingWindow> {
        TrailingWindow::resolve(&self.dataset)
    }

    /// Trailing-year precipitation readings, ascending by date
    ///
    /// Rows without a precipitation reading are skipped. Several stations
    /// reporting the same day each keep their own entry.
    pub fn precipitation_series(&self) -> QueryResult<Vec<(String, f64)>> {
        let start = Instant::now();
        let window = self.trailing_window()?;

        let mut series: Vec<(String, f64)> = self
            .dataset
            .measurements()
            .iter()
            .filter(|m| window.contains(&m.date))
            .filter_map(|m| m.prcp.map(|prcp| (m.date.clone(), prcp)))
            .collect();

        // Stable: same-day rows keep source order
        series.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(
            window_start = %window.start,
            rows = series.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Precipitation series computed"
        );

        Ok(series)
    }

    /// Stations ordered by temperature observation count, descending
    ///
    /// Only stations with at least one measurement are listed. Readings with no
    /// temperature do not count, so such a station may appear with zero. Ties
    /// keep station table order.
    pub fn station_activity_ranking(&self) -> QueryResult<Vec<(String, usize)>> {
        let start = Instant::now();
        let dataset = self.non_empty()?;
        let stations = dataset.stations();

        // Indexed by station position; None means no joined measurement
        let mut counts: Vec<Option<usize>> = vec![None; stations.len()];
        for m in dataset.measurements() {
            let Some(pos) = dataset.station_position(&m.station) else {
                continue;
            };
            let count = counts[pos].get_or_insert(0);
            if m.tobs.is_some() {
                *count += 1;
            }
        }

        let mut ranking: Vec<(String, usize)> = counts
            .into_iter()
            .enumerate()
            .filter_map(|(pos, count)| count.map(|c| (stations[pos].station.clone(), c)))
            .collect();

        ranking.sort_by(|a, b| b.1.cmp(&a.1));

        tracing::debug!(
            stations = ranking.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Station activity ranking computed"
        );

        Ok(ranking)
    }

    /// Identifier of the station with the most temperature observations
    pub fn most_active_station(&self) -> QueryResult<String> {
        self.station_activity_ranking()?
            .into_iter()
            .next()
            .map(|(station, _)| station)
            .ok_or(QueryError::EmptyDataset)
    }

    /// Trailing-year temperatures of the most active station
    pub fn most_active_station_observations(&self) -> QueryResult<StationObservations> {
        let start = Instant::now();
        let station = self.most_active_station()?;
        let window = self.trailing_window()?;

        let mut observations: Vec<(String, f64)> = self
            .dataset
            .measurements()
            .iter()
            .filter(|m| m.station == station && window.contains(&m.date))
            .filter_map(|m| m.tobs.map(|tobs| (m.date.clone(), tobs)))
            .collect();

        observations.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(
            station = %station,
            window_start = %window.start,
            rows = observations.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Most active station observations computed"
        );

        Ok(StationObservations {
            station,
            window,
            observations,
        })
    }

    /// Min, average and max temperature inside `range`
    ///
    /// A range that matches nothing is a normal result with every aggregate
    /// absent.
    pub fn temperature_range(&self, range: &DateRange) -> QueryResult<TemperatureStats> {
        let start = Instant::now();
        let dataset = self.non_empty()?;

        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;
        let mut sum = 0.0;
        let mut count = 0usize;

        let temperatures = dataset
            .measurements()
            .iter()
            .filter(|m| range.contains(&m.date))
            .filter_map(|m| m.tobs);

        for t in temperatures {
            min = Some(min.map_or(t, |cur| cur.min(t)));
            max = Some(max.map_or(t, |cur| cur.max(t)));
            sum += t;
            count += 1;
        }

        let avg = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        tracing::debug!(
            range = %range,
            rows = count,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Temperature range computed"
        );

        Ok(TemperatureStats {
            min,
            avg,
            max,
            count,
        })
    }

    fn non_empty(&self) -> QueryResult<&Dataset> {
        if self.dataset.is_empty() {
            return Err(QueryError::EmptyDataset);
        }
        Ok(&self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Measurement, Station};

    fn executor(stations: &[&str], measurements: Vec<Measurement>) -> QueryExecutor {
        let stations = stations.iter().map(|s| Station::new(*s, *s)).collect();
        let dataset = Dataset::from_records(stations, measurements).unwrap();
        QueryExecutor::new(Arc::new(dataset))
    }

    fn sample() -> QueryExecutor {
        executor(
            &["S1", "S2", "S3"],
            vec![
                Measurement::new("S1", "2016-08-22").prcp(1.0).tobs(70.0),
                Measurement::new("S1", "2016-08-23").prcp(0.5).tobs(71.0),
                Measurement::new("S2", "2017-01-01").prcp(0.2).tobs(65.0),
                Measurement::new("S2", "2017-01-02").tobs(66.0),
                Measurement::new("S2", "2017-08-23").prcp(0.0).tobs(80.0),
                Measurement::new("S1", "2017-08-20").prcp(0.3).tobs(79.0),
                Measurement::new("S2", "2017-05-05").prcp(0.1),
                Measurement::new("S2", "2017-06-01").tobs(75.0),
            ],
        )
    }

    #[test]
    fn test_precipitation_excludes_null_readings() {
        let exec = executor(
            &["S1"],
            vec![
                Measurement::new("S1", "2017-08-20").prcp(0.05),
                Measurement::new("S1", "2017-08-22"),
                Measurement::new("S1", "2017-08-23").prcp(0.10),
            ],
        );

        let series = exec.precipitation_series().unwrap();
        assert_eq!(
            series,
            vec![
                ("2017-08-20".to_string(), 0.05),
                ("2017-08-23".to_string(), 0.10)
            ]
        );
    }

    #[test]
    fn test_precipitation_window_and_order() {
        let exec = sample();
        let series = exec.precipitation_series().unwrap();

        let dates: Vec<&str> = series.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2016-08-23", "2017-01-01", "2017-05-05", "2017-08-20", "2017-08-23"]
        );
        assert!(series.iter().all(|(d, _)| d.as_str() >= "2016-08-23"));
    }

    #[test]
    fn test_precipitation_keeps_duplicate_dates() {
        let exec = executor(
            &["S1", "S2"],
            vec![
                Measurement::new("S2", "2017-08-23").prcp(0.4),
                Measurement::new("S1", "2017-08-22").prcp(0.1),
                Measurement::new("S1", "2017-08-23").prcp(0.2),
            ],
        );

        let series = exec.precipitation_series().unwrap();
        assert_eq!(
            series,
            vec![
                ("2017-08-22".to_string(), 0.1),
                ("2017-08-23".to_string(), 0.4),
                ("2017-08-23".to_string(), 0.2),
            ]
        );
    }

    #[test]
    fn test_station_ranking() {
        let exec = sample();
        let ranking = exec.station_activity_ranking().unwrap();

        // S2 has 5 rows but only 4 temperatures; S3 has no measurements
        assert_eq!(
            ranking,
            vec![("S2".to_string(), 4), ("S1".to_string(), 3)]
        );

        let total_temps = exec
            .dataset()
            .measurements()
            .iter()
            .filter(|m| m.tobs.is_some())
            .count();
        assert_eq!(ranking.iter().map(|(_, c)| c).sum::<usize>(), total_temps);
        assert!(ranking.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_station_ranking_ties_keep_station_order() {
        let exec = executor(
            &["B", "A", "C"],
            vec![
                Measurement::new("C", "2017-01-01").tobs(1.0),
                Measurement::new("A", "2017-01-01").tobs(1.0),
                Measurement::new("B", "2017-01-01").tobs(1.0),
                Measurement::new("C", "2017-01-02"),
            ],
        );

        let ranking = exec.station_activity_ranking().unwrap();
        let ids: Vec<&str> = ranking.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(exec.most_active_station().unwrap(), "B");
    }

    #[test]
    fn test_station_without_temperatures_counts_zero() {
        let exec = executor(
            &["S1", "S2"],
            vec![
                Measurement::new("S1", "2017-01-01").tobs(70.0),
                Measurement::new("S2", "2017-01-01").prcp(0.3),
            ],
        );

        let ranking = exec.station_activity_ranking().unwrap();
        assert_eq!(ranking, vec![("S1".to_string(), 1), ("S2".to_string(), 0)]);
    }

    #[test]
    fn test_most_active_station_observations() {
        let exec = sample();
        let result = exec.most_active_station_observations().unwrap();

        let ranking = exec.station_activity_ranking().unwrap();
        assert_eq!(result.station, ranking[0].0);
        assert_eq!(result.window.start, "2016-08-23");
        assert_eq!(
            result.observations,
            vec![
                ("2017-01-01".to_string(), 65.0),
                ("2017-01-02".to_string(), 66.0),
                ("2017-06-01".to_string(), 75.0),
                ("2017-08-23".to_string(), 80.0),
            ]
        );
        assert!(result
            .observations
            .iter()
            .all(|(d, _)| result.window.contains(d)));
    }

    #[test]
    fn test_most_active_observations_drop_rows_before_window() {
        let exec = executor(
            &["S1", "S2"],
            vec![
                Measurement::new("S2", "2015-01-01").tobs(50.0),
                Measurement::new("S2", "2016-08-22").tobs(68.0),
                Measurement::new("S2", "2016-08-23").tobs(69.0),
                Measurement::new("S2", "2017-08-23").tobs(80.0),
                Measurement::new("S1", "2017-08-20").tobs(79.0),
            ],
        );

        let result = exec.most_active_station_observations().unwrap();
        assert_eq!(result.station, "S2");
        assert_eq!(result.window.start, "2016-08-23");
        assert_eq!(
            result.observations,
            vec![
                ("2016-08-23".to_string(), 69.0),
                ("2017-08-23".to_string(), 80.0),
            ]
        );
    }

    #[test]
    fn test_temperature_range_bounded() {
        let exec = executor(
            &["S1"],
            vec![
                Measurement::new("S1", "2017-01-01").tobs(60.0),
                Measurement::new("S1", "2017-01-02").tobs(62.0),
                Measurement::new("S1", "2017-01-03").tobs(90.0),
            ],
        );

        let range = DateRange::new("2017-01-01", Some("2017-01-02".to_string()));
        let stats = exec.temperature_range(&range).unwrap();
        assert_eq!(stats.min, Some(60.0));
        assert_eq!(stats.avg, Some(61.0));
        assert_eq!(stats.max, Some(62.0));
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_temperature_range_open_ended_matches_full_set() {
        let exec = sample();

        let full = exec
            .temperature_range(&DateRange::new("0000-00-00", None))
            .unwrap();
        let from_first = exec
            .temperature_range(&DateRange::new("2016-08-22", None))
            .unwrap();

        assert_eq!(full, from_first);
        assert_eq!(full.min, Some(65.0));
        assert_eq!(full.max, Some(80.0));
        assert_eq!(full.count, 7);
    }

    #[test]
    fn test_temperature_range_no_rows() {
        let exec = sample();
        let stats = exec
            .temperature_range(&DateRange::new("2030-01-01", None))
            .unwrap();
        assert_eq!(stats, TemperatureStats::default());

        // Inverted bounds match nothing rather than failing
        let inverted = DateRange::new("2017-08-23", Some("2017-01-01".to_string()));
        assert_eq!(exec.temperature_range(&inverted).unwrap().count, 0);
    }

    #[test]
    fn test_empty_dataset_fails_every_query() {
        let exec = executor(&["S1"], Vec::new());

        assert!(matches!(
            exec.precipitation_series(),
            Err(QueryError::EmptyDataset)
        ));
        assert!(matches!(
            exec.station_activity_ranking(),
            Err(QueryError::EmptyDataset)
        ));
        assert!(matches!(
            exec.most_active_station_observations(),
            Err(QueryError::EmptyDataset)
        ));
        assert!(matches!(
            exec.temperature_range(&DateRange::new("2017-01-01", None)),
            Err(QueryError::EmptyDataset)
        ));
    }
}
