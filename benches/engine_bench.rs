//! Benchmarks for the SurfsUp query executor
//!
//! Run with: cargo bench

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use surfsup::query::{DateRange, QueryExecutor};
use surfsup::storage::{format_date, Dataset, Measurement, MemorySource, Station};

/// Roughly the shape of the Hawaii dataset: 9 stations, ~7 years of daily rows
fn create_executor(stations: usize, days: u64) -> QueryExecutor {
    let first = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let mut source = MemorySource::default();

    for s in 0..stations {
        let id = format!("USC00{:06}", s);
        source = source.station(Station::new(id.as_str(), format!("Station {}", s)));

        for d in 0..days {
            // Sparser stations report less often
            if d % (s as u64 + 1) != 0 {
                continue;
            }
            let date = format_date(first + Days::new(d));
            let mut m = Measurement::new(id.as_str(), date).tobs(60.0 + (d % 25) as f64);
            if d % 3 != 0 {
                m = m.prcp((d % 7) as f64 * 0.1);
            }
            source = source.measurement(m);
        }
    }

    let dataset = Dataset::load(&source).unwrap();
    QueryExecutor::new(Arc::new(dataset))
}

fn bench_queries(c: &mut Criterion) {
    let executor = create_executor(9, 2_600);
    let rows = executor.dataset().measurements().len() as u64;

    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(rows));

    group.bench_function("precipitation_series", |b| {
        b.iter(|| executor.precipitation_series().unwrap())
    });

    group.bench_function("station_activity_ranking", |b| {
        b.iter(|| executor.station_activity_ranking().unwrap())
    });

    group.bench_function("most_active_station_observations", |b| {
        b.iter(|| executor.most_active_station_observations().unwrap())
    });

    let bounded = DateRange::new("2016-01-01", Some("2016-12-31".to_string()));
    group.bench_function("temperature_range_bounded", |b| {
        b.iter(|| executor.temperature_range(black_box(&bounded)).unwrap())
    });

    let open = DateRange::new("2010-01-01", None);
    group.bench_function("temperature_range_open", |b| {
        b.iter(|| executor.temperature_range(black_box(&open)).unwrap())
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("dataset_load_9x2600", |b| {
        b.iter(|| create_executor(black_box(9), black_box(2_600)))
    });
}

criterion_group!(benches, bench_queries, bench_load);
criterion_main!(benches);
