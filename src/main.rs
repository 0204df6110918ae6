//! SurfsUp CLI
//!
//! Command-line interface for running climate queries without the server:
//! - Trailing-year precipitation
//! - Station activity ranking
//! - Most active station temperatures
//! - Temperature statistics over a date range

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use surfsup::config::{generate_default_config, Backend, Config};
use surfsup::query::{shape, DateRange, QueryExecutor};
use surfsup::storage::{parse_date, Dataset};

#[derive(Parser)]
#[command(name = "surfsup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query historical station precipitation and temperature data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database, overrides the configured data source
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trailing-year precipitation by date
    Precipitation,

    /// Stations ranked by temperature observation count
    Stations,

    /// Trailing-year temperatures of the most active station
    Tobs,

    /// Min/avg/max temperature from START (through END if given)
    Range {
        /// First date, YYYY-MM-DD
        start: String,
        /// Last date, YYYY-MM-DD
        end: Option<String>,
    },

    /// Show dataset summary
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { output: target } => write_config(target),
        command => run(command, cli.config, cli.database, cli.format),
    }
}

fn write_config(target: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match target {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn run(
    command: Commands,
    config_path: Option<PathBuf>,
    database: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(db) = &database {
        config.data.backend = Backend::Sqlite;
        config.data.sqlite_path = db.to_string_lossy().to_string();
    }

    surfsup::logging::init(&config.logging);

    let dataset = Dataset::open(&config.data).context("failed to load climate dataset")?;
    let executor = QueryExecutor::new(Arc::new(dataset));

    match command {
        Commands::Precipitation => {
            let series = executor.precipitation_series()?;
            let map = shape::precipitation_map(&series);
            output(format, &map, || {
                println!("{:<12} {:>8}", "DATE", "PRCP");
                for (date, prcp) in &map {
                    println!("{:<12} {:>8.2}", date, prcp);
                }
            })?;
        }

        Commands::Stations => {
            let ranking = shape::station_activity(&executor.station_activity_ranking()?);
            output(format, &ranking, || {
                println!("{:<14} {:>12}", "STATION", "OBSERVATIONS");
                for entry in &ranking {
                    println!("{:<14} {:>12}", entry.station, entry.observation_count);
                }
            })?;
        }

        Commands::Tobs => {
            let result = executor.most_active_station_observations()?;
            let observations = shape::temperature_observations(&result);
            output(format, &observations, || {
                println!(
                    "Most active station {} since {}",
                    result.station, result.window.start
                );
                println!("{:<12} {:>8}", "DATE", "TOBS");
                for obs in &observations {
                    println!("{:<12} {:>8.1}", obs.date, obs.temperature);
                }
            })?;
        }

        Commands::Range { start, end } => {
            for date in std::iter::once(&start).chain(end.iter()) {
                if parse_date(date).is_none() {
                    anyhow::bail!("invalid date {:?}, expected YYYY-MM-DD", date);
                }
            }

            let range = DateRange::new(start, end);
            let stats = executor.temperature_range(&range)?;
            let summary = shape::temperature_summary(&range, &stats);
            output(format, &summary, || {
                println!("Range: {}", range);
                println!("TMIN: {}", fmt_opt(summary.tmin));
                println!("TAVG: {}", fmt_opt(summary.tavg));
                println!("TMAX: {}", fmt_opt(summary.tmax));
            })?;
        }

        Commands::Summary => {
            let stats = executor.dataset().stats();
            output(format, &stats, || println!("{}", stats))?;
        }

        Commands::Config { .. } => write_config(None)?,
    }

    Ok(())
}

/// Print `value` as JSON, or run the table printer
fn output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => table(),
    }
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}
