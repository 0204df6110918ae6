//! SurfsUp Storage Layer
//!
//! Read-only access to the climate dataset:
//!
//! - **types**: `Station` and `Measurement` records
//! - **source**: the `DataSource` trait (bulk scans)
//! - **sqlite**: SQLite backend (`hawaii.sqlite` layout)
//! - **csv_source**: CSV file pair backend
//! - **memory**: in-memory backend
//! - **dataset**: validated immutable snapshot
//! - **error**: error types
//!
//! # Lifecycle
//!
//! ```text
//! open source → Dataset::load (scan + validate) → close source → share Arc<Dataset>
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use surfsup::storage::{Dataset, SqliteSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SqliteSource::open("Resources/hawaii.sqlite")?;
//!     let dataset = Dataset::load(&source)?;
//!     source.close()?;
//!
//!     println!("{}", dataset.stats());
//!     Ok(())
//! }
//! ```

pub mod csv_source;
pub mod dataset;
pub mod error;
pub mod memory;
pub mod source;
pub mod sqlite;
pub mod types;

pub use csv_source::CsvSource;
pub use dataset::{Dataset, DatasetStats};
pub use error::{StorageError, StorageResult};
pub use memory::MemorySource;
pub use source::DataSource;
pub use sqlite::SqliteSource;
pub use types::{format_date, parse_date, Measurement, Station, DATE_FORMAT};
