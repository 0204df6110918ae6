//! Data source abstraction
//!
//! A data source only has to support two bulk scans. All filtering, grouping
//! and aggregation happens in the query engine, so any backend that can list
//! its rows will do.

use crate::storage::{Measurement, Station, StorageResult};

/// Read-only provider of station and measurement records
pub trait DataSource: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    /// Scan every station record
    fn stations(&self) -> StorageResult<Vec<Station>>;

    /// Scan every measurement record, in storage order
    fn measurements(&self) -> StorageResult<Vec<Measurement>>;
}
