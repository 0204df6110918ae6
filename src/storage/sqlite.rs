//! SQLite data source
//!
//! Reads the `station` and `measurement` tables of a climate database such as
//! `hawaii.sqlite`. The file is opened read-only and is never written.
//!
//! # Schema
//!
//! ```text
//! station(id, station, name, latitude, longitude, elevation)
//! measurement(id, station, date, prcp, tobs)
//! ```

use crate::storage::{DataSource, Measurement, Station, StorageError, StorageResult};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Read-only handle on a climate SQLite database
pub struct SqliteSource {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteSource {
    /// Open an existing database read-only
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database not found: {}", path.display()),
            )));
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        tracing::info!("Opened SQLite data source at {:?}", path);

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the underlying connection
    pub fn close(self) -> StorageResult<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        conn.close().map_err(|(_, e)| StorageError::Sqlite(e))?;
        tracing::info!("Closed SQLite data source at {:?}", self.path);
        Ok(())
    }
}

impl DataSource for SqliteSource {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn stations(&self) -> StorageResult<Vec<Station>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Station {
                station: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                latitude: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
                longitude: row.get::<_, Option<f64>>(3)?.unwrap_or_default(),
                elevation: row.get::<_, Option<f64>>(4)?.unwrap_or_default(),
            })
        })?;

        let stations = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    fn measurements(&self) -> StorageResult<Vec<Measurement>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let mut stmt =
            conn.prepare("SELECT station, date, prcp, tobs FROM measurement ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Measurement {
                station: row.get(0)?,
                date: row.get(1)?,
                prcp: row.get(2)?,
                tobs: row.get(3)?,
            })
        })?;

        let measurements = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(measurements)
    }
}
