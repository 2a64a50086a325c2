use std::path::Path;

use rusqlite::{params, Connection, Transaction};

use crate::error::StorageError;
use crate::types::activity::{Activity, Trackpoint};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS activity (
    id TEXT PRIMARY KEY,
    curr_tkpt_alt_feet REAL,
    curr_tkpt_dist_miles REAL,
    curr_tkpt_lat REAL,
    curr_tkpt_lng REAL,
    curr_tkpt_seq INTEGER,
    curr_tkpt_time TEXT,
    file_kml TEXT,
    file_tcx TEXT,
    tkpt0_time TEXT
);
CREATE TABLE IF NOT EXISTS trackpoint (
    activity_id TEXT NOT NULL,
    alt_feet REAL,
    dist_miles REAL,
    lat REAL,
    lng REAL,
    seq INTEGER,
    time TEXT
);
";

/// Sink for activity rows. Inserting an activity whose id is already stored
/// replaces it and drops its old trackpoints.
pub trait ActivitySink {
    fn insert_activity(
        &self,
        activity: &Activity,
        file_kml: &str,
        file_tcx: &str,
    ) -> Result<(), StorageError>;

    fn insert_trackpoint(&self, activity_id: &str, point: &Trackpoint) -> Result<(), StorageError>;
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        tracing::debug!("opening database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Starts the batch-wide transaction. Dropping the returned value without
    /// calling [`StorageTxn::commit`] rolls everything back.
    pub fn begin(&mut self) -> Result<StorageTxn<'_>, StorageError> {
        Ok(StorageTxn {
            tx: self.conn.transaction()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn count(&self, table: Table) -> Result<usize, StorageError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Table {
    Activity,
    Trackpoint,
}

impl Table {
    fn name(self) -> &'static str {
        match self {
            Table::Activity => "activity",
            Table::Trackpoint => "trackpoint",
        }
    }
}

pub struct StorageTxn<'a> {
    tx: Transaction<'a>,
}

impl StorageTxn<'_> {
    pub fn commit(self) -> Result<(), StorageError> {
        self.tx.commit()?;
        Ok(())
    }
}

impl ActivitySink for StorageTxn<'_> {
    fn insert_activity(
        &self,
        activity: &Activity,
        file_kml: &str,
        file_tcx: &str,
    ) -> Result<(), StorageError> {
        let curr = &activity.current;
        // A rerun replaces the activity and the trackpoints stored with it.
        self.tx.execute(
            "DELETE FROM trackpoint WHERE activity_id = ?1;",
            params![activity.id],
        )?;
        self.tx.execute(
            "INSERT OR REPLACE INTO activity VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                activity.id,
                curr.alt_feet,
                curr.dist_miles,
                real(curr.lat),
                real(curr.lng),
                curr.seq,
                curr.time,
                file_kml,
                file_tcx,
                activity.first_time,
            ],
        )?;
        Ok(())
    }

    fn insert_trackpoint(&self, activity_id: &str, point: &Trackpoint) -> Result<(), StorageError> {
        self.tx.execute(
            "INSERT INTO trackpoint VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                activity_id,
                point.alt_feet,
                point.dist_miles,
                real(point.lat),
                real(point.lng),
                point.seq,
                point.time,
            ],
        )?;
        Ok(())
    }
}

// SQLite has no NaN; store it as NULL.
fn real(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}
