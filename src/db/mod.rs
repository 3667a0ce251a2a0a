//! Storage for journal entries.
//!
//! This module provides the SQLite-backed journal store. Entries are kept in a
//! single table keyed by calendar date, so there is at most one entry per day.
//!
//! # Module Structure
//!
//! - `schema`: Table definition, creation and verification
//! - `entries`: Entry insert/update/lookup/list over a raw connection
//!
//! # Example
//!
//! ```no_run
//! use daybook::db::{Database, EntryStore, WriteMode};
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/daybook.db"))?;
//! let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! db.upsert_entry(date, "New year, new journal.", WriteMode::Insert)?;
//! # Ok::<(), daybook::AppError>(())
//! ```

pub mod entries;
pub mod schema;

use crate::constants::{POOL_CONNECTION_TIMEOUT_SECS, SQLITE_BUSY_TIMEOUT_MS};
use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::{format_timestamp, JournalEntry};
use chrono::{Local, NaiveDate, NaiveTime};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// How an upsert treats the row for its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the row; fails if the date already has an entry.
    Insert,
    /// Rewrite the existing row; fails if the date has no entry.
    Update,
}

/// The storage operations journal commands rely on.
///
/// `Database` is the real implementation. Keeping the commands behind this trait
/// lets tests observe or fake storage access.
pub trait EntryStore {
    /// Looks up the entry for `date`. A missing entry is `Ok(None)`, not an error.
    fn lookup_entry(&self, date: NaiveDate) -> AppResult<Option<JournalEntry>>;

    /// Writes `content` for `date`, stamping the row with `time`.
    fn upsert_entry_at(
        &self,
        date: NaiveDate,
        content: &str,
        mode: WriteMode,
        time: NaiveTime,
    ) -> AppResult<()>;

    /// Lists every stored date. Order is whatever the storage returns.
    fn list_dates(&self) -> AppResult<Vec<NaiveDate>>;

    /// Writes `content` for `date`, stamping the row with the current local time.
    ///
    /// # Errors
    ///
    /// `WriteMode::Insert` fails with `DatabaseError::EntryExists` when the date
    /// already has an entry; `WriteMode::Update` fails with
    /// `DatabaseError::EntryNotFound` when it has none.
    fn upsert_entry(&self, date: NaiveDate, content: &str, mode: WriteMode) -> AppResult<()> {
        self.upsert_entry_at(date, content, mode, Local::now().time())
    }
}

/// Database handle over a single-connection pool.
///
/// Dropping the handle closes the connection.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the journal database at `db_path`.
    ///
    /// A missing file is created together with the journal table. An existing file
    /// must already hold a compatible journal table with the columns `date`,
    /// `last_updated` and `content`. Older journals using `jdate`, `jupdated` and
    /// `jentry` are rejected, not migrated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened or created
    /// - The journal table cannot be created
    /// - The existing table does not have the expected columns
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);
        // SQLite treats a zero-length file as an empty database.
        let is_new = fs::metadata(db_path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_secs(POOL_CONNECTION_TIMEOUT_SECS))
            .connection_customizer(Box::new(BusyTimeout {
                timeout: Duration::from_millis(SQLITE_BUSY_TIMEOUT_MS),
            }))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        let db = Database { pool };
        let conn = db.get_conn()?;
        if is_new {
            info!(
                "Database file {} not found, creating a blank one",
                db_path.display()
            );
            schema::create_tables(&conn)?;
        }
        schema::verify_schema(&conn)?;
        drop(conn);

        debug!("Database opened successfully");
        Ok(db)
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be acquired.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }
}

impl EntryStore for Database {
    fn lookup_entry(&self, date: NaiveDate) -> AppResult<Option<JournalEntry>> {
        let conn = self.get_conn()?;
        entries::get_entry_by_date(&conn, date)
    }

    fn upsert_entry_at(
        &self,
        date: NaiveDate,
        content: &str,
        mode: WriteMode,
        time: NaiveTime,
    ) -> AppResult<()> {
        let conn = self.get_conn()?;
        let stamp = format_timestamp(time);
        match mode {
            WriteMode::Insert => entries::insert_entry(&conn, date, &stamp, content),
            WriteMode::Update => entries::update_entry(&conn, date, &stamp, content),
        }
    }

    fn list_dates(&self) -> AppResult<Vec<NaiveDate>> {
        let conn = self.get_conn()?;
        entries::list_entry_dates(&conn)
    }
}

/// Connection customizer that makes writers wait on a locked file instead of failing at once.
#[derive(Debug)]
struct BusyTimeout {
    timeout: Duration,
}

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for BusyTimeout {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.busy_timeout(self.timeout)
    }
}
