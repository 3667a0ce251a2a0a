//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and listing
//! journal entries in the database. Dates are stored as `YYYY-MM-DD` text.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::JournalEntry;
use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode};
use tracing::debug;

fn parse_date_column(value: String, idx: usize) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT_ISO).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Inserts a new entry.
///
/// # Errors
///
/// Returns `DatabaseError::EntryExists` if the date already has an entry, or
/// `DatabaseError::Sqlite` for any other failure.
pub fn insert_entry(
    conn: &Connection,
    date: NaiveDate,
    last_updated: &str,
    content: &str,
) -> AppResult<()> {
    debug!("Inserting entry for {}", date);

    let result = conn.execute(
        "INSERT INTO journal (date, last_updated, content) VALUES (?1, ?2, ?3)",
        params![date.format(DATE_FORMAT_ISO).to_string(), last_updated, content],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(DatabaseError::EntryExists(date).into())
        }
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Replaces the time and content of an existing entry. The date is left untouched.
///
/// # Errors
///
/// Returns `DatabaseError::EntryNotFound` if no entry exists for the date.
pub fn update_entry(
    conn: &Connection,
    date: NaiveDate,
    last_updated: &str,
    content: &str,
) -> AppResult<()> {
    debug!("Updating entry for {}", date);

    let changed = conn
        .execute(
            "UPDATE journal SET last_updated = ?1, content = ?2 WHERE date = ?3",
            params![last_updated, content, date.format(DATE_FORMAT_ISO).to_string()],
        )
        .map_err(DatabaseError::Sqlite)?;

    if changed == 0 {
        return Err(DatabaseError::EntryNotFound(date).into());
    }
    Ok(())
}

/// Retrieves an entry by date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn get_entry_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<JournalEntry>> {
    debug!("Getting entry for date {}", date);

    let result = conn.query_row(
        "SELECT date, last_updated, content FROM journal WHERE date = ?1",
        params![date.format(DATE_FORMAT_ISO).to_string()],
        |row| {
            Ok(JournalEntry {
                date: parse_date_column(row.get(0)?, 0)?,
                last_updated: row.get(1)?,
                content: row.get(2)?,
            })
        },
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Lists the dates of all stored entries in storage order.
pub fn list_entry_dates(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn
        .prepare("SELECT date FROM journal")
        .map_err(DatabaseError::Sqlite)?;

    let dates = stmt
        .query_map([], |row| parse_date_column(row.get(0)?, 0))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Found {} entries", dates.len());
    Ok(dates)
}
