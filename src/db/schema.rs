//! Database schema definitions and initialization.
//!
//! The journal keeps a single table keyed by calendar date:
//!
//! ```sql
//! journal(date TEXT PRIMARY KEY, last_updated TEXT NOT NULL, content TEXT NOT NULL)
//! ```

use crate::constants::JOURNAL_TABLE;
use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection};
use tracing::debug;

/// Columns the journal table must carry, in declaration order.
pub const JOURNAL_COLUMNS: &[&str] = &["date", "last_updated", "content"];

/// Creates the journal table.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Errors
///
/// Returns an error if the DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating journal table");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS journal (
            date TEXT PRIMARY KEY NOT NULL,
            last_updated TEXT NOT NULL,
            content TEXT NOT NULL
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Checks that the journal table exists with the expected columns.
///
/// # Errors
///
/// Returns `DatabaseError::SchemaMismatch` if the table is missing or any
/// expected column is absent.
pub fn verify_schema(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(DatabaseError::Sqlite)?;
    let columns = stmt
        .query_map(params![JOURNAL_TABLE], |row| row.get::<_, String>(0))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    if columns.is_empty() {
        return Err(DatabaseError::SchemaMismatch(format!(
            "table '{}' does not exist",
            JOURNAL_TABLE
        ))
        .into());
    }

    let missing: Vec<&str> = JOURNAL_COLUMNS
        .iter()
        .copied()
        .filter(|expected| !columns.iter().any(|c| c == expected))
        .collect();
    if !missing.is_empty() {
        return Err(DatabaseError::SchemaMismatch(format!(
            "table '{}' is missing column(s): {}",
            JOURNAL_TABLE,
            missing.join(", ")
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        verify_schema(&conn).unwrap();
    }

    #[test]
    fn test_verify_schema_detects_missing_table() {
        let conn = Connection::open_in_memory().unwrap();

        let err = verify_schema(&conn).unwrap_err();

        assert!(matches!(
            err,
            AppError::Database(DatabaseError::SchemaMismatch(ref msg)) if msg.contains("does not exist")
        ));
    }

    #[test]
    fn test_verify_schema_detects_foreign_layout() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE journal (jdate TEXT PRIMARY KEY, jupdated TEXT, jentry TEXT);",
        )
        .unwrap();

        let err = verify_schema(&conn).unwrap_err();

        match err {
            AppError::Database(DatabaseError::SchemaMismatch(msg)) => {
                assert!(msg.contains("date"));
                assert!(msg.contains("content"));
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_date_is_primary_key() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO journal (date, last_updated, content) VALUES ('2023-01-01', '10:00:00', 'a')",
            [],
        )
        .unwrap();
        let duplicate = conn.execute(
            "INSERT INTO journal (date, last_updated, content) VALUES ('2023-01-01', '11:00:00', 'b')",
            [],
        );

        assert!(duplicate.is_err());
    }
}
