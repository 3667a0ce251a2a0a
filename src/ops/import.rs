//! Import an entry for a given date from a text file.

use crate::db::{EntryStore, WriteMode};
use crate::errors::{AppResult, ValidationError};
use crate::journal_core::parse_entry_date;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Stores the trimmed contents of `file` as the entry for `date_input`.
///
/// Import always creates a new entry; it never overwrites one. A malformed date
/// or a missing file is reported on `out` without touching storage.
///
/// # Errors
///
/// Returns `DatabaseError::EntryExists` (as `AppError::Database`) if the date
/// already has an entry, `AppError::Io` if the file cannot be read as UTF-8
/// text, or any other storage error.
pub fn import_entry(
    store: &dyn EntryStore,
    file: &Path,
    date_input: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let date = match parse_entry_date(date_input) {
        Ok(date) => date,
        Err(invalid) => {
            debug!("Rejected import request: {}", invalid);
            writeln!(out, "{}", invalid)?;
            return Ok(());
        }
    };

    if !file.is_file() {
        writeln!(out, "{}", ValidationError::FileNotFound(file.to_path_buf()))?;
        return Ok(());
    }

    let text = fs::read_to_string(file)?;
    store.upsert_entry(date, text.trim(), WriteMode::Insert)?;
    debug!("Imported {} as the entry for {}", file.display(), date);

    writeln!(out, "Entry imported successfully!")?;
    Ok(())
}
