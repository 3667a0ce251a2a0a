//! Display the entry for a given date.

use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::journal_core::{parse_entry_date, render_entry};
use std::io::Write;
use tracing::debug;

/// Prints the entry for `date_input` in the bordered entry layout.
///
/// A malformed date is reported on `out` without touching storage. A date with
/// no entry is reported as such. Neither case is an error.
///
/// # Errors
///
/// Returns an error if the lookup or writing to `out` fails.
pub fn read_entry(store: &dyn EntryStore, date_input: &str, out: &mut dyn Write) -> AppResult<()> {
    let date = match parse_entry_date(date_input) {
        Ok(date) => date,
        Err(invalid) => {
            debug!("Rejected read request: {}", invalid);
            writeln!(out, "{}", invalid)?;
            return Ok(());
        }
    };

    match store.lookup_entry(date)? {
        Some(entry) => write!(out, "{}", render_entry(&entry))?,
        None => writeln!(out, "No entry found for {}.", date)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{day, RecordingStore};

    fn run(store: &RecordingStore, input: &str) -> String {
        let mut out = Vec::new();
        read_entry(store, input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_existing_entry_is_printed() {
        let store = RecordingStore::with_entry(day(2023, 1, 1), "  imported text \n");

        let output = run(&store, "2023-01-01");

        assert!(output.contains("Entry Date: 2023-01-01"));
        assert!(output.contains("Last Updated: 08:00:00"));
        assert!(output.contains("\nimported text\n"));
    }

    #[test]
    fn test_missing_entry_is_reported() {
        let store = RecordingStore::default();

        let output = run(&store, "2023-01-01");

        assert_eq!(output, "No entry found for 2023-01-01.\n");
    }

    #[test]
    fn test_malformed_dates_skip_storage() {
        let store = RecordingStore::with_entry(day(2023, 1, 1), "content");

        for input in ["2024-13-40", "not-a-date"] {
            let output = run(&store, input);
            assert_eq!(output, format!("Invalid date:\t{}\n", input));
        }

        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let store = RecordingStore::with_entry(day(2023, 1, 1), "content");

        let output = run(&store, " 2023-01-01 ");

        assert!(output.contains("content"));
    }
}
