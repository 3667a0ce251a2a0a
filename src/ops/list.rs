//! List the dates that have entries.

use crate::constants::DATE_FORMAT_ISO;
use crate::db::EntryStore;
use crate::errors::AppResult;
use std::io::Write;

/// Prints every stored date, one per line, under a header.
///
/// An empty journal is reported with an informational message, not an error.
pub fn list_dates(store: &dyn EntryStore, out: &mut dyn Write) -> AppResult<()> {
    let dates = store.list_dates()?;

    if dates.is_empty() {
        writeln!(out, "No entries found.")?;
        return Ok(());
    }

    writeln!(out, "The database has entries for the following dates:")?;
    for date in dates {
        writeln!(out, "{}", date.format(DATE_FORMAT_ISO))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{day, RecordingStore};

    #[test]
    fn test_empty_journal() {
        let store = RecordingStore::default();
        let mut out = Vec::new();

        list_dates(&store, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No entries found.\n");
    }

    #[test]
    fn test_lists_every_date() {
        let store = RecordingStore::with_entry(day(2023, 1, 1), "a");
        store.rows.borrow_mut().insert(
            day(2023, 3, 9),
            crate::journal_core::JournalEntry {
                date: day(2023, 3, 9),
                last_updated: "12:00:00".to_string(),
                content: "b".to_string(),
            },
        );
        let mut out = Vec::new();

        list_dates(&store, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The database has entries for the following dates:\n2023-01-01\n2023-03-09\n"
        );
    }
}
