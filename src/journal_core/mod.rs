//! Core journal functionality without I/O operations.
//!
//! This module holds the `JournalEntry` record together with the pure logic
//! around it: validating user-supplied dates, formatting the `last_updated`
//! stamp, and rendering an entry for display.

use crate::constants::{DATE_FORMAT_ISO, ENTRY_BORDER_WIDTH, TIME_FORMAT};
use crate::errors::ValidationError;
use chrono::{NaiveDate, NaiveTime};

/// The single journal record kept for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Day the entry belongs to. Unique across the journal.
    pub date: NaiveDate,
    /// Time of day of the most recent write, formatted as `HH:MM:SS`.
    pub last_updated: String,
    /// Free-form entry text.
    pub content: String,
}

/// Parses a `YYYY-MM-DD` date argument, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` carrying the trimmed input when it is
/// not a real calendar date in that format.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::parse_entry_date;
///
/// let date = parse_entry_date(" 2024-02-29 ").unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// assert!(parse_entry_date("2023-02-29").is_err());
/// assert!(parse_entry_date("not-a-date").is_err());
/// ```
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT_ISO)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Formats a time of day the way it is stored in `last_updated`.
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Renders an entry inside the fixed bordered layout used by `--read`.
///
/// The content is trimmed; the returned string ends with a newline.
pub fn render_entry(entry: &JournalEntry) -> String {
    let heavy = "=".repeat(ENTRY_BORDER_WIDTH);
    let light = "-".repeat(ENTRY_BORDER_WIDTH);

    format!(
        "{heavy}\nEntry Date: {}\nLast Updated: {}\nJournal Entry:\n{light}\n{}\n{heavy}\n",
        entry.date.format(DATE_FORMAT_ISO),
        entry.last_updated,
        entry.content.trim(),
    )
}
