//! Write or revise today's journal entry.

use crate::db::{EntryStore, WriteMode};
use crate::editor::Editor;
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

/// Opens the entry for `today` in the editor and saves the result.
///
/// # Flow
///
/// 1. Look up the existing entry for `today`
/// 2. Hand its content (or an empty string) to the editor
/// 3. Update the row if one existed, insert a new one otherwise
/// 4. Report success on `out`
///
/// # Errors
///
/// Returns an error if the lookup, the editor or the write fails. Nothing is
/// retried; a failed editing session leaves the stored entry untouched.
pub fn edit_today(
    store: &dyn EntryStore,
    editor: &dyn Editor,
    today: NaiveDate,
    out: &mut dyn Write,
) -> AppResult<()> {
    let existing = store.lookup_entry(today)?;
    let mode = if existing.is_some() {
        WriteMode::Update
    } else {
        WriteMode::Insert
    };
    debug!("Editing entry for {} ({:?})", today, mode);

    let initial = existing.map(|entry| entry.content).unwrap_or_default();
    let content = editor.edit(&initial)?;

    store.upsert_entry(today, &content, mode)?;
    debug!("Saved entry for {}", today);

    writeln!(out, "Entry saved. \u{1F609}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, EditorError};
    use crate::ops::test_support::{day, RecordingStore};
    use std::cell::RefCell;
    use std::io;

    struct ScriptedEditor {
        reply: Result<String, io::ErrorKind>,
        seen: RefCell<Option<String>>,
    }

    impl ScriptedEditor {
        fn replying(text: &str) -> Self {
            ScriptedEditor {
                reply: Ok(text.to_string()),
                seen: RefCell::new(None),
            }
        }
    }

    impl Editor for ScriptedEditor {
        fn edit(&self, initial: &str) -> Result<String, EditorError> {
            *self.seen.borrow_mut() = Some(initial.to_string());
            self.reply.clone().map_err(|kind| EditorError::CommandNotFound {
                command: "scripted".to_string(),
                source: io::Error::from(kind),
            })
        }
    }

    #[test]
    fn test_new_entry_is_inserted() {
        let store = RecordingStore::default();
        let editor = ScriptedEditor::replying("Hello world");
        let today = day(2024, 5, 1);
        let mut out = Vec::new();

        edit_today(&store, &editor, today, &mut out).unwrap();

        assert_eq!(editor.seen.borrow().as_deref(), Some(""));
        assert_eq!(store.rows.borrow()[&today].content, "Hello world");
        assert!(String::from_utf8(out).unwrap().starts_with("Entry saved."));
    }

    #[test]
    fn test_existing_entry_is_offered_and_updated() {
        let today = day(2024, 5, 1);
        let store = RecordingStore::with_entry(today, "morning notes");
        let editor = ScriptedEditor::replying("morning notes\nevening notes");
        let mut out = Vec::new();

        edit_today(&store, &editor, today, &mut out).unwrap();

        assert_eq!(editor.seen.borrow().as_deref(), Some("morning notes"));
        let rows = store.rows.borrow();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&today].content, "morning notes\nevening notes");
    }

    #[test]
    fn test_existing_empty_entry_is_updated_not_reinserted() {
        let today = day(2024, 5, 1);
        let store = RecordingStore::with_entry(today, "");
        let editor = ScriptedEditor::replying("filled in");
        let mut out = Vec::new();

        edit_today(&store, &editor, today, &mut out).unwrap();

        assert_eq!(store.rows.borrow()[&today].content, "filled in");
    }

    #[test]
    fn test_editor_failure_leaves_storage_untouched() {
        let today = day(2024, 5, 1);
        let store = RecordingStore::with_entry(today, "keep");
        let editor = ScriptedEditor {
            reply: Err(io::ErrorKind::NotFound),
            seen: RefCell::new(None),
        };
        let mut out = Vec::new();

        let err = edit_today(&store, &editor, today, &mut out).unwrap_err();

        assert!(matches!(err, AppError::Editor(EditorError::CommandNotFound { .. })));
        assert_eq!(store.rows.borrow()[&today].content, "keep");
        assert_eq!(store.calls.get(), 1, "only the lookup should reach storage");
        assert!(out.is_empty());
    }
}
