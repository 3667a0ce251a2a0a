//! Editor abstraction for writing journal entries.
//!
//! An editing session hands the current text to an external editor through a
//! scoped temporary file and returns whatever the file holds once the editor
//! exits. The `Editor` trait keeps the rest of the application independent of
//! the real process so tests can substitute a fake.

use crate::constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::errors::EditorError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use daybook::editor::Editor;
/// use daybook::errors::EditorError;
///
/// struct ShoutingEditor;
///
/// impl Editor for ShoutingEditor {
///     fn edit(&self, initial: &str) -> Result<String, EditorError> {
///         Ok(initial.to_uppercase())
///     }
/// }
///
/// assert_eq!(ShoutingEditor.edit("hello").unwrap(), "HELLO");
/// ```
pub trait Editor {
    /// Lets the user edit `initial` and returns the final text.
    ///
    /// # Errors
    ///
    /// Returns an `EditorError` if the editor cannot be launched or the result
    /// cannot be read back.
    fn edit(&self, initial: &str) -> Result<String, EditorError>;
}

/// An implementation of the Editor trait that runs an external editor process.
///
/// The editor is started with the temporary file path as its only argument and
/// inherits the terminal. Its exit status is logged but not treated as a failure:
/// any exit means the user is done editing.
///
/// # Examples
///
/// ```no_run
/// use daybook::editor::{Editor, SystemEditor};
///
/// let editor = SystemEditor {
///     editor_cmd: "nano".to_string(),
/// };
///
/// let text = editor.edit("Dear diary,\n").expect("editing failed");
/// ```
pub struct SystemEditor {
    /// The command to use for editing (e.g., "vim", "nano").
    pub editor_cmd: String,
}

impl SystemEditor {
    /// Writes `initial` into a fresh temporary file.
    fn prepare_file(initial: &str) -> io::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(TEMP_FILE_SUFFIX)
            .tempfile()?;
        if !initial.is_empty() {
            file.write_all(initial.as_bytes())?;
        }
        file.flush()?;
        Ok(file)
    }

    /// Runs the editor on `path` and blocks until it exits.
    fn launch(&self, path: &Path) -> Result<(), EditorError> {
        debug!("Launching editor: {} {:?}", self.editor_cmd, path);

        match Command::new(&self.editor_cmd).arg(path).status() {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(EditorError::CommandNotFound {
                command: self.editor_cmd.clone(),
                source: e,
            }),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(EditorError::PermissionDenied {
                    command: self.editor_cmd.clone(),
                    source: e,
                })
            }
            Err(e) => Err(EditorError::ExecutionFailed {
                command: self.editor_cmd.clone(),
                source: e,
            }),
            Ok(status) => {
                if !status.success() {
                    warn!("Editor '{}' exited with {}", self.editor_cmd, status);
                }
                Ok(())
            }
        }
    }
}

impl Editor for SystemEditor {
    fn edit(&self, initial: &str) -> Result<String, EditorError> {
        // Removed from disk when `file` drops, on every return path below.
        let file = Self::prepare_file(initial).map_err(|source| EditorError::TempFile { source })?;

        self.launch(file.path())?;

        // Re-read by path: many editors save by replacing the file.
        fs::read_to_string(file.path()).map_err(|source| EditorError::ReadBack {
            command: self.editor_cmd.clone(),
            source,
        })
    }
}
