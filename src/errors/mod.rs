//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! failures that abort a command, the convenience alias `AppResult`, and the
//! `ValidationError` type for bad user input that is reported inline instead.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when interacting with external editors.
///
/// Each variant captures the editor command involved and, where there is one,
/// the underlying I/O error.
///
/// # Examples
///
/// ```
/// use daybook::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "nano".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("not found"));
/// assert!(format!("{}", error).contains("nano"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Please check that the editor is installed and that the `editor` setting in your config file is correct.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}. Please check file permissions.")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The scratch file for the editing session could not be prepared.
    #[error("Failed to prepare temporary file for editing: {source}")]
    TempFile {
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The edited text could not be read back once the editor exited.
    #[error("Failed to read back the edited entry after '{command}' exited: {source}")]
    ReadBack {
        /// The editor command that was run
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases that can occur during storage operations.
///
/// # Examples
///
/// ```
/// use daybook::errors::DatabaseError;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let error = DatabaseError::EntryExists(date);
/// assert!(format!("{}", error).contains("2023-01-01"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// An insert hit the one-entry-per-day constraint.
    #[error("An entry for {0} already exists")]
    EntryExists(NaiveDate),

    /// An update targeted a date with no entry.
    #[error("No entry exists for {0}")]
    EntryNotFound(NaiveDate),

    /// The storage file does not hold the expected journal table.
    #[error("Unexpected database schema: {0}")]
    SchemaMismatch(String),
}

/// Represents all errors that abort a daybook command.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Missing dbname".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing dbname");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to the journal database.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

/// Bad user input. Operations print these and stop; they never abort the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The date argument is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date:\t{0}")]
    InvalidDate(String),

    /// The file given to import does not exist.
    #[error("File <{}> not found!", .0.display())]
    FileNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let app_error = AppError::Database(DatabaseError::EntryNotFound(date));
        assert_eq!(
            format!("{}", app_error),
            "Database error: No entry exists for 2024-02-29"
        );
    }

    #[test]
    fn test_editor_error_variants() {
        let error = EditorError::CommandNotFound {
            command: "nano".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "command not found"),
        };
        assert!(format!("{}", error).contains("not found"));
        assert!(format!("{}", error).contains("nano"));

        let error = EditorError::PermissionDenied {
            command: "nano".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(format!("{}", error).contains("Permission denied"));

        let error = EditorError::ExecutionFailed {
            command: "nano".to_string(),
            source: io::Error::other("some other error"),
        };
        assert!(format!("{}", error).contains("Failed to execute"));

        let error = EditorError::TempFile {
            source: io::Error::other("disk full"),
        };
        assert!(format!("{}", error).contains("temporary file"));
        assert!(format!("{}", error).contains("disk full"));

        let error = EditorError::ReadBack {
            command: "nano".to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(format!("{}", error).contains("read back"));
        assert!(format!("{}", error).contains("nano"));
    }

    #[test]
    fn test_editor_error_conversion_to_app_error() {
        let editor_error = EditorError::CommandNotFound {
            command: "nano".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "command not found"),
        };

        let app_error: AppError = editor_error.into();

        match app_error {
            AppError::Editor(EditorError::CommandNotFound { command, .. }) => {
                assert_eq!(command, "nano");
            }
            _ => panic!("Expected AppError::Editor(CommandNotFound)"),
        }
    }

    #[test]
    fn test_database_error_conversion_to_app_error() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let app_error: AppError = DatabaseError::EntryExists(date).into();

        assert!(matches!(
            app_error,
            AppError::Database(DatabaseError::EntryExists(d)) if d == date
        ));
    }

    #[test]
    fn test_editor_error_source_chaining() {
        let editor_error = EditorError::ExecutionFailed {
            command: "nano".to_string(),
            source: io::Error::new(io::ErrorKind::Interrupted, "interrupted"),
        };

        let source = editor_error
            .source()
            .expect("ExecutionFailed should have a source");
        let source_io_error = source
            .downcast_ref::<io::Error>()
            .expect("Source should be an io::Error");
        assert_eq!(source_io_error.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_app_error_source_chaining() {
        let app_error = AppError::Database(DatabaseError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        ));

        let source = app_error.source().expect("Database should have a source");
        assert!(source.downcast_ref::<DatabaseError>().is_some());
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidDate("not-a-date".to_string()).to_string(),
            "Invalid date:\tnot-a-date"
        );
        assert_eq!(
            ValidationError::FileNotFound(PathBuf::from("/missing/entry.txt")).to_string(),
            "File </missing/entry.txt> not found!"
        );
    }
}
