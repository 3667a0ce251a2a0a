//! High-level journal operations.
//!
//! Each operation composes the storage layer (and, for editing, the editor) and
//! writes its user-facing report to the supplied writer. Bad user input is
//! reported there too and ends the operation with `Ok(())`; storage, editor and
//! I/O failures are returned to the caller.

pub mod edit;
pub mod import;
pub mod list;
pub mod read;

pub use edit::edit_today;
pub use import::import_entry;
pub use list::list_dates;
pub use read::read_entry;
