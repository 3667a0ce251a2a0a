/*!
# Daybook

Daybook is a personal command-line journal that keeps exactly one entry per
calendar day in a local SQLite database.

## Core Features

- Write or revise today's entry in an external editor
- Read the entry for any past date
- List every date that has an entry
- Import an entry for a date from a text file

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: JSON configuration loading and first-run creation
- `context`: Per-invocation state (config plus open database)
- `db`: SQLite storage keyed by date
- `editor`: External editor sessions over scoped temporary files
- `errors`: Error handling infrastructure
- `journal_core`: Pure logic for dates and entry rendering
- `ops`: The user-facing journal operations

## Usage Example

```rust,no_run
use daybook::context::AppContext;
use daybook::ops;
use chrono::Local;
use std::path::Path;

fn main() -> daybook::AppResult<()> {
    let ctx = AppContext::initialize(Path::new("daybook_conf.json"))?;
    let today = Local::now().date_naive();
    ops::edit_today(&ctx.db, &ctx.editor(), today, &mut std::io::stdout())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Per-invocation application state
pub mod context;
/// Journal storage
pub mod db;
/// External editor integration
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Date handling and entry rendering without I/O
pub mod journal_core;
/// User-facing journal operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
