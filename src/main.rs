/*!
# Daybook - A Personal Journal

Daybook keeps one journal entry per day in a local SQLite database.

This file contains the main application flow, coordinating the various components
to implement the journal functionality.

## Usage

```
daybook [OPTIONS]

Options:
  -r, --read <DATE>             Read the journal entry for a date (YYYY-MM-DD)
  -c, --config <FILE>           Config file [default: daybook_conf.json next to the executable]
  -i, --import <FILE> <DATE>    Import the entry for DATE from FILE
  -s, --show                    Show the list of dates with journal entries
  -v, --verbose                 Print verbose output
      --log-format <FORMAT>     Format of log output on stderr [text, json]
  -h, --help                    Print help information
  -V, --version                 Print version information
```

Without an operation flag, today's entry is opened in the configured editor.
*/

use chrono::Local;
use clap::Parser;
use daybook::cli::{CliArgs, LogFormat, Operation};
use daybook::config::default_config_path;
use daybook::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use daybook::context::AppContext;
use daybook::errors::AppResult;
use daybook::ops;
use std::io;
use tracing::{debug, info_span};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the level implied by `--verbose`.
fn init_tracing(format: LogFormat, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// The main entry point for the daybook application.
///
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads (or creates) the configuration and opens the database
/// 4. Runs the selected journal operation
///
/// # Errors
///
/// Configuration, database, editor and I/O errors end the process with a
/// non-zero exit status. Invalid dates and missing import files are reported
/// on stdout and are not errors.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_format, args.verbose);

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %uuid::Uuid::new_v4()
    );
    let _guard = span.enter();

    debug!("CLI arguments: {:?}", args);

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let ctx = AppContext::initialize(&config_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.operation() {
        Operation::EditToday => {
            let today = Local::now().date_naive();
            ops::edit_today(&ctx.db, &ctx.editor(), today, &mut out)
        }
        Operation::Read { date } => ops::read_entry(&ctx.db, &date, &mut out),
        Operation::Import { file, date } => ops::import_entry(&ctx.db, &file, &date, &mut out),
        Operation::Show => ops::list_dates(&ctx.db, &mut out),
    }
}
