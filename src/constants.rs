//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal journal with one entry per day";

// Configuration
/// File name of the configuration file looked up next to the executable.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "daybook_conf.json";
/// Storage file written into a freshly created configuration.
pub const DEFAULT_DB_FILE_NAME: &str = "daybook.db";
/// Default command for the editor if the configuration does not name one.
pub const DEFAULT_EDITOR_COMMAND: &str = "nano";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Name of the single journal table.
pub const JOURNAL_TABLE: &str = "journal";
/// How long opening the database may take before giving up.
pub const POOL_CONNECTION_TIMEOUT_SECS: u64 = 2;
/// How long a connection waits on a locked database file before failing.
pub const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

// Editing sessions
/// Prefix for the temporary file handed to the editor.
pub const TEMP_FILE_PREFIX: &str = "daybook-";
/// Suffix for the temporary file handed to the editor.
pub const TEMP_FILE_SUFFIX: &str = ".md";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Time-of-day format stored in `last_updated`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// Output
/// Width of the borders drawn around a printed entry.
pub const ENTRY_BORDER_WIDTH: usize = 50;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
