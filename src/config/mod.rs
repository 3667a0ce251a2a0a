//! Configuration management for the daybook application.
//!
//! Settings live in a small JSON file. When the file does not exist a default
//! one is written and used, so the first invocation works without any setup.
//!
//! # File format
//!
//! ```json
//! {
//!   "dbname": "daybook.db",
//!   "editor": "nano",
//!   "hash": ""
//! }
//! ```
//!
//! - `dbname`: path to the SQLite storage file. `~` and environment variables are
//!   expanded; a relative path is resolved against the config file's directory.
//! - `editor`: the external editor executable (defaults to `nano`).
//! - `hash`: reserved, currently unused.

use crate::constants::{
    DEFAULT_CONFIG_FILE_NAME, DEFAULT_DB_FILE_NAME, DEFAULT_EDITOR_COMMAND,
    EDITOR_FORBIDDEN_CHARS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn default_editor() -> String {
    DEFAULT_EDITOR_COMMAND.to_string()
}

/// Configuration for the daybook application.
///
/// Fields are declared in alphabetical order so the written JSON keeps its keys sorted.
///
/// # Examples
///
/// ```
/// use daybook::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "dbname": "journal.db" }"#).unwrap();
/// assert_eq!(config.dbname, "journal.db");
/// assert_eq!(config.editor, "nano");
/// assert!(config.hash.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the storage file, as written in the config file.
    pub dbname: String,

    /// Editor command used for the new/edit workflow.
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Reserved for future use.
    #[serde(default)]
    pub hash: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("dbname", &self.dbname)
            .field("editor", &self.editor)
            .field("hash", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dbname: DEFAULT_DB_FILE_NAME.to_string(),
            editor: default_editor(),
            hash: String::new(),
        }
    }
}

impl Config {
    /// Loads the configuration at `path`, creating it with defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the existing file cannot be read or parsed,
    /// or if the configured editor command fails validation. Returns
    /// `AppError::Io` if the default file cannot be written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load_or_create(Path::new("daybook_conf.json"))?;
    /// println!("Using database {}", config.dbname);
    /// # Ok::<(), daybook::AppError>(())
    /// ```
    pub fn load_or_create(path: &Path) -> AppResult<Self> {
        if !path.is_file() {
            info!(
                "Config file {} not found, creating one with default values",
                path.display()
            );
            let config = Config::default();
            config.write(path)?;
            return Ok(config);
        }

        debug!("Reading config file {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Writes this configuration to `path` as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `dbname` is empty or the editor command is invalid.
    ///
    /// ```
    /// use daybook::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.editor = "vim; rm -rf ~".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.dbname.trim().is_empty() {
            return Err(AppError::Config("dbname cannot be empty".to_string()));
        }
        Config::validate_editor_command(&self.editor)?;
        Ok(())
    }

    /// Validates an editor command string for security.
    ///
    /// The command must be non-empty and contain neither spaces nor shell
    /// metacharacters, since it is executed directly without a shell.
    fn validate_editor_command(editor_cmd: &str) -> AppResult<&str> {
        if editor_cmd.is_empty() {
            return Err(AppError::Config(
                "Editor command cannot be empty".to_string(),
            ));
        }

        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script for editors requiring arguments".to_string(),
            ));
        }

        if let Some(ch) = editor_cmd
            .chars()
            .find(|ch| EDITOR_FORBIDDEN_CHARS.contains(ch))
        {
            return Err(AppError::Config(format!(
                "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script instead",
                ch
            )));
        }

        Ok(editor_cmd)
    }

    /// Resolves the storage file path.
    ///
    /// `~` and environment variables are expanded. A relative result is taken to be
    /// relative to the directory holding `config_path`.
    pub fn resolve_db_path(&self, config_path: &Path) -> AppResult<PathBuf> {
        let expanded = shellexpand::full(&self.dbname)
            .map_err(|e| AppError::Config(format!("Failed to expand dbname: {}", e)))?;
        let db_path = PathBuf::from(expanded.into_owned());

        if db_path.is_absolute() {
            return Ok(db_path);
        }

        let base = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Ok(base.join(db_path))
    }
}

/// Returns the config file location used when `--config` is not given: the
/// directory holding the running executable.
pub fn default_config_path() -> AppResult<PathBuf> {
    let exe = env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::Config(format!(
            "Cannot determine directory of executable {}",
            exe.display()
        ))
    })?;
    Ok(dir.join(DEFAULT_CONFIG_FILE_NAME))
}
