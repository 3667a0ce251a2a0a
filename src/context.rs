//! Per-invocation application state.
//!
//! `AppContext` is built once at startup from the config file and handed to the
//! command being run. It owns the open database; dropping the context closes it.

use crate::config::Config;
use crate::db::Database;
use crate::editor::SystemEditor;
use crate::errors::AppResult;
use std::path::Path;
use tracing::debug;

/// Loaded configuration plus the open journal database.
pub struct AppContext {
    /// Active configuration.
    pub config: Config,
    /// Open journal database.
    pub db: Database,
}

impl AppContext {
    /// Loads (or creates) the config at `config_path` and opens the database it names.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an unreadable or invalid config file and
    /// `AppError::Database` if the storage file cannot be opened.
    pub fn initialize(config_path: &Path) -> AppResult<Self> {
        let config = Config::load_or_create(config_path)?;
        let db_path = config.resolve_db_path(config_path)?;
        debug!("Journal database: {}", db_path.display());
        let db = Database::open(&db_path)?;
        Ok(AppContext { config, db })
    }

    /// The editor named by the configuration.
    pub fn editor(&self) -> SystemEditor {
        SystemEditor {
            editor_cmd: self.config.editor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DB_FILE_NAME;
    use crate::db::EntryStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fresh_directory_gets_config_and_database() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("conf.json");

        let ctx = AppContext::initialize(&config_path).unwrap();

        assert!(config_path.is_file());
        assert!(dir.path().join(DEFAULT_DB_FILE_NAME).is_file());
        assert!(ctx.db.list_dates().unwrap().is_empty());
        assert_eq!(ctx.editor().editor_cmd, "nano");
    }

    #[test]
    fn test_configured_database_and_editor_are_used() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("conf.json");
        fs::write(
            &config_path,
            r#"{ "dbname": "custom.db", "hash": "", "editor": "vi" }"#,
        )
        .unwrap();

        let ctx = AppContext::initialize(&config_path).unwrap();

        assert!(dir.path().join("custom.db").is_file());
        assert_eq!(ctx.editor().editor_cmd, "vi");
    }
}
