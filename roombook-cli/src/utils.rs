//! Utility functions for CLI operations.
//!
//! Resolves the data directory, loads configuration, and opens the
//! database that every command works against.

use crate::error::CliError;
use std::path::PathBuf;
use std::time::Duration;
use roombook::config::{Config, ConfigBuilder};
use roombook::database::{Database, DatabaseConfig};
use roombook::operations::{ManagerOptions, ReservationManager};
use roombook::Logger;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the configured lock wait (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Logger handed to the reservation manager.
    pub logger: Logger,
}

/// Resolve the data directory: `--data-dir`, then `ROOMBOOK_DATA_DIR`,
/// then `~/.roombook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref data_dir) => Ok(data_dir.clone()),
        None => {
            roombook::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string()))
        }
    }
}

/// Load layered configuration from the data directory and environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| match e {
            roombook::Error::Configuration(yaml) => CliError::Config(yaml.to_string()),
            other => CliError::Config(other.to_string()),
        })
}

/// How a command uses the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Commands that change reservations.
    ReadWrite,
    /// Queries. An existing database is opened read-only.
    ReadOnly,
}

/// Open the database in the data directory.
///
/// A missing database is created (unless auto-init is disabled) even for
/// read-only access, so a query against a fresh data directory sees an
/// empty store.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_database(
    global: &GlobalOptions,
    config: &Config,
    access: Access,
) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);
    let mut db_config = DatabaseConfig::in_data_dir(data_dir).with_busy_timeout(timeout);

    if global.disable_autoinit || config.disable_autoinit.unwrap_or(false) {
        db_config = db_config.without_auto_create();
    }
    if access == Access::ReadOnly && db_config.path.exists() {
        db_config = db_config.read_only();
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Configuration and database for one command invocation.
pub struct Session {
    /// The resolved configuration.
    pub config: Config,
    /// The open database.
    pub db: Database,
}

impl Session {
    /// Load configuration and open the database for writing.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        Self::open_with(global, Access::ReadWrite)
    }

    /// Load configuration and open the database for queries.
    pub fn open_read_only(global: &GlobalOptions) -> Result<Self, CliError> {
        Self::open_with(global, Access::ReadOnly)
    }

    fn open_with(global: &GlobalOptions, access: Access) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config, access)?;
        Ok(Self { config, db })
    }

    /// Returns a manager over this session's database.
    pub fn manager<'a>(&'a mut self, logger: &'a Logger, dry_run: bool) -> ReservationManager<'a> {
        let options = ManagerOptions::from_config(&self.config).with_dry_run(dry_run);
        ReservationManager::new(&mut self.db, logger, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roombook::LogLevel;

    fn global_for(data_dir: PathBuf) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: true,
            data_dir: Some(data_dir),
            busy_timeout: None,
            disable_autoinit: false,
            logger: Logger::capturing(LogLevel::Quiet),
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let global = global_for(dir.path().to_path_buf());
        assert_eq!(resolve_data_dir(&global).unwrap(), dir.path());
    }

    #[test]
    fn test_disable_autoinit_refuses_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut global = global_for(dir.path().join("absent"));
        global.disable_autoinit = true;

        let err = open_database(&global, &Config::default(), Access::ReadWrite).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_busy_timeout_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut global = global_for(dir.path().to_path_buf());
        global.busy_timeout = Some(11);

        let config = Config {
            maximum_lock_wait_seconds: Some(3),
            ..Default::default()
        };
        let db = open_database(&global, &config, Access::ReadWrite).unwrap();
        assert_eq!(db.config().busy_timeout, Duration::from_secs(11));

        global.busy_timeout = None;
        let db = open_database(&global, &config, Access::ReadWrite).unwrap();
        assert_eq!(db.config().busy_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_query_session_is_read_only() {
        use chrono::NaiveDate;
        use roombook::{ReservationDraft, ReservationFilter, RoomId, UserId};

        let dir = tempfile::tempdir().unwrap();
        let global = global_for(dir.path().to_path_buf());
        let draft = ReservationDraft::new(
            UserId::new(100),
            RoomId::new(200),
            NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
        );

        // Missing database is still created for a first query
        let session = Session::open_read_only(&global).unwrap();
        assert!(!session.db.config().read_only);
        drop(session);

        let mut session = Session::open(&global).unwrap();
        session.manager(&global.logger, false).create(&draft).unwrap();
        drop(session);

        let mut session = Session::open_read_only(&global).unwrap();
        assert!(session.db.config().read_only);
        let mut manager = session.manager(&global.logger, false);
        assert_eq!(manager.list(&ReservationFilter::default()).unwrap().len(), 1);
        assert!(manager.create(&draft).is_err());
    }
}
