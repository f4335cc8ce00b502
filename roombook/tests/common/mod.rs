//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for driving the
//! roombook lifecycle against a real temporary database.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use roombook::database::{Database, DatabaseConfig};
use roombook::operations::{ManagerOptions, ReservationManager};
use roombook::{DateRange, LogLevel, Logger, ReservationDraft, RoomId, UserId};

/// A temporary data directory with an open database and a capturing
/// logger.
pub struct TestContext {
    dir: TempDir,
    /// The open database.
    pub db: Database,
    /// Logger that records every line for assertions.
    pub logger: Logger,
    /// Options handed to each manager.
    pub options: ManagerOptions,
}

impl TestContext {
    /// Creates a fresh data directory and database.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
        Self {
            dir,
            db,
            logger: Logger::capturing(LogLevel::Verbose),
            options: ManagerOptions::default(),
        }
    }

    /// Returns the data directory.
    #[allow(dead_code)]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the database file path.
    #[allow(dead_code)]
    pub fn db_path(&self) -> PathBuf {
        self.db.config().path.clone()
    }

    /// Returns a manager over this context's database.
    pub fn manager(&mut self) -> ReservationManager<'_> {
        ReservationManager::new(&mut self.db, &self.logger, self.options)
    }
}

/// Returns a day in October 2025.
pub fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

/// Returns an October 2025 period.
#[allow(dead_code)]
pub fn october_period(start_day: u32, end_day: u32) -> DateRange {
    DateRange::new(october(start_day), october(end_day)).unwrap()
}

/// Builds a draft for an October 2025 stay.
pub fn draft(room: i64, user: i64, start_day: u32, end_day: u32) -> ReservationDraft {
    ReservationDraft::new(
        UserId::new(user),
        RoomId::new(room),
        october(start_day),
        october(end_day),
    )
}
