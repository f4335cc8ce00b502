//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{DateRange, Reservation, RoomId, UserId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Returns a day in October 2025.
///
/// # Panics
///
/// Panics if `day` is not a valid day of October.
#[must_use]
pub fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

/// Returns an October 2025 period.
///
/// # Panics
///
/// Panics unless `end_day` is after `start_day`.
#[must_use]
pub fn october_period(start_day: u32, end_day: u32) -> DateRange {
    DateRange::new(october(start_day), october(end_day)).unwrap()
}

/// Creates an unsaved pending reservation for an October 2025 period.
#[must_use]
pub fn test_reservation(room: i64, user: i64, start_day: u32, end_day: u32) -> Reservation {
    Reservation::builder(
        UserId::new(user),
        RoomId::new(room),
        october_period(start_day, end_day),
    )
    .build()
}
