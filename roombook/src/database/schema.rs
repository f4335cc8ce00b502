//! Database schema definitions and SQL constants.
//!
//! This module contains the table definitions, indices, and statements
//! used by the reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are stored as ISO-8601 text so that string comparison orders them
/// chronologically. The CHECK constraints restate the entity invariants.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        room_id INTEGER NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('PENDING', 'APPROVED', 'CANCELLED')),
        CHECK (end_date > start_date)
    )";

/// Index serving the conflict query.
pub const CREATE_ROOM_STATUS_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_room_status
    ON reservations(room_id, status, start_date, end_date)";

/// Index serving lists filtered by user.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub(super) const SELECT_BY_ID: &str = r"
    SELECT id, user_id, room_id, start_date, end_date, status
    FROM reservations
    WHERE id = ?1
";

pub(super) const SELECT_FILTERED: &str = r"
    SELECT id, user_id, room_id, start_date, end_date, status
    FROM reservations
    WHERE (?1 IS NULL OR room_id = ?1)
      AND (?2 IS NULL OR user_id = ?2)
    ORDER BY id
    LIMIT ?3 OFFSET ?4
";

// Closed-interval intersection: start <= other.end AND end >= other.start
pub(super) const SELECT_CONFLICTING: &str = r"
    SELECT id
    FROM reservations
    WHERE room_id = ?1
      AND status = ?2
      AND start_date <= ?4
      AND end_date >= ?3
    ORDER BY id
";

pub(super) const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (user_id, room_id, start_date, end_date, status)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

pub(super) const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET user_id = ?2, room_id = ?3, start_date = ?4, end_date = ?5, status = ?6
    WHERE id = ?1
";

pub(super) const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM reservations WHERE id = ?1)";

pub(super) const DELETE_BY_ID: &str = "DELETE FROM reservations WHERE id = ?1";
