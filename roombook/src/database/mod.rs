//! Database layer for persistent storage of room reservations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, the [`ReservationStore`] contract, and
//! the immediate-transaction helper that makes each lifecycle mutation
//! atomic.
//!
//! # Examples
//!
//! ```no_run
//! use roombook::database::{Database, DatabaseConfig, ReservationStore};
//! use roombook::ReservationFilter;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
//!
//! for reservation in db.connection().find_all(&ReservationFilter::default()).unwrap() {
//!     println!("{reservation}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod schema;
mod store;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use store::ReservationStore;

#[cfg(test)]
pub(crate) use store::MockReservationStore;
