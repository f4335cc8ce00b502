#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for managing room reservations with an approval lifecycle.
//!
//! Reservations are created PENDING, may be edited while PENDING, and are
//! either approved (when no approved reservation overlaps them on the same
//! room) or deleted. Approved reservations can be cancelled. Every
//! mutation runs inside one immediate SQLite transaction, so concurrent
//! approvals of overlapping periods cannot both succeed.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`ReservationDraft`] and [`ReservationStatus`]: the
//!   reservation record and its lifecycle status
//! - [`DateRange`]: a validated `[start_date, end_date]` period
//! - [`ReservationFilter`]: room/user filtering with pagination
//! - [`ReservationManager`]: the lifecycle operations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use roombook::DateRange;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
//! let first = DateRange::new(day(26), day(28)).unwrap();
//! let second = DateRange::new(day(28), day(30)).unwrap();
//!
//! // Boundaries are inclusive
//! assert!(first.overlaps(&second));
//! assert!(DateRange::new(day(28), day(28)).is_err());
//! ```

pub mod availability;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod logging;
pub mod operations;
pub mod reservation;

// Re-export key types at crate root for convenience
pub use availability::{AvailabilityReport, AvailabilityStatus};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Operation, Result};
pub use filter::ReservationFilter;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ExecutionResult, ManagerOptions, OperationPlan, PlanAction, PlanExecutor, ReservationManager,
};
pub use reservation::{
    DateRange, Reservation, ReservationDraft, ReservationId, ReservationStatus, RoomId, UserId,
    ValidationError,
};
