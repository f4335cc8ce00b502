//! Error types for the roombook library.
//!
//! This module provides the error hierarchy for all operations in the
//! roombook library, using `thiserror` for ergonomic error handling.
//! Every error can be classified into an [`ErrorKind`], which is what a
//! transport layer maps to its own status signals.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::{ReservationId, ReservationStatus};

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Malformed input was supplied.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The operation is not permitted in the reservation's current status.
    #[error("cannot {operation} reservation {id}: status is {status}")]
    InvalidState {
        /// The reservation the operation targeted.
        id: ReservationId,
        /// The attempted operation.
        operation: Operation,
        /// The status the reservation was found in.
        status: ReservationStatus,
    },

    /// Approving would double-book a room.
    #[error("reservation conflict: {details}")]
    ReservationConflict {
        /// Details about the conflict.
        details: String,
        /// Identities of the approved reservations that overlap.
        conflicting: Vec<ReservationId>,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Semantic classification of an [`Error`].
///
/// Transports map on this rather than on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced reservation does not exist.
    NotFound,
    /// The input was malformed.
    Validation,
    /// The operation is not allowed in the current state.
    Conflict,
    /// Storage, configuration or I/O failure.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Validation => write!(f, "validation"),
            Self::Conflict => write!(f, "conflict"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// A lifecycle operation, used for error reporting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a new reservation.
    Create,
    /// Edit a pending reservation.
    Update,
    /// Remove a reservation.
    Delete,
    /// Move a pending reservation to approved.
    Approve,
    /// Move an approved reservation to cancelled.
    Cancel,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Approve => write!(f, "approve"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Builds the not-found error for a reservation identity.
    #[must_use]
    pub fn reservation_not_found(id: ReservationId) -> Self {
        Self::NotFound {
            resource: format!("reservation {id}"),
        }
    }

    /// Classifies this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Error, ErrorKind};
    ///
    /// let err = Error::NotFound { resource: "reservation 7".into() };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::InvalidState { .. } | Self::ReservationConflict { .. } => ErrorKind::Conflict,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::LockTimeout { .. }
            | Self::DataDirectoryNotFound { .. }
            | Self::DatabaseCorruption { .. }
            | Self::UnsupportedSchemaVersion { .. } => ErrorKind::Internal,
        }
    }

    /// Check if error indicates a missing reservation.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    /// Check if error is a state or overlap conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict)
    }
}
