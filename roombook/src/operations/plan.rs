//! Plan types for lifecycle operations.
//!
//! A plan describes the single write an operation will perform once its
//! guards have passed, without performing it.

use crate::error::Operation;
use crate::reservation::{Reservation, ReservationStatus};

/// The write a plan performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Store a new reservation; storage assigns the identity.
    Insert(Reservation),

    /// Overwrite the fields of a stored reservation.
    Replace(Reservation),

    /// Move a stored reservation to a new status.
    SetStatus {
        /// The reservation as currently stored.
        reservation: Reservation,
        /// The status to write.
        status: ReservationStatus,
    },

    /// Remove a stored reservation.
    Delete(Reservation),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Insert(r) => format!(
                "Insert reservation for room {} ({})",
                r.room_id(),
                r.period()
            ),
            Self::Replace(r) => format!("Replace fields of {r}"),
            Self::SetStatus {
                reservation,
                status,
            } => format!(
                "Set status of {} from {} to {status}",
                describe_target(reservation),
                reservation.status()
            ),
            Self::Delete(r) => format!("Delete {r}"),
        }
    }

    /// Returns the reservation as it will look after the action.
    #[must_use]
    pub fn outcome(&self) -> Reservation {
        match self {
            Self::Insert(r) | Self::Replace(r) | Self::Delete(r) => r.clone(),
            Self::SetStatus {
                reservation,
                status,
            } => reservation.clone().with_status(*status),
        }
    }
}

fn describe_target(reservation: &Reservation) -> String {
    reservation
        .id()
        .map_or_else(|| "new reservation".to_string(), |id| format!("reservation {id}"))
}

/// A complete operation plan.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::operations::{OperationPlan, PlanAction};
/// use roombook::{DateRange, Operation, Reservation, RoomId, UserId};
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
/// )
/// .unwrap();
/// let reservation = Reservation::builder(UserId::new(100), RoomId::new(200), period).build();
///
/// let plan = OperationPlan::new(Operation::Create, PlanAction::Insert(reservation))
///     .add_warning("client-supplied id ignored");
///
/// assert_eq!(plan.operation, Operation::Create);
/// assert_eq!(plan.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// The lifecycle operation this plan carries out.
    pub operation: Operation,

    /// The write to perform.
    pub action: PlanAction,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a plan for `operation` performing `action`.
    #[must_use]
    pub const fn new(operation: Operation, action: PlanAction) -> Self {
        Self {
            operation,
            action,
            warnings: Vec::new(),
        }
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns a human-readable description of the plan.
    #[must_use]
    pub fn description(&self) -> String {
        self.action.description()
    }
}
