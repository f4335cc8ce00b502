//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to a [`ReservationStore`].

use crate::database::ReservationStore;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Description of the action taken (or that would be taken in dry-run).
    pub action_taken: String,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation after the action. For deletions, the removed
    /// reservation. In dry-run mode a new reservation has no identity.
    pub reservation: Reservation,
}

/// Executes operation plans against a store.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating the plan's target still exists without writing).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rusqlite::Connection;
/// use roombook::database::initialize_schema;
/// use roombook::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use roombook::{DateRange, Operation, Reservation, RoomId, UserId};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
/// )
/// .unwrap();
/// let plan = OperationPlan::new(
///     Operation::Create,
///     PlanAction::Insert(Reservation::builder(UserId::new(100), RoomId::new(200), period).build()),
/// );
///
/// let preview = PlanExecutor::new(&conn).dry_run().execute(&plan).unwrap();
/// assert!(preview.reservation.id().is_none());
///
/// let result = PlanExecutor::new(&conn).execute(&plan).unwrap();
/// assert!(result.reservation.id().is_some());
/// ```
pub struct PlanExecutor<'a, S: ReservationStore + ?Sized> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: ReservationStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Sets dry-run mode from a flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the plan targets a reservation that no
    /// longer exists, or an error if the store fails.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let reservation = if self.dry_run {
            self.validate_action(&plan.action)?;
            plan.action.outcome()
        } else {
            self.execute_action(&plan.action)?
        };

        Ok(ExecutionResult {
            dry_run: self.dry_run,
            action_taken: plan.description(),
            warnings: plan.warnings.clone(),
            reservation,
        })
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Reservation> {
        match action {
            PlanAction::Insert(reservation) | PlanAction::Replace(reservation) => {
                self.store.save(reservation)
            }
            PlanAction::SetStatus { .. } => self.store.save(&action.outcome()),
            PlanAction::Delete(reservation) => {
                let id = stored_id(reservation)?;
                if !self.store.delete_by_id(id)? {
                    return Err(Error::reservation_not_found(id));
                }
                Ok(reservation.clone())
            }
        }
    }

    fn validate_action(&self, action: &PlanAction) -> Result<()> {
        match action {
            PlanAction::Insert(_) => Ok(()),
            PlanAction::Replace(reservation)
            | PlanAction::SetStatus { reservation, .. }
            | PlanAction::Delete(reservation) => {
                let id = stored_id(reservation)?;
                if self.store.exists_by_id(id)? {
                    Ok(())
                } else {
                    Err(Error::reservation_not_found(id))
                }
            }
        }
    }
}

fn stored_id(reservation: &Reservation) -> Result<ReservationId> {
    reservation.id().ok_or_else(|| Error::Validation {
        field: "id".into(),
        message: "reservation has not been stored".into(),
    })
}
