//! Status guards for lifecycle operations.
//!
//! | operation | allowed from | moves to  |
//! |-----------|--------------|-----------|
//! | update    | PENDING      | PENDING   |
//! | approve   | PENDING      | APPROVED  |
//! | cancel    | APPROVED     | CANCELLED |
//! | delete    | any          | removed   |
//!
//! Create has no source status; it always yields PENDING.

use crate::error::{Error, Operation, Result};
use crate::reservation::{Reservation, ReservationId, ReservationStatus};

/// Returns true if `operation` may be applied to a reservation in `status`.
#[must_use]
pub const fn permits(operation: Operation, status: ReservationStatus) -> bool {
    match operation {
        Operation::Create => false,
        Operation::Update | Operation::Approve => matches!(status, ReservationStatus::Pending),
        Operation::Cancel => matches!(status, ReservationStatus::Approved),
        Operation::Delete => true,
    }
}

/// Returns the status a permitted `operation` leaves behind.
///
/// `None` for delete, which leaves nothing, and for create, which has no
/// source status.
#[must_use]
pub const fn target_status(operation: Operation) -> Option<ReservationStatus> {
    match operation {
        Operation::Update => Some(ReservationStatus::Pending),
        Operation::Approve => Some(ReservationStatus::Approved),
        Operation::Cancel => Some(ReservationStatus::Cancelled),
        Operation::Create | Operation::Delete => None,
    }
}

fn guard(operation: Operation, reservation: &Reservation) -> Result<ReservationStatus> {
    if permits(operation, reservation.status()) {
        return Ok(target_status(operation).unwrap_or(reservation.status()));
    }
    Err(Error::InvalidState {
        // Guards only see stored reservations
        id: reservation.id().unwrap_or(ReservationId::new(0)),
        operation,
        status: reservation.status(),
    })
}

/// Update requires PENDING.
///
/// Returns the status the reservation moves to.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] otherwise.
pub fn guard_update(reservation: &Reservation) -> Result<ReservationStatus> {
    guard(Operation::Update, reservation)
}

/// Approve requires PENDING. Overlap is checked separately.
///
/// Returns the status the reservation moves to.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] otherwise.
pub fn guard_approve(reservation: &Reservation) -> Result<ReservationStatus> {
    guard(Operation::Approve, reservation)
}

/// Cancel requires APPROVED.
///
/// Returns the status the reservation moves to.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] otherwise.
pub fn guard_cancel(reservation: &Reservation) -> Result<ReservationStatus> {
    guard(Operation::Cancel, reservation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::test_reservation;
    use proptest::prelude::*;

    fn stored(status: ReservationStatus) -> Reservation {
        test_reservation(200, 100, 26, 28)
            .with_id(ReservationId::new(5))
            .with_status(status)
    }

    #[test]
    fn test_update_only_from_pending() {
        assert!(guard_update(&stored(ReservationStatus::Pending)).is_ok());

        let err = guard_update(&stored(ReservationStatus::Approved)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot update reservation 5: status is APPROVED"
        );
        assert!(guard_update(&stored(ReservationStatus::Cancelled)).is_err());
    }

    #[test]
    fn test_approve_only_from_pending() {
        assert!(guard_approve(&stored(ReservationStatus::Pending)).is_ok());
        assert!(guard_approve(&stored(ReservationStatus::Approved)).is_err());
        assert!(guard_approve(&stored(ReservationStatus::Cancelled)).is_err());
    }

    #[test]
    fn test_cancel_only_from_approved() {
        assert!(guard_cancel(&stored(ReservationStatus::Approved)).is_ok());

        let err = guard_cancel(&stored(ReservationStatus::Pending)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidState {
                operation: Operation::Cancel,
                status: ReservationStatus::Pending,
                ..
            }
        ));
        assert!(guard_cancel(&stored(ReservationStatus::Cancelled)).is_err());
    }

    #[test]
    fn test_guards_return_next_status() {
        assert_eq!(
            guard_update(&stored(ReservationStatus::Pending)).unwrap(),
            ReservationStatus::Pending
        );
        assert_eq!(
            guard_approve(&stored(ReservationStatus::Pending)).unwrap(),
            ReservationStatus::Approved
        );
        assert_eq!(
            guard_cancel(&stored(ReservationStatus::Approved)).unwrap(),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn test_cancelled_is_terminal() {
        for operation in [Operation::Update, Operation::Approve, Operation::Cancel] {
            assert!(!permits(operation, ReservationStatus::Cancelled));
        }
        assert!(permits(Operation::Delete, ReservationStatus::Cancelled));
    }

    fn operation_strategy() -> impl Strategy<Value = Operation> {
        prop::sample::select(vec![
            Operation::Create,
            Operation::Update,
            Operation::Delete,
            Operation::Approve,
            Operation::Cancel,
        ])
    }

    proptest! {
        // Every rejected guard reports the operation and status it saw
        #[test]
        fn guard_rejections_carry_context(
            operation in operation_strategy(),
            status in prop::sample::select(ReservationStatus::ALL.to_vec()),
        ) {
            let reservation = stored(status);
            match guard(operation, &reservation) {
                Ok(_) => prop_assert!(permits(operation, status)),
                Err(Error::InvalidState { id, operation: op, status: seen }) => {
                    prop_assert!(!permits(operation, status));
                    prop_assert_eq!(id, ReservationId::new(5));
                    prop_assert_eq!(op, operation);
                    prop_assert_eq!(seen, status);
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }

        // A permitted transition never leaves a status that permits the same
        // status-changing operation again
        #[test]
        fn transitions_are_not_repeatable(
            operation in prop::sample::select(vec![Operation::Approve, Operation::Cancel]),
            status in prop::sample::select(ReservationStatus::ALL.to_vec()),
        ) {
            if permits(operation, status) {
                let next = target_status(operation).unwrap();
                prop_assert!(!permits(operation, next));
            }
        }
    }
}
