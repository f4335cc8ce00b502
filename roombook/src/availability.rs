//! Room availability checks.
//!
//! A room is available for a period when no APPROVED reservation on that
//! room intersects it. Boundary days count, so a stay that starts on the
//! day another ends is a conflict. Nothing here mutates the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::database::ReservationStore;
use crate::error::Result;
use crate::reservation::{DateRange, ReservationId, ReservationStatus, RoomId};

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    /// No approved reservation overlaps the period.
    Available,
    /// At least one approved reservation overlaps the period.
    Reserved,
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::Reserved => write!(f, "RESERVED"),
        }
    }
}

/// Availability of a room for a period, with the reservations in the way.
///
/// # Examples
///
/// ```
/// use roombook::{AvailabilityReport, AvailabilityStatus, ReservationId};
///
/// let report = AvailabilityReport::from_conflicts(vec![ReservationId::new(3)]);
/// assert_eq!(report.status, AvailabilityStatus::Reserved);
/// assert_eq!(report.message, "Not available");
/// assert!(!report.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Machine-readable outcome.
    pub status: AvailabilityStatus,
    /// Human-readable outcome.
    pub message: String,
    /// Approved reservations overlapping the period, ordered by identity.
    pub conflicting: Vec<ReservationId>,
}

impl AvailabilityReport {
    /// Builds a report from the overlapping reservation identities.
    #[must_use]
    pub fn from_conflicts(conflicting: Vec<ReservationId>) -> Self {
        if conflicting.is_empty() {
            Self {
                status: AvailabilityStatus::Available,
                message: "Available".to_string(),
                conflicting,
            }
        } else {
            Self {
                status: AvailabilityStatus::Reserved,
                message: "Not available".to_string(),
                conflicting,
            }
        }
    }

    /// Returns true if nothing conflicts.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == AvailabilityStatus::Available
    }
}

/// Returns the approved reservations on `room_id` overlapping `period`.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn find_conflicts<S>(
    store: &S,
    room_id: RoomId,
    period: &DateRange,
) -> Result<Vec<ReservationId>>
where
    S: ReservationStore + ?Sized,
{
    let conflicting = store.find_conflicting(room_id, period, ReservationStatus::Approved)?;
    if !conflicting.is_empty() {
        log::debug!("room {room_id} over {period} conflicts with {conflicting:?}");
    }
    Ok(conflicting)
}

/// Returns true if no approved reservation on `room_id` overlaps `period`.
///
/// # Errors
///
/// Returns an error if the store query fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rusqlite::Connection;
/// use roombook::availability::is_available;
/// use roombook::database::initialize_schema;
/// use roombook::{DateRange, RoomId};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
/// )
/// .unwrap();
/// assert!(is_available(&conn, RoomId::new(200), &period).unwrap());
/// ```
pub fn is_available<S>(store: &S, room_id: RoomId, period: &DateRange) -> Result<bool>
where
    S: ReservationStore + ?Sized,
{
    Ok(find_conflicts(store, room_id, period)?.is_empty())
}

/// Checks availability and reports the conflicting reservations.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn check_availability<S>(
    store: &S,
    room_id: RoomId,
    period: &DateRange,
) -> Result<AvailabilityReport>
where
    S: ReservationStore + ?Sized,
{
    find_conflicts(store, room_id, period).map(AvailabilityReport::from_conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::october_period;
    use crate::database::MockReservationStore;
    use mockall::predicate::eq;

    #[test]
    fn test_available_when_no_conflicts() {
        let mut store = MockReservationStore::new();
        store
            .expect_find_conflicting()
            .withf(|room, _, status| {
                *room == RoomId::new(200) && *status == ReservationStatus::Approved
            })
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));

        assert!(is_available(&store, RoomId::new(200), &october_period(26, 28)).unwrap());
    }

    #[test]
    fn test_reserved_when_conflicts() {
        let mut store = MockReservationStore::new();
        store
            .expect_find_conflicting()
            .with(
                eq(RoomId::new(200)),
                eq(october_period(27, 29)),
                eq(ReservationStatus::Approved),
            )
            .returning(|_, _, _| Ok(vec![ReservationId::new(1), ReservationId::new(4)]));

        let report = check_availability(&store, RoomId::new(200), &october_period(27, 29)).unwrap();
        assert_eq!(report.status, AvailabilityStatus::Reserved);
        assert_eq!(report.message, "Not available");
        assert_eq!(
            report.conflicting,
            vec![ReservationId::new(1), ReservationId::new(4)]
        );
    }

    #[test]
    fn test_store_errors_propagate() {
        let mut store = MockReservationStore::new();
        store.expect_find_conflicting().returning(|_, _, _| {
            Err(crate::Error::LockTimeout { seconds: 5 })
        });

        let err = is_available(&store, RoomId::new(1), &october_period(1, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::LockTimeout { .. }));
    }

    #[test]
    fn test_report_json_shape() {
        let report = AvailabilityReport::from_conflicts(Vec::new());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "AVAILABLE");
        assert_eq!(value["message"], "Available");
    }
}
