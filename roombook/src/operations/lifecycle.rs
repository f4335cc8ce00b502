//! Planning for the reservation lifecycle.
//!
//! Each function reads what it needs from a [`ReservationStore`], applies
//! the operation's guards in a fixed order, and returns the plan for the
//! single write the operation performs. Nothing here writes.
//!
//! Error order follows the operation contract: a missing reservation is
//! reported before a status conflict, and a status conflict before
//! malformed dates.

use crate::availability;
use crate::database::ReservationStore;
use crate::error::{Error, Operation, Result};
use crate::reservation::{Reservation, ReservationDraft, ReservationId};

use super::plan::{OperationPlan, PlanAction};
use super::transitions::{guard_approve, guard_cancel, guard_update};

/// Message carried by an overlap rejection.
pub const OVERLAP_MESSAGE: &str = "approval would overlap an existing approved reservation";

fn load<S>(store: &S, id: ReservationId) -> Result<Reservation>
where
    S: ReservationStore + ?Sized,
{
    store
        .find_by_id(id)?
        .ok_or_else(|| Error::reservation_not_found(id))
}

/// Plans inserting a new PENDING reservation.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the draft carries a status, carries an
/// identity while `reject_client_id` is set, or has `end_date` not after
/// `start_date`.
pub fn plan_create(draft: &ReservationDraft, reject_client_id: bool) -> Result<OperationPlan> {
    if let Some(status) = draft.status {
        return Err(Error::Validation {
            field: "status".into(),
            message: format!("status must not be supplied on create (got {status})"),
        });
    }
    if reject_client_id {
        if let Some(id) = draft.id {
            return Err(Error::Validation {
                field: "id".into(),
                message: format!("id must not be supplied on create (got {id})"),
            });
        }
    }

    let period = draft.period()?;
    let reservation = Reservation::builder(draft.user_id, draft.room_id, period).build();

    let mut plan = OperationPlan::new(Operation::Create, PlanAction::Insert(reservation));
    if let Some(id) = draft.id {
        plan = plan.add_warning(format!("client-supplied id {id} ignored"));
    }
    Ok(plan)
}

/// Plans replacing the fields of a PENDING reservation.
///
/// The draft's identity and status are ignored; the result keeps `id` and
/// is PENDING.
///
/// # Errors
///
/// Returns [`Error::NotFound`], then [`Error::InvalidState`] unless the
/// reservation is PENDING, then [`Error::Validation`] for bad dates.
pub fn plan_update<S>(store: &S, id: ReservationId, draft: &ReservationDraft) -> Result<OperationPlan>
where
    S: ReservationStore + ?Sized,
{
    let existing = load(store, id)?;
    let status = guard_update(&existing)?;
    let period = draft.period()?;

    let replacement = Reservation::builder(draft.user_id, draft.room_id, period)
        .id(Some(id))
        .status(status)
        .build();

    let mut plan = OperationPlan::new(Operation::Update, PlanAction::Replace(replacement));
    if let Some(status) = draft.status {
        plan = plan.add_warning(format!("supplied status {status} ignored"));
    }
    if let Some(other) = draft.id.filter(|other| *other != id) {
        plan = plan.add_warning(format!("supplied id {other} ignored"));
    }
    Ok(plan)
}

/// Plans removing a reservation in any status.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the reservation does not exist.
pub fn plan_delete<S>(store: &S, id: ReservationId) -> Result<OperationPlan>
where
    S: ReservationStore + ?Sized,
{
    let existing = load(store, id)?;
    Ok(OperationPlan::new(Operation::Delete, PlanAction::Delete(existing)))
}

/// Plans approving a PENDING reservation whose room is free.
///
/// The reservation under approval is PENDING, so it never appears among
/// the APPROVED conflicts it is checked against.
///
/// # Errors
///
/// Returns [`Error::NotFound`], then [`Error::InvalidState`] unless the
/// reservation is PENDING, then [`Error::ReservationConflict`] if an
/// approved reservation on the same room overlaps.
pub fn plan_approve<S>(store: &S, id: ReservationId) -> Result<OperationPlan>
where
    S: ReservationStore + ?Sized,
{
    let existing = load(store, id)?;
    let status = guard_approve(&existing)?;

    let conflicting = availability::find_conflicts(store, existing.room_id(), &existing.period())?;
    if !conflicting.is_empty() {
        return Err(Error::ReservationConflict {
            details: OVERLAP_MESSAGE.to_string(),
            conflicting,
        });
    }

    Ok(OperationPlan::new(
        Operation::Approve,
        PlanAction::SetStatus {
            reservation: existing,
            status,
        },
    ))
}

/// Plans cancelling an APPROVED reservation.
///
/// # Errors
///
/// Returns [`Error::NotFound`], then [`Error::InvalidState`] unless the
/// reservation is APPROVED.
pub fn plan_cancel<S>(store: &S, id: ReservationId) -> Result<OperationPlan>
where
    S: ReservationStore + ?Sized,
{
    let existing = load(store, id)?;
    let status = guard_cancel(&existing)?;

    Ok(OperationPlan::new(
        Operation::Cancel,
        PlanAction::SetStatus {
            reservation: existing,
            status,
        },
    ))
}
