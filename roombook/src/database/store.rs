//! The reservation storage contract and its `SQLite` implementation.
//!
//! [`ReservationStore`] is implemented for [`rusqlite::Connection`]. A
//! [`rusqlite::Transaction`] dereferences to a connection, so the same
//! methods run inside the immediate transaction that guards each
//! lifecycle mutation.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, ToSql};

use crate::error::{Error, Result};
use crate::filter::ReservationFilter;
use crate::reservation::{
    DateRange, Reservation, ReservationId, ReservationStatus, RoomId, UserId,
};

use super::schema::{
    DELETE_BY_ID, EXISTS_BY_ID, INSERT_RESERVATION, SELECT_BY_ID, SELECT_CONFLICTING,
    SELECT_FILTERED, UPDATE_RESERVATION,
};

/// Persistence operations the lifecycle manager and availability checker
/// depend on.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Looks up a reservation by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Returns one page of reservations matching `filter`, ordered by
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_all(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>>;

    /// Returns identities of reservations on `room_id` with `status` whose
    /// period intersects `period`, boundaries inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_conflicting(
        &self,
        room_id: RoomId,
        period: &DateRange,
        status: ReservationStatus,
    ) -> Result<Vec<ReservationId>>;

    /// Inserts a reservation without identity, or updates the one with the
    /// given identity. Returns the stored reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when updating an identity that does not
    /// exist, or an error if the statement fails.
    fn save(&self, reservation: &Reservation) -> Result<Reservation>;

    /// Returns true if a reservation with this identity exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn exists_by_id(&self, id: ReservationId) -> Result<bool>;

    /// Removes a reservation. Returns false if nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    fn delete_by_id(&self, id: ReservationId) -> Result<bool>;
}

impl ToSql for ReservationStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ReservationStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for ReservationId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl FromSql for ReservationId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::new)
    }
}

impl ToSql for RoomId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl ToSql for UserId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

/// Expects columns: id, `user_id`, `room_id`, `start_date`, `end_date`, status
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: ReservationId = row.get(0)?;
    let user_id: i64 = row.get(1)?;
    let room_id: i64 = row.get(2)?;
    let start_date = row.get(3)?;
    let end_date = row.get(4)?;
    let status: ReservationStatus = row.get(5)?;

    let period = DateRange::new(start_date, end_date).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(
        Reservation::builder(UserId::new(user_id), RoomId::new(room_id), period)
            .id(Some(id))
            .status(status)
            .build(),
    )
}

impl ReservationStore for Connection {
    fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        let mut stmt = self.prepare_cached(SELECT_BY_ID)?;
        Ok(stmt.query_row(params![id], row_to_reservation).optional()?)
    }

    fn find_all(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let limit = i64::from(filter.page_size);
        let offset = i64::try_from(filter.offset()).unwrap_or(i64::MAX);

        let mut stmt = self.prepare_cached(SELECT_FILTERED)?;
        let rows = stmt.query_map(
            params![filter.room_id, filter.user_id, limit, offset],
            row_to_reservation,
        )?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }

    fn find_conflicting(
        &self,
        room_id: RoomId,
        period: &DateRange,
        status: ReservationStatus,
    ) -> Result<Vec<ReservationId>> {
        let mut stmt = self.prepare_cached(SELECT_CONFLICTING)?;
        let rows = stmt.query_map(
            params![room_id, status, period.start_date(), period.end_date()],
            |row| row.get(0),
        )?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    fn save(&self, reservation: &Reservation) -> Result<Reservation> {
        match reservation.id() {
            None => {
                self.execute(
                    INSERT_RESERVATION,
                    params![
                        reservation.user_id(),
                        reservation.room_id(),
                        reservation.start_date(),
                        reservation.end_date(),
                        reservation.status(),
                    ],
                )?;
                let id = ReservationId::new(self.last_insert_rowid());
                log::debug!("inserted reservation {id}");
                Ok(reservation.clone().with_id(id))
            }
            Some(id) => {
                let rows = self.execute(
                    UPDATE_RESERVATION,
                    params![
                        id,
                        reservation.user_id(),
                        reservation.room_id(),
                        reservation.start_date(),
                        reservation.end_date(),
                        reservation.status(),
                    ],
                )?;
                if rows == 0 {
                    return Err(Error::reservation_not_found(id));
                }
                log::debug!("updated reservation {id}");
                Ok(reservation.clone())
            }
        }
    }

    fn exists_by_id(&self, id: ReservationId) -> Result<bool> {
        let exists: bool = self.query_row(EXISTS_BY_ID, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    fn delete_by_id(&self, id: ReservationId) -> Result<bool> {
        let rows = self.execute(DELETE_BY_ID, params![id])?;
        Ok(rows > 0)
    }
}
