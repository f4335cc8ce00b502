//! Reservation types for tracking room bookings.
//!
//! This module provides the identifiers, the closed status set, the
//! validated date range, and the reservation entity itself, together with
//! the client-supplied draft that create and update operations consume.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage-assigned identity of a reservation.
///
/// # Examples
///
/// ```
/// use roombook::ReservationId;
///
/// let id = ReservationId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw identity.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identity.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the user a reservation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw user identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw user identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the reserved room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Wraps a raw room identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw room identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a reservation.
///
/// `Pending` is the only initial status and `Cancelled` is terminal.
///
/// # Examples
///
/// ```
/// use roombook::ReservationStatus;
///
/// let status: ReservationStatus = "approved".parse().unwrap();
/// assert_eq!(status, ReservationStatus::Approved);
/// assert_eq!(status.to_string(), "APPROVED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Awaiting approval; the only editable status.
    Pending,
    /// The room is committed to this reservation.
    Approved,
    /// An approved reservation that was withdrawn.
    Cancelled,
}

impl ReservationStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Cancelled];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown status '{s}'"),
            }),
        }
    }
}

/// A booking period of whole calendar days.
///
/// Both boundaries are inclusive and `end_date` is strictly after
/// `start_date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::DateRange;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
///
/// let first = DateRange::new(d(26), d(28)).unwrap();
/// let second = DateRange::new(d(28), d(30)).unwrap();
/// assert!(first.overlaps(&second));
///
/// assert!(DateRange::new(d(26), d(26)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Earliest year a booking may touch.
    pub const MIN_YEAR: i32 = 1;
    /// Latest year a booking may touch.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a date range.
    ///
    /// Both dates must fall in years [`Self::MIN_YEAR`] to
    /// [`Self::MAX_YEAR`], where the `YYYY-MM-DD` text form sorts in date
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error for a date outside the supported years, or unless
    /// `end_date` is strictly after `start_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ValidationError> {
        for (field, date) in [("start_date", start_date), ("end_date", end_date)] {
            if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
                return Err(ValidationError {
                    field: field.into(),
                    message: format!(
                        "date {date} is outside years {}-{}",
                        Self::MIN_YEAR,
                        Self::MAX_YEAR
                    ),
                });
            }
        }
        if end_date <= start_date {
            return Err(ValidationError {
                field: "end_date".into(),
                message: format!(
                    "end date {end_date} must be after start date {start_date}"
                ),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Closed-interval intersection test: `s1 <= e2 && s2 <= e1`.
    ///
    /// A range that starts on the day another ends overlaps it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date, self.end_date)
    }
}

/// Client-supplied reservation fields for create and update.
///
/// `id` and `status` are accepted so that they can be rejected: create
/// refuses a supplied status (and, by default, a supplied identity), and
/// update ignores both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// Identity supplied by the client, if any.
    #[serde(default)]
    pub id: Option<ReservationId>,
    /// The booking user.
    pub user_id: UserId,
    /// The booked room.
    pub room_id: RoomId,
    /// First day of the stay.
    pub start_date: NaiveDate,
    /// Last day of the stay.
    pub end_date: NaiveDate,
    /// Status supplied by the client, if any.
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

impl ReservationDraft {
    /// Creates a draft without identity or status.
    #[must_use]
    pub const fn new(
        user_id: UserId,
        room_id: RoomId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            user_id,
            room_id,
            start_date,
            end_date,
            status: None,
        }
    }

    /// Sets the client-supplied identity.
    #[must_use]
    pub const fn with_id(mut self, id: Option<ReservationId>) -> Self {
        self.id = id;
        self
    }

    /// Sets the client-supplied status.
    #[must_use]
    pub const fn with_status(mut self, status: Option<ReservationStatus>) -> Self {
        self.status = status;
        self
    }

    /// Validates the draft's dates into a [`DateRange`].
    ///
    /// # Errors
    ///
    /// Returns an error unless `end_date` is after `start_date`.
    pub fn period(&self) -> Result<DateRange, ValidationError> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A room reservation.
///
/// The identity is absent until storage assigns one on insert.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::{DateRange, Reservation, ReservationStatus, RoomId, UserId};
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
/// )
/// .unwrap();
///
/// let reservation = Reservation::builder(UserId::new(100), RoomId::new(200), period).build();
/// assert_eq!(reservation.status(), ReservationStatus::Pending);
/// assert!(reservation.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Option<ReservationId>,
    user_id: UserId,
    room_id: RoomId,
    #[serde(flatten)]
    period: DateRange,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub const fn builder(user_id: UserId, room_id: RoomId, period: DateRange) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            user_id,
            room_id,
            period,
            status: ReservationStatus::Pending,
        }
    }

    /// Returns the storage identity, if assigned.
    #[must_use]
    pub const fn id(&self) -> Option<ReservationId> {
        self.id
    }

    /// Returns the booking user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the booked room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the booked period.
    #[must_use]
    pub const fn period(&self) -> DateRange {
        self.period
    }

    /// Returns the first day of the stay.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.period.start_date
    }

    /// Returns the last day of the stay.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.period.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns a copy with the given status.
    #[must_use]
    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a copy carrying the storage-assigned identity.
    #[must_use]
    pub(crate) fn with_id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "reservation {id}")?,
            None => write!(f, "new reservation")?,
        }
        write!(
            f,
            " (room {}, user {}, {}, {})",
            self.room_id, self.user_id, self.period, self.status
        )
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    user_id: UserId,
    room_id: RoomId,
    period: DateRange,
    status: ReservationStatus,
}

impl ReservationBuilder {
    /// Sets the identity.
    #[must_use]
    pub const fn id(mut self, id: Option<ReservationId>) -> Self {
        self.id = id;
        self
    }

    /// Sets the status. Defaults to `Pending`.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the reservation.
    #[must_use]
    pub const fn build(self) -> Reservation {
        Reservation {
            id: self.id,
            user_id: self.user_id,
            room_id: self.room_id,
            period: self.period,
            status: self.status,
        }
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;
