//! Search criteria for listing reservations.

use serde::{Deserialize, Serialize};

use crate::reservation::{RoomId, UserId, ValidationError};

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page number used when none is requested.
pub const DEFAULT_PAGE_NUMBER: u32 = 0;

/// Filter and page selection for listing reservations.
///
/// Supplied fields are combined with AND. Results are ordered by identity
/// so that paging over an unchanged store is stable.
///
/// # Examples
///
/// ```
/// use roombook::{ReservationFilter, RoomId};
///
/// let filter = ReservationFilter::default()
///     .with_room(RoomId::new(200))
///     .with_page(5, 2);
///
/// assert_eq!(filter.offset(), 10);
/// assert!(filter.user_id.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationFilter {
    /// Only reservations for this room.
    pub room_id: Option<RoomId>,
    /// Only reservations for this user.
    pub user_id: Option<UserId>,
    /// Maximum number of results per page.
    pub page_size: u32,
    /// Zero-based page index.
    pub page_number: u32,
}

impl Default for ReservationFilter {
    fn default() -> Self {
        Self {
            room_id: None,
            user_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl ReservationFilter {
    /// Restricts results to a room.
    #[must_use]
    pub const fn with_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Restricts results to a user.
    #[must_use]
    pub const fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Selects a page.
    #[must_use]
    pub const fn with_page(mut self, page_size: u32, page_number: u32) -> Self {
        self.page_size = page_size;
        self.page_number = page_number;
        self
    }

    /// Number of rows skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page_size) * u64::from(self.page_number)
    }

    /// Checks the page size against an upper bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is zero or exceeds `max_page_size`.
    pub fn validate(&self, max_page_size: u32) -> Result<(), ValidationError> {
        if self.page_size == 0 {
            return Err(ValidationError {
                field: "page_size".into(),
                message: "page size must be positive".into(),
            });
        }
        if self.page_size > max_page_size {
            return Err(ValidationError {
                field: "page_size".into(),
                message: format!(
                    "page size {} exceeds maximum of {max_page_size}",
                    self.page_size
                ),
            });
        }
        Ok(())
    }
}
