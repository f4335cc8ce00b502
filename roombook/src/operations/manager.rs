//! The reservation lifecycle manager.
//!
//! [`ReservationManager`] is the entry point for every lifecycle
//! operation. Each mutation plans and executes inside one immediate
//! transaction, so the read, guards, availability query, and write of an
//! approval cannot interleave with a competing approval.

use rusqlite::Connection;

use crate::availability::{self, AvailabilityReport};
use crate::config::Config;
use crate::database::{Database, ReservationStore};
use crate::error::{Error, Operation, Result};
use crate::filter::ReservationFilter;
use crate::logging::Logger;
use crate::reservation::{DateRange, Reservation, ReservationDraft, ReservationId, RoomId};

use super::executor::{ExecutionResult, PlanExecutor};
use super::lifecycle::{plan_approve, plan_cancel, plan_create, plan_delete, plan_update};
use super::plan::OperationPlan;

/// Behavior switches for [`ReservationManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Reject drafts that carry an identity on create.
    pub reject_client_id: bool,
    /// Upper bound on requested page sizes.
    pub max_page_size: u32,
    /// Plan and validate mutations without writing.
    pub dry_run: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            reject_client_id: true,
            max_page_size: crate::config::DEFAULT_MAX_PAGE_SIZE,
            dry_run: false,
        }
    }
}

impl ManagerOptions {
    /// Derives options from a resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            reject_client_id: config.reject_client_id.unwrap_or(true),
            max_page_size: config.max_page_size(),
            dry_run: false,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Owns the lifecycle rules for reservations.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::database::{Database, DatabaseConfig};
/// use roombook::operations::{ManagerOptions, ReservationManager};
/// use roombook::{LogLevel, Logger, ReservationDraft, ReservationStatus, RoomId, UserId};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
/// let logger = Logger::capturing(LogLevel::Verbose);
/// let mut manager = ReservationManager::new(&mut db, &logger, ManagerOptions::default());
///
/// let draft = ReservationDraft::new(
///     UserId::new(100),
///     RoomId::new(200),
///     NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
/// );
/// let created = manager.create(&draft).unwrap();
/// let approved = manager.approve(created.id().unwrap()).unwrap();
/// assert_eq!(approved.status(), ReservationStatus::Approved);
/// ```
pub struct ReservationManager<'a> {
    db: &'a mut Database,
    logger: &'a Logger,
    options: ManagerOptions,
}

impl<'a> ReservationManager<'a> {
    /// Creates a manager over `db` that reports to `logger`.
    #[must_use]
    pub fn new(db: &'a mut Database, logger: &'a Logger, options: ManagerOptions) -> Self {
        Self {
            db,
            logger,
            options,
        }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &ManagerOptions {
        &self.options
    }

    /// Creates a PENDING reservation and returns it with its identity.
    ///
    /// In dry-run mode the returned reservation has no identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a supplied status or identity, or
    /// for `end_date` not after `start_date`.
    pub fn create(&mut self, draft: &ReservationDraft) -> Result<Reservation> {
        let reject_client_id = self.options.reject_client_id;
        self.run(Operation::Create, None, |_| plan_create(draft, reject_client_id))
    }

    /// Reads a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if it does not exist.
    pub fn get(&self, id: ReservationId) -> Result<Reservation> {
        let outcome = self
            .db
            .connection()
            .find_by_id(id)
            .and_then(|found| found.ok_or_else(|| Error::reservation_not_found(id)));
        self.observe("get", &format!("reservation {id}"), outcome, ToString::to_string)
    }

    /// Lists one page of reservations matching `filter`, ordered by
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the page size is zero or above the
    /// configured maximum.
    pub fn list(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let outcome = filter
            .validate(self.options.max_page_size)
            .map_err(Error::from)
            .and_then(|()| self.db.connection().find_all(filter));
        self.observe("list", "reservations", outcome, |page| {
            format!(
                "{} reservation(s) on page {} of size {}",
                page.len(),
                filter.page_number,
                filter.page_size
            )
        })
    }

    /// Replaces the fields of a PENDING reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`], [`Error::InvalidState`], or
    /// [`Error::Validation`], in that order of precedence.
    pub fn update(&mut self, id: ReservationId, draft: &ReservationDraft) -> Result<Reservation> {
        self.run(Operation::Update, Some(id), |store| plan_update(store, id, draft))
    }

    /// Deletes a reservation regardless of status and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if it does not exist.
    pub fn delete(&mut self, id: ReservationId) -> Result<Reservation> {
        self.run(Operation::Delete, Some(id), |store| plan_delete(store, id))
    }

    /// Approves a PENDING reservation if no approved reservation on the
    /// same room overlaps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`], [`Error::InvalidState`], or
    /// [`Error::ReservationConflict`].
    pub fn approve(&mut self, id: ReservationId) -> Result<Reservation> {
        self.run(Operation::Approve, Some(id), |store| plan_approve(store, id))
    }

    /// Cancels an APPROVED reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] or [`Error::InvalidState`].
    pub fn cancel(&mut self, id: ReservationId) -> Result<Reservation> {
        self.run(Operation::Cancel, Some(id), |store| plan_cancel(store, id))
    }

    /// Reports whether `room_id` is free for `period`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn check_availability(
        &self,
        room_id: RoomId,
        period: &DateRange,
    ) -> Result<AvailabilityReport> {
        let outcome = availability::check_availability(self.db.connection(), room_id, period);
        self.observe("check", &format!("room {room_id}"), outcome, |report| {
            format!("room {room_id} for {period}: {}", report.message)
        })
    }

    /// Logs the outcome of a read: `info` on success, `warn` on rejection.
    fn observe<T, F>(
        &self,
        operation: &str,
        subject: &str,
        outcome: Result<T>,
        describe: F,
    ) -> Result<T>
    where
        F: FnOnce(&T) -> String,
    {
        match outcome {
            Ok(value) => {
                self.logger
                    .info(&format!("{operation}: {}", describe(&value)));
                Ok(value)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("rejected {operation} of {subject}: {err}"));
                Err(err)
            }
        }
    }

    /// Plans and executes one mutation inside an immediate transaction.
    fn run<F>(
        &mut self,
        operation: Operation,
        target: Option<ReservationId>,
        planner: F,
    ) -> Result<Reservation>
    where
        F: FnOnce(&Connection) -> Result<OperationPlan>,
    {
        let dry_run = self.options.dry_run;
        let outcome = self.db.with_immediate_transaction(|tx| {
            let store: &Connection = tx;
            let plan = planner(store)?;
            PlanExecutor::new(store).with_dry_run(dry_run).execute(&plan)
        });

        match outcome {
            Ok(result) => {
                self.report(operation, &result);
                Ok(result.reservation)
            }
            Err(err) => {
                let subject = target.map_or_else(
                    || "new reservation".to_string(),
                    |id| format!("reservation {id}"),
                );
                self.logger
                    .warn(&format!("rejected {operation} of {subject}: {err}"));
                Err(err)
            }
        }
    }

    fn report(&self, operation: Operation, result: &ExecutionResult) {
        for warning in &result.warnings {
            self.logger.warn(warning);
        }
        if result.dry_run {
            self.logger
                .info(&format!("dry run, would {}", lowercase_first(&result.action_taken)));
        } else {
            self.logger
                .info(&format!("{operation}: {}", result.reservation));
        }
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
