//! CLI command implementations.
//!
//! One command per lifecycle operation:
//! - `create`: Submit a new PENDING reservation
//! - `get`: Show one reservation
//! - `list`: Page through reservations, optionally by room or user
//! - `update`: Rewrite a PENDING reservation
//! - `delete`: Remove a reservation in any status
//! - `approve`: Approve a PENDING reservation if the room is free
//! - `cancel`: Cancel an APPROVED reservation
//! - `check`: Report whether a room is free for a period
//! - `init`: Create the data directory and database

pub mod approve;
pub mod cancel;
pub mod check;
pub mod create;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod update;

pub use approve::ApproveCommand;
pub use cancel::CancelCommand;
pub use check::CheckCommand;
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use update::UpdateCommand;

use crate::error::CliError;
use crate::output::{print_reservation, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use chrono::NaiveDate;
use clap::Args;
use roombook::operations::ReservationManager;
use roombook::{Reservation, ReservationDraft, ReservationId, RoomId, UserId};

/// Reservation fields supplied on create and update.
#[derive(Debug, Clone, Args)]
pub struct ReservationArgs {
    /// Booking user
    #[arg(long, value_name = "ID")]
    pub user: i64,

    /// Booked room
    #[arg(long, value_name = "ID")]
    pub room: i64,

    /// First day of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Last day of the stay (YYYY-MM-DD), after the first
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,
}

impl ReservationArgs {
    /// Build a draft without identity or status.
    pub fn to_draft(&self) -> ReservationDraft {
        ReservationDraft::new(
            UserId::new(self.user),
            RoomId::new(self.room),
            self.start,
            self.end,
        )
    }
}

/// Arguments of the commands that act on one existing reservation.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Validate the operation without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl TargetArgs {
    /// Run one mutation against the target and print the resulting record.
    pub fn run<F>(&self, global: &GlobalOptions, operation: F) -> Result<(), CliError>
    where
        F: FnOnce(&mut ReservationManager<'_>, ReservationId) -> roombook::Result<Reservation>,
    {
        let mut session = Session::open(global)?;
        let format = self.output.resolve(&session.config);

        let reservation = {
            let mut manager = session.manager(&global.logger, self.dry_run);
            operation(&mut manager, ReservationId::new(self.id))?
        };

        print_reservation(format, &reservation)?;
        report_dry_run(global, self.dry_run);
        Ok(())
    }
}

/// Tell the user that nothing was written.
pub fn report_dry_run(global: &GlobalOptions, dry_run: bool) {
    if dry_run && !global.quiet {
        eprintln!("Dry run - no changes were made");
    }
}
