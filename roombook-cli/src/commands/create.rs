//! Create command implementation.
//!
//! Submits a new reservation. It is always stored PENDING; a supplied
//! status is refused, and a supplied id is refused or ignored depending on
//! the `reject_client_id` setting.

use super::{report_dry_run, ReservationArgs};
use crate::error::CliError;
use crate::output::{print_reservation, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use roombook::{ReservationId, ReservationStatus};

/// Submit a new reservation.
#[derive(Args)]
pub struct CreateCommand {
    #[command(flatten)]
    pub reservation: ReservationArgs,

    /// Status to submit (refused: new reservations start PENDING)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<ReservationStatus>,

    /// Client-chosen id (refused unless `reject_client_id` is off)
    #[arg(long, value_name = "ID")]
    pub id: Option<i64>,

    /// Validate without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = self
            .reservation
            .to_draft()
            .with_id(self.id.map(ReservationId::new))
            .with_status(self.status);

        let mut session = Session::open(global)?;
        let format = self.output.resolve(&session.config);

        let created = session.manager(&global.logger, self.dry_run).create(&draft)?;

        print_reservation(format, &created)?;
        report_dry_run(global, self.dry_run);
        Ok(())
    }
}
