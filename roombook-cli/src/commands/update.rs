//! Update command implementation.

use super::{report_dry_run, ReservationArgs};
use crate::error::CliError;
use crate::output::{print_reservation, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use roombook::{ReservationId, ReservationStatus};

/// Rewrite a PENDING reservation.
///
/// The reservation keeps its id and stays PENDING.
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub reservation: ReservationArgs,

    /// Status to submit (ignored with a warning)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<ReservationStatus>,

    /// Validate without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = self.reservation.to_draft().with_status(self.status);

        let mut session = Session::open(global)?;
        let format = self.output.resolve(&session.config);

        let updated = session
            .manager(&global.logger, self.dry_run)
            .update(ReservationId::new(self.id), &draft)?;

        print_reservation(format, &updated)?;
        report_dry_run(global, self.dry_run);
        Ok(())
    }
}
