//! Get command implementation.

use crate::error::CliError;
use crate::output::{print_reservation, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use roombook::ReservationId;

/// Show one reservation.
#[derive(Args)]
pub struct GetCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = Session::open_read_only(global)?;
        let format = self.output.resolve(&session.config);

        let reservation = session
            .manager(&global.logger, false)
            .get(ReservationId::new(self.id))?;

        print_reservation(format, &reservation)
    }
}
