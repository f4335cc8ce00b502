//! Check command implementation.
//!
//! Reports whether a room is free for a period. The answer is printed, not
//! signalled through the exit code: a reserved room still exits 0.

use crate::error::CliError;
use crate::output::{print_availability, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use chrono::NaiveDate;
use clap::Args;
use roombook::{DateRange, RoomId};

/// Check whether a room is free for a period.
#[derive(Args)]
pub struct CheckCommand {
    /// Room to check
    #[arg(long, value_name = "ID")]
    pub room: i64,

    /// First day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Last day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let period = DateRange::new(self.start, self.end)?;

        let mut session = Session::open_read_only(global)?;
        let format = self.output.resolve(&session.config);

        let report = session
            .manager(&global.logger, false)
            .check_availability(RoomId::new(self.room), &period)?;

        if !report.conflicting.is_empty() {
            let ids = report
                .conflicting
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            global
                .logger
                .info(&format!("room {} is held by reservation(s) {ids}", self.room));
        }

        print_availability(format, &report)
    }
}
