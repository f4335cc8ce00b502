//! List command implementation.
//!
//! This module implements the `list` command, which pages through
//! reservations in id order, in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::output::{print_reservations, FormatArgs};
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use roombook::{ReservationFilter, RoomId, UserId};

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Only reservations for this room
    #[arg(long, value_name = "ID")]
    pub room: Option<i64>,

    /// Only reservations for this user
    #[arg(long, value_name = "ID")]
    pub user: Option<i64>,

    /// Results per page (default: configured default page size)
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Zero-based page index
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub page_number: u32,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl ListCommand {
    /// Build the filter, taking the page size from configuration if unset.
    pub fn filter(&self, default_page_size: u32) -> ReservationFilter {
        let mut filter = ReservationFilter::default().with_page(
            self.page_size.unwrap_or(default_page_size),
            self.page_number,
        );
        if let Some(room) = self.room {
            filter = filter.with_room(RoomId::new(room));
        }
        if let Some(user) = self.user {
            filter = filter.with_user(UserId::new(user));
        }
        filter
    }

    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = Session::open_read_only(global)?;
        let format = self.output.resolve(&session.config);
        let filter = self.filter(session.config.default_page_size());

        let page = session.manager(&global.logger, false).list(&filter)?;

        print_reservations(format, &page)
    }
}
