//! Delete command implementation.
//!
//! Removes a reservation regardless of its status and prints the removed
//! record.

use super::TargetArgs;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Delete a reservation in any status.
#[derive(Args)]
pub struct DeleteCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        self.target.run(global, |manager, id| manager.delete(id))
    }
}
