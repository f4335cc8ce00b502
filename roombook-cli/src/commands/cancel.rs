//! Cancel command implementation.

use super::TargetArgs;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Cancel an APPROVED reservation.
#[derive(Args)]
pub struct CancelCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        self.target.run(global, |manager, id| manager.cancel(id))
    }
}
