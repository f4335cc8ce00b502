//! Approve command implementation.

use super::TargetArgs;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Approve a PENDING reservation if no approved stay overlaps it.
#[derive(Args)]
pub struct ApproveCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl ApproveCommand {
    /// Execute the approve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        self.target
            .run(global, |manager, id| manager.approve(id))
    }
}
