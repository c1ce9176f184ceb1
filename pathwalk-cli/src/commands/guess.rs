//! Command to guess the style of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathwalk::guess_style;

/// Guess the style of a path from its roots, separators, and naming.
#[derive(Args)]
pub struct GuessCommand {
    /// Path to inspect
    pub path: String,
}

impl GuessCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", guess_style(&self.path));
        Ok(())
    }
}
