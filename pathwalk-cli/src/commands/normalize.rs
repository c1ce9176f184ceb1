//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{resolve_context, run_to_string, GlobalOptions};
use clap::Args;

/// Normalize a path: resolve `..`, drop `.`, collapse separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;
        println!("{}", run_to_string(|buf| ctx.normalize(&self.path, buf)));
        Ok(())
    }
}
