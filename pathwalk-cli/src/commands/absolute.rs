//! Command to make a path absolute.

use crate::error::CliError;
use crate::utils::{resolve_context, run_to_string, GlobalOptions};
use clap::Args;

/// Resolve a path to absolute form against a base.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Base path the relative path is applied to
    pub base: String,

    /// Path to resolve; an absolute path overrides the base
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;
        println!(
            "{}",
            run_to_string(|buf| ctx.absolute(&self.base, &self.path, buf))
        );
        Ok(())
    }
}
