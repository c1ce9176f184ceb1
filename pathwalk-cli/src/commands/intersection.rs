//! Command to show the common prefix of two paths.

use crate::error::CliError;
use crate::utils::{resolve_context, GlobalOptions};
use clap::Args;

/// Show the common prefix of two paths.
#[derive(Args)]
pub struct IntersectionCommand {
    /// Base path; the printed prefix is a prefix of this one
    pub base: String,

    /// Path compared against the base
    pub other: String,
}

impl IntersectionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;
        let len = ctx.intersection(&self.base, &self.other);
        println!("{}", &self.base[..len]);
        Ok(())
    }
}
