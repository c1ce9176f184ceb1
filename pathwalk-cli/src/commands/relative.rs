//! Command to make a path relative.

use crate::error::CliError;
use crate::utils::{resolve_context, run_to_string, GlobalOptions};
use clap::Args;

/// Express a path relative to a base directory.
#[derive(Args)]
pub struct RelativeCommand {
    /// Base directory the result starts from
    pub base: String,

    /// Target path the result leads to
    pub path: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;

        let mut probe = [0u8; 1];
        if ctx.relative(&self.base, &self.path, &mut probe) == 0 {
            return Err(CliError::SemanticFailure(format!(
                "'{}' and '{}' share no common root",
                self.base, self.path
            )));
        }

        println!(
            "{}",
            run_to_string(|buf| ctx.relative(&self.base, &self.path, buf))
        );
        Ok(())
    }
}
