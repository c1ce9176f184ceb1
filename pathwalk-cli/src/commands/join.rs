//! Command to join paths.

use crate::error::CliError;
use crate::utils::{resolve_context, run_to_string, GlobalOptions};
use clap::Args;

/// Join two or more paths and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Paths to join, in order; the first path's root wins
    #[arg(num_args = 2.., value_name = "PATH")]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;
        let parts: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        println!("{}", run_to_string(|buf| ctx.join_multiple(&parts, buf)));
        Ok(())
    }
}
