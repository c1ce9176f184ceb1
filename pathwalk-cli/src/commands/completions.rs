//! Command to generate shell completions.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for pathwalk.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut command = Cli::command();
        generate(self.shell, &mut command, "pathwalk", &mut io::stdout());
        Ok(())
    }
}
