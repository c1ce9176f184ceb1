//! Main entry point for the pathwalk CLI.
//!
//! This is the command-line interface for the pathwalk path manipulation
//! library. It provides commands for working with path strings:
//! - `normalize`: Resolve `.`/`..` and collapse separators
//! - `join`: Combine paths into one
//! - `absolute` / `relative`: Convert between the two forms
//! - `intersection`: Show the common prefix of two paths
//! - `info`: Inspect the components of a path
//! - `guess`: Guess the style of a path
//! - `rewrite`: Replace root, basename, or extension

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity and configuration
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
        config: cli.config,
    };
    let _logger = utils::init_logging(&global);

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Intersection(cmd) => cmd.execute(&global),
        cli::Command::Info(cmd) => cmd.execute(&global),
        cli::Command::Guess(cmd) => cmd.execute(&global),
        cli::Command::Rewrite(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
