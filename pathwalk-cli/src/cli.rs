//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CompletionsCommand, GuessCommand, InfoCommand, IntersectionCommand,
    JoinCommand, NormalizeCommand, RelativeCommand, RewriteCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for manipulating path strings.
#[derive(Parser)]
#[command(name = "pathwalk")]
#[command(version, about = "Manipulate path strings in Windows or Unix style", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path style to use: unix, windows, or auto
    #[arg(long, value_name = "STYLE", global = true, env = "PATHWALK_STYLE")]
    pub style: Option<String>,

    /// Read configuration from an explicit file instead of discovery
    #[arg(long, value_name = "PATH", global = true, env = "PATHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path
    Normalize(NormalizeCommand),

    /// Join two or more paths
    Join(JoinCommand),

    /// Resolve a path to absolute form against a base
    Absolute(AbsoluteCommand),

    /// Express a path relative to a base directory
    Relative(RelativeCommand),

    /// Show the common prefix of two paths
    Intersection(IntersectionCommand),

    /// Inspect the components of a path
    Info(InfoCommand),

    /// Guess the style of a path
    Guess(GuessCommand),

    /// Replace the root, basename, or extension of a path
    Rewrite(RewriteCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
