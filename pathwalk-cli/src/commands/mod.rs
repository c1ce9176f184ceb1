//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Resolve `.`/`..` and collapse separators
//! - `join`: Combine two or more paths
//! - `absolute`: Resolve a path against a base directory
//! - `relative`: Express a path relative to a base directory
//! - `intersection`: Show the common prefix of two paths
//! - `info`: Inspect root, dirname, basename, extension, and segments
//! - `guess`: Guess the style of a path
//! - `rewrite`: Replace root, basename, or extension
//! - `completions`: Generate shell completions

pub mod absolute;
pub mod completions;
pub mod guess;
pub mod info;
pub mod intersection;
pub mod join;
pub mod normalize;
pub mod relative;
pub mod rewrite;

pub use absolute::AbsoluteCommand;
pub use completions::CompletionsCommand;
pub use guess::GuessCommand;
pub use info::InfoCommand;
pub use intersection::IntersectionCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use relative::RelativeCommand;
pub use rewrite::RewriteCommand;
