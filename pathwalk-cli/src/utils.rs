//! Utility functions for CLI operations.
//!
//! This module provides the shared plumbing for the commands: global
//! option handling, style resolution, logger setup, and the buffer
//! handling for the library's bounded-write API.

use std::env;
use std::path::PathBuf;

use pathwalk::config::{resolve_style, ConfigLoader, StyleChoice};
use pathwalk::{init_logger, LogLevel, Logger, PathContext};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit path style (flag or `PATHWALK_STYLE`).
    pub style: Option<String>,

    /// Explicit configuration file (flag or `PATHWALK_CONFIG`).
    pub config: Option<PathBuf>,
}

/// Builds the [`PathContext`] for a command run.
///
/// Style precedence: the `--style` flag (clap also fills it from
/// `PATHWALK_STYLE`), then an explicit `--config` file, then discovered
/// `pathwalk.yaml` files, then the host default.
pub fn resolve_context(global: &GlobalOptions) -> Result<PathContext, CliError> {
    let explicit = global
        .style
        .as_deref()
        .map(str::parse::<StyleChoice>)
        .transpose()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    let style = match (explicit, &global.config) {
        (Some(choice), _) => choice.resolve(),
        (None, Some(path)) => ConfigLoader::load_file(path)
            .map_err(CliError::from)?
            .style
            .unwrap_or(StyleChoice::Auto)
            .resolve(),
        (None, None) => {
            let cwd = env::current_dir()?;
            resolve_style(None, &cwd)?
        }
    };

    Ok(PathContext::new(style))
}

/// Initializes logging from flags, the environment, and the configuration
/// file's `log_mode`.
pub fn init_logging(global: &GlobalOptions) -> Logger {
    if global.verbose || global.quiet || env::var("PATHWALK_LOG_MODE").is_ok() {
        return init_logger(global.verbose, global.quiet);
    }

    if let Some(path) = &global.config {
        if let Ok(config) = ConfigLoader::load_file(path) {
            if let Some(mode) = config.log_mode {
                if let Ok(level) = LogLevel::parse(&mode) {
                    return Logger::new(level);
                }
            }
        }
    }

    init_logger(false, false)
}

/// Runs a bounded-write operation and collects the full result.
///
/// The first call uses a fixed buffer; when the reported length does not
/// fit, the call is repeated with a buffer sized from that length. This
/// is the retry loop the truncation contract is designed for.
pub fn run_to_string(f: impl Fn(&mut [u8]) -> usize) -> String {
    let mut buf = vec![0u8; 256];
    let mut len = f(&mut buf);
    if len + 1 > buf.len() {
        buf = vec![0u8; len + 1];
        len = f(&mut buf);
    }
    String::from_utf8_lossy(&buf[..len]).into_owned()
}
