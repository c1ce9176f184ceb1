//! Configuration system for pathwalk.
//!
//! Path operations take their style from an explicit [`PathContext`];
//! this module decides which style that should be when the caller leaves
//! it open (the CLI, tooling embedding the library). Sources, highest
//! precedence first:
//!
//! 1. An explicit choice (CLI flag, caller argument)
//! 2. The `PATHWALK_STYLE` environment variable
//! 3. A `pathwalk.yaml` discovered walking up from the working directory
//! 4. The host's native style
//!
//! # Examples
//!
//! ```no_run
//! use pathwalk::config::resolve_style;
//! use std::path::Path;
//!
//! let style = resolve_style(None, Path::new(".")).unwrap();
//! println!("active style: {style}");
//! ```
//!
//! [`PathContext`]: crate::PathContext

pub mod loader;
pub mod schema;

pub use loader::{resolve_style, ConfigLoader, ConfigSource};
pub use schema::{Config, StyleChoice};
