#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathwalk
//!
//! A library for style-aware path string manipulation.
//!
//! pathwalk parses and rewrites filesystem path *strings* in either the
//! Windows or the Unix grammar, without ever touching a filesystem and
//! without allocating: every operation writes into a caller-supplied
//! buffer, truncates safely, NUL-terminates, and reports the length the
//! full result would need.
//!
//! ## Core Types
//!
//! - [`PathContext`]: the operations, carrying the active style
//! - [`PathStyle`]: the Windows/Unix grammar selector
//! - [`Segment`] and [`Segments`]: segment-level path iteration
//! - [`Error`] and [`Result`]: error handling for the ambient layers
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathwalk::{PathContext, PathStyle};
//!
//! let ctx = PathContext::new(PathStyle::Unix);
//! let mut buf = [0u8; 64];
//!
//! let len = ctx.join("/usr", "local/../bin", &mut buf);
//! assert_eq!(&buf[..len], b"/usr/bin");
//!
//! let len = ctx.relative("/usr/bin", "/usr/share", &mut buf);
//! assert_eq!(&buf[..len], b"../share");
//! ```
//!
//! Buffers may be smaller than the result; the returned length says how
//! much space the full result wants:
//!
//! ```
//! use pathwalk::{PathContext, PathStyle};
//!
//! let ctx = PathContext::new(PathStyle::Unix);
//! let mut small = [0u8; 6];
//! let needed = ctx.normalize("/very/long/path", &mut small);
//! assert_eq!(needed, 15);
//! assert_eq!(&small, b"/very\0");
//! ```

pub mod config;

mod components;
mod context;
mod error;
mod joined;
mod logging;
mod output;
mod resolve;
mod root;
mod segment;
mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use context::{guess_style, PathContext};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use segment::{Segment, SegmentKind, Segments};
pub use style::PathStyle;
