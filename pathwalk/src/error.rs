//! Error types for the pathwalk library.
//!
//! The path operations themselves are total: they signal "no result"
//! through empty or zero returns and never fail. Errors exist only around
//! them, where text from the outside world is interpreted: style names,
//! configuration files, and the I/O needed to read them.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathwalk error.
///
/// # Examples
///
/// ```
/// use pathwalk::{PathStyle, Result};
///
/// fn pick_style(name: &str) -> Result<PathStyle> {
///     name.parse()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathwalk library.
#[derive(Debug, Error)]
pub enum Error {
    /// A style name could not be interpreted.
    #[error("invalid style '{value}': {reason}")]
    InvalidStyle {
        /// The rejected value.
        value: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error came from an unrecognized style name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::PathStyle;
    ///
    /// let err = "vms".parse::<PathStyle>().unwrap_err();
    /// assert!(err.is_invalid_style());
    /// ```
    #[must_use]
    pub fn is_invalid_style(&self) -> bool {
        matches!(self, Self::InvalidStyle { .. })
    }

    /// Check if the error is configuration-related (parse or validation).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}
