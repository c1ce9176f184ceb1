//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;
use crate::style::PathStyle;

/// A configured style choice.
///
/// `Auto` defers to the host's native style, which is what most tools
/// want; the explicit variants pin the grammar regardless of where the
/// code runs.
///
/// # Examples
///
/// ```
/// use pathwalk::config::StyleChoice;
/// use pathwalk::PathStyle;
///
/// assert_eq!(StyleChoice::Unix.resolve(), PathStyle::Unix);
/// assert_eq!(StyleChoice::Auto.resolve(), PathStyle::host());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleChoice {
    /// Always the Unix grammar.
    Unix,
    /// Always the Windows grammar.
    Windows,
    /// The grammar of the host platform.
    Auto,
}

impl StyleChoice {
    /// Resolves the choice into a concrete style.
    #[must_use]
    pub fn resolve(self) -> PathStyle {
        match self {
            Self::Unix => PathStyle::Unix,
            Self::Windows => PathStyle::Windows,
            Self::Auto => PathStyle::host(),
        }
    }
}

impl FromStr for StyleChoice {
    type Err = Error;

    /// Parses `"unix"`, `"windows"` or `"auto"`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            "auto" => Ok(Self::Auto),
            _ => Err(Error::InvalidStyle {
                value: s.to_string(),
                reason: "expected 'windows', 'unix' or 'auto'".to_string(),
            }),
        }
    }
}

/// Complete configuration structure for a `pathwalk.yaml` file.
///
/// # Examples
///
/// ```
/// use pathwalk::config::{Config, StyleChoice};
///
/// let config: Config = serde_yaml::from_str("style: windows").unwrap();
/// assert_eq!(config.style, Some(StyleChoice::Windows));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The path style to use when none is given explicitly.
    pub style: Option<StyleChoice>,

    /// Default log mode (`quiet`, `normal` or `verbose`) for tools that
    /// honor it.
    pub log_mode: Option<String>,
}

impl Config {
    /// Overlays `other` on top of this configuration: fields set in
    /// `other` win.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            style: other.style.or(self.style),
            log_mode: other.log_mode.or(self.log_mode),
        }
    }
}
