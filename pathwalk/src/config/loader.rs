//! Configuration file discovery and loading.
//!
//! This module discovers `pathwalk.yaml` files walking up from a working
//! directory, merges them by precedence, and resolves the active style
//! together with the `PATHWALK_STYLE` environment variable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{Config, StyleChoice};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::style::PathStyle;

/// Name of the configuration file searched for in each directory.
pub const CONFIG_FILE_NAME: &str = "pathwalk.yaml";

/// Environment variable overriding the configured style.
pub const STYLE_ENV_VAR: &str = "PATHWALK_STYLE";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from discovered files.
///
/// # Examples
///
/// ```no_run
/// use pathwalk::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discovers and loads every `pathwalk.yaml` on the way up from
    /// `working_dir`, ordered by precedence: files closer to the working
    /// directory override files above them.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read, parsed, or
    /// validated.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let mut dir = Some(working_dir);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                sources.push(ConfigSource {
                    path: candidate,
                    precedence: 0, // assigned below, once the count is known
                    config,
                });
            }
            dir = current.parent();
        }

        // The walk found nearest files first; precedence counts the other
        // way around.
        let count = sources.len();
        for (i, source) in sources.iter_mut().enumerate() {
            source.precedence = u8::try_from(count - i).unwrap_or(u8::MAX);
        }
        sources.reverse();

        for source in &sources {
            log::debug!(
                "loaded config {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        Ok(sources)
    }

    /// Loads and validates a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// `log_mode` does not name a known level.
    pub fn load_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&text)?;

        if let Some(mode) = &config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".to_string(),
                message,
            })?;
        }

        Ok(config)
    }

    /// Merges discovered sources into one effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails.
    pub fn effective(working_dir: &Path) -> Result<Config> {
        let merged = Self::load_all(working_dir)?
            .into_iter()
            .fold(Config::default(), |acc, source| {
                acc.merged_with(source.config)
            });
        Ok(merged)
    }
}

/// Resolves the active path style.
///
/// Precedence, highest first: the explicit choice, the `PATHWALK_STYLE`
/// environment variable, a discovered `pathwalk.yaml`, the host default.
///
/// # Errors
///
/// Returns an error if the environment variable holds an unknown style
/// name, or if configuration discovery fails.
///
/// # Examples
///
/// ```no_run
/// use pathwalk::config::{resolve_style, StyleChoice};
/// use std::path::Path;
///
/// let style = resolve_style(Some(StyleChoice::Windows), Path::new(".")).unwrap();
/// assert_eq!(style, pathwalk::PathStyle::Windows);
/// ```
pub fn resolve_style(explicit: Option<StyleChoice>, working_dir: &Path) -> Result<PathStyle> {
    if let Some(choice) = explicit {
        log::debug!("style from explicit choice: {}", choice.resolve());
        return Ok(choice.resolve());
    }

    if let Ok(value) = env::var(STYLE_ENV_VAR) {
        let choice: StyleChoice = value.parse()?;
        log::debug!("style from {STYLE_ENV_VAR}: {}", choice.resolve());
        return Ok(choice.resolve());
    }

    if let Some(choice) = ConfigLoader::effective(working_dir)?.style {
        log::debug!("style from {CONFIG_FILE_NAME}: {}", choice.resolve());
        return Ok(choice.resolve());
    }

    log::debug!("style from host default: {}", PathStyle::host());
    Ok(PathStyle::host())
}
