//! # Session Configuration
//!
//! Settings for one browsing session, read from an optional JSON file and
//! then overridden by command-line flags.
//!
//! ## Example
//!
//! ```json
//! {
//!   "image": "floppy.img",
//!   "show_stats": false,
//!   "log_level": "debug"
//! }
//! ```
//!
//! Missing fields take their default values.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Image opened when none is given
pub const DEFAULT_IMAGE: &str = "disk.img";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Disk image to open
    pub image: PathBuf,
    /// Command script to run instead of reading standard input
    pub script: Option<PathBuf>,
    /// Whether to print read statistics at the end of the session
    pub show_stats: bool,
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Prompt printed before each command
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from(DEFAULT_IMAGE),
            script: None,
            show_stats: true,
            log_level: "warn".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Loads a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    /// The configured log level
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidArgument(format!("Invalid log level: {}", self.log_level)))
    }
}

/// Values given on the command line
#[derive(Debug, Default)]
struct Overrides {
    image: Option<PathBuf>,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
    log_level: Option<String>,
    no_stats: bool,
}

/// Parses command-line arguments (including the program name)
///
/// Returns `Ok(None)` when help was requested. A config file named with
/// `--config` is loaded first; every other flag overrides its values.
pub fn parse_args(args: &[String]) -> Result<Option<SessionConfig>, ConfigError> {
    let mut overrides = Overrides::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--image" | "-i" => {
                overrides.image = Some(PathBuf::from(flag_value(args, &mut i, "--image")?));
            }
            "--script" | "-s" => {
                overrides.script = Some(PathBuf::from(flag_value(args, &mut i, "--script")?));
            }
            "--config" | "-c" => {
                overrides.config = Some(PathBuf::from(flag_value(args, &mut i, "--config")?));
            }
            "--log-level" => {
                overrides.log_level = Some(flag_value(args, &mut i, "--log-level")?.to_string());
            }
            "--no-stats" => {
                overrides.no_stats = true;
            }
            "--help" | "-h" => {
                return Ok(None);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(ConfigError::InvalidArgument(format!(
                    "Unknown option: {}",
                    other
                )));
            }
            positional => {
                if overrides.image.is_some() {
                    return Err(ConfigError::InvalidArgument(format!(
                        "Unexpected argument: {}",
                        positional
                    )));
                }
                overrides.image = Some(PathBuf::from(positional));
            }
        }
        i += 1;
    }

    let mut config = match &overrides.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    if let Some(image) = overrides.image {
        config.image = image;
    }
    if let Some(script) = overrides.script {
        config.script = Some(script);
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }
    if overrides.no_stats {
        config.show_stats = false;
    }

    config.level_filter()?;
    Ok(Some(config))
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ConfigError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::InvalidArgument(format!("Missing value for {}", flag)))
}
