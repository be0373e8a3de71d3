//! Link timing configuration and logging setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DURATION, DEFAULT_MIN_DURATION};
use crate::error::ChromaError;
use crate::types::Ticks;

/// Timing parameters shared by both ends of a link.
///
/// Fixed for the lifetime of an encoder or decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Noise floor: observed holds shorter than this are ignored.
    #[serde(default = "default_min_duration")]
    pub min_duration: Ticks,

    /// Hold time for every transmitted colour.
    #[serde(default = "default_duration")]
    pub duration: Ticks,
}

fn default_min_duration() -> Ticks {
    Ticks::new(DEFAULT_MIN_DURATION)
}
fn default_duration() -> Ticks {
    Ticks::new(DEFAULT_DURATION)
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            min_duration: default_min_duration(),
            duration: default_duration(),
        }
    }
}

impl LinkConfig {
    /// Creates a validated configuration.
    pub fn new(min_duration: u32, duration: u32) -> Result<Self, ChromaError> {
        let config = Self {
            min_duration: Ticks::new(min_duration),
            duration: Ticks::new(duration),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that transmitted holds would survive the receiver's debounce.
    pub fn validate(&self) -> Result<(), ChromaError> {
        if self.duration == 0 {
            return Err(ChromaError::InvalidConfig(
                "duration must be non-zero".into(),
            ));
        }
        if self.min_duration > self.duration {
            return Err(ChromaError::InvalidConfig(format!(
                "min_duration {} exceeds duration {}; every transmitted hold would be ignored",
                self.min_duration.value(),
                self.duration.value()
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ChromaError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ChromaError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChromaError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ChromaError::Config(format!("Failed to read config: {e}")))?;
        Self::from_toml_str(&content)
    }
}

/// Logging configuration for binaries built on this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text or json).
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Enable colored output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}
fn default_color() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            color: default_color(),
        }
    }
}

/// Installs a global `tracing` subscriber. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ChromaError> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        subscriber
            .with(fmt::layer().json())
            .try_init()
            .map_err(|e| ChromaError::Config(format!("Failed to init logging: {e}")))?;
    } else {
        subscriber
            .with(fmt::layer().with_ansi(config.color))
            .try_init()
            .map_err(|e| ChromaError::Config(format!("Failed to init logging: {e}")))?;
    }

    Ok(())
}
