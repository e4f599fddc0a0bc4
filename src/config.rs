//! Configuration for the logger provider
//!
//! Settings are loaded once, when a registry is created. The process-wide
//! registry reads them from the environment on first use.
//!
//! # Environment Variables
//!
//! - `LOG_LEVEL`: severity threshold applied to every sink
//!   (NOTSET|DEBUG|INFO|WARNING|ERROR|CRITICAL, plus WARN and FATAL; exact
//!   upper-case names) - default: "DEBUG"
//!
//! The log file is always the relative path `logs.log` for the process-wide
//! registry. Registries built explicitly can point elsewhere with
//! [`LoggerConfig::with_log_file`].
//!
//! # Example
//!
//! ```no_run
//! use classlog::{LoggerConfig, LoggerRegistry, Severity};
//!
//! let config = LoggerConfig::default()
//!     .with_threshold(Severity::Warning)
//!     .with_log_file("service.log");
//! let registry = LoggerRegistry::new(config);
//! ```

use crate::level::Severity;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the severity threshold
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Default values for configuration
pub const DEFAULT_LOG_FILE: &str = "logs.log";
pub const DEFAULT_THRESHOLD: Severity = Severity::Debug;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown severity name
    #[error("Invalid log level: {0:?}. Valid options: NOTSET, DEBUG, INFO, WARNING, ERROR, CRITICAL")]
    InvalidLevel(String),

    /// Environment variable is set but not valid unicode
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Settings shared by every sink a registry creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum severity emitted by both the console and the file sink
    pub threshold: Severity,

    /// File the file sink appends to
    pub log_file: PathBuf,
}

impl Default for LoggerConfig {
    /// `DEBUG` threshold, appending to `logs.log` in the working directory.
    ///
    /// Unlike [`LoggerConfig::from_env`], this never consults the environment.
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LoggerConfig {
    /// Loads the configuration from `LOG_LEVEL`, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidLevel` if `LOG_LEVEL` names an unknown
    /// severity. An unknown level is never replaced by the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let threshold = match env::var(LOG_LEVEL_ENV) {
            Ok(value) => value.parse::<Severity>()?,
            Err(env::VarError::NotPresent) => DEFAULT_THRESHOLD,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(LOG_LEVEL_ENV.to_string()))
            }
        };

        Ok(Self {
            threshold,
            ..Default::default()
        })
    }

    /// Replaces the severity threshold
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the log file path
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }
}

impl fmt::Display for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logger Configuration:")?;
        writeln!(f, "  Threshold: {}", self.threshold)?;
        writeln!(f, "  Log File: {}", self.log_file.display())?;
        Ok(())
    }
}
