//! Record severities
//!
//! Severities are ordered from `NOTSET` (everything passes) through `DEBUG`
//! up to `CRITICAL`. A sink emits a record when the record's severity is at or
//! above the sink's threshold.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, also used as a sink threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    NotSet,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// All severities, most verbose first
    pub const ALL: [Severity; 6] = [
        Severity::NotSet,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Canonical upper-case name, as written into records
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::NotSet => "NOTSET",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the severity (0 for `NOTSET` up to 50 for `CRITICAL`)
    pub fn value(&self) -> u8 {
        match self {
            Severity::NotSet => 0,
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    /// Whether a record of severity `self` passes the given threshold
    pub fn passes(&self, threshold: Severity) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Parses a canonical level name.
    ///
    /// Matching is exact: names are upper-case and surrounding whitespace is
    /// not stripped. `WARN` and `FATAL` are accepted as aliases of `WARNING`
    /// and `CRITICAL`. Unknown names are rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOTSET" => Ok(Severity::NotSet),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "FATAL" => Ok(Severity::Critical),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}
