//! Errors returned by the logger provider

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The process-wide configuration could not be loaded
    #[error("Logger configuration failed: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened for appending
    #[error("Failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    /// The underlying I/O error, if this error came from the file sink
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            LoggerError::OpenLogFile { source, .. } => Some(source),
            LoggerError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_display() {
        let err = LoggerError::OpenLogFile {
            path: PathBuf::from("/nope/logs.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/logs.log"));
        assert!(msg.contains("denied"));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: LoggerError = ConfigError::InvalidLevel("LOUD".to_string()).into();
        assert!(matches!(err, LoggerError::Config(_)));
        assert!(err.io_error().is_none());
    }
}
