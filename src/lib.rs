//! classlog - per-type loggers for stdout and an append-only log file
//!
//! Each owning type gets one logger, keyed by its dotted identity
//! (`module.TypeName`). The first request for an identity attaches a console
//! sink and a file sink; every later request returns the same logger, so a
//! record is never written twice however often the logger is resolved.
//!
//! # Core Concepts
//!
//! - **Identity**: qualified type name used as the registry key
//! - **Sink**: an output destination (stdout or `logs.log`) with a severity
//!   threshold and the shared record layout
//! - **Registry**: identity-to-logger table, process-wide by default or
//!   injected explicitly
//!
//! # Example Usage
//!
//! ```no_run
//! use classlog::Loggable;
//!
//! struct Hello;
//!
//! impl Loggable for Hello {}
//!
//! # fn main() -> Result<(), classlog::LoggerError> {
//! let hello = Hello;
//! hello.logger()?.warning(4 + 5 + 99);
//! // 2024-03-09 07:05:01 - my_crate.Hello - WARNING -  L10 - 108
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`registry`]: identity-keyed logger table and the process-wide instance
//! - [`logger`]: the logger handle and its severity methods
//! - [`sink`]: console and file sinks
//! - [`config`]: threshold and log file settings, `LOG_LEVEL`

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod identity;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, LoggerConfig};
pub use error::LoggerError;
pub use format::{Record, RecordFormatter};
pub use identity::{identity_of, Loggable};
pub use level::Severity;
pub use logger::Logger;
pub use registry::{get_logger, logger_for, LoggerRegistry};
pub use sink::{ConsoleSink, FileSink, Sink, SinkKind};
pub use util::{init_diagnostics, init_from_env, DiagnosticsConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
