//! Per-identity logger handle

use crate::format::Record;
use crate::level::Severity;
use crate::sink::{Sink, SinkKind};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use tracing::warn;

struct LoggerInner {
    name: String,
    sinks: Vec<Arc<dyn Sink>>,
}

/// A named logger fanning records out to its sinks.
///
/// Cloning is cheap; clones share the same sinks. Line numbers in records are
/// taken from the caller of the logging method.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    /// Creates a logger with a fixed set of sinks
    pub fn new(name: impl Into<String>, sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                name: name.into(),
                sinks,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.inner.sinks
    }

    pub fn sink_count(&self) -> usize {
        self.inner.sinks.len()
    }

    /// Number of attached sinks of the given kind
    pub fn count_of(&self, kind: SinkKind) -> usize {
        self.inner.sinks.iter().filter(|s| s.kind() == kind).count()
    }

    /// True if at least one sink would emit a record of this severity
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.inner
            .sinks
            .iter()
            .any(|s| severity.passes(s.threshold()))
    }

    /// True if both handles refer to the same underlying logger
    pub fn same_as(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Logs `message` at `severity` to every sink whose threshold it meets.
    ///
    /// Write failures are reported through `tracing` and never reach the
    /// caller.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        let line = Location::caller().line();
        self.log_at_line(severity, line, message);
    }

    /// Logs with an explicit source line
    pub fn log_at_line(&self, severity: Severity, line: u32, message: impl fmt::Display) {
        if !self.is_enabled_for(severity) {
            return;
        }
        let message = message.to_string();
        let record = Record::now(&self.inner.name, severity, line, &message);

        for sink in &self.inner.sinks {
            if let Err(e) = sink.emit(&record) {
                warn!(
                    logger = %self.inner.name,
                    sink = %sink.kind(),
                    error = %e,
                    "Failed to write log record"
                );
            }
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<SinkKind> = self.inner.sinks.iter().map(|s| s.kind()).collect();
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("sinks", &kinds)
            .finish()
    }
}
