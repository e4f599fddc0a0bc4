//! Identity-keyed logger table
//!
//! A [`LoggerRegistry`] creates the console and file sinks for an identity the
//! first time it is requested and hands out the same [`Logger`] on every later
//! request. Sink creation happens while the table lock is held, so concurrent
//! first requests for one identity still attach a single pair of sinks.
//!
//! Most code resolves loggers through the process-wide registry returned by
//! [`global`], which reads its [`LoggerConfig`] from the environment on first
//! use. Tests and embedding code can build their own registry instead.
//!
//! # Example
//!
//! ```no_run
//! use classlog::registry;
//!
//! # fn main() -> Result<(), classlog::LoggerError> {
//! let logger = registry::get_logger("billing.InvoiceService")?;
//! logger.warning("invoice total does not match line items");
//!
//! // Same identity, same logger: no duplicate output.
//! let again = registry::get_logger("billing.InvoiceService")?;
//! assert!(again.same_as(&logger));
//! # Ok(())
//! # }
//! ```

use crate::config::{ConfigError, LoggerConfig};
use crate::error::LoggerError;
use crate::identity::identity_of;
use crate::logger::Logger;
use crate::sink::{ConsoleSink, FileSink, Sink};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::debug;

/// Produces the writer behind each new console sink
pub type ConsoleFactory = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

/// Table of loggers keyed by identity
pub struct LoggerRegistry {
    config: LoggerConfig,
    console: ConsoleFactory,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl LoggerRegistry {
    /// Registry whose console sinks write to stdout
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_console_factory(config, || Box::new(io::stdout()))
    }

    /// Registry whose console sinks write wherever `factory` points
    pub fn with_console_factory<F>(config: LoggerConfig, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Write + Send> + Send + Sync + 'static,
    {
        Self {
            config,
            console: Arc::new(factory),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Registry configured from `LOG_LEVEL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(LoggerConfig::from_env()?))
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Returns the logger for `identity`, creating its sinks on first use
    ///
    /// # Errors
    ///
    /// Returns `LoggerError::OpenLogFile` if this is the first request for
    /// `identity` and the log file cannot be opened. Nothing is registered in
    /// that case, so a later request tries again.
    pub fn get_logger(&self, identity: &str) -> Result<Logger, LoggerError> {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(logger) = loggers.get(identity) {
            return Ok(logger.clone());
        }

        let logger = self.build_logger(identity)?;
        loggers.insert(identity.to_string(), logger.clone());
        Ok(logger)
    }

    /// Returns the logger for the type `T`, keyed by [`identity_of`]
    pub fn logger_for<T: ?Sized>(&self) -> Result<Logger, LoggerError> {
        self.get_logger(&identity_of::<T>())
    }

    /// True if `identity` already has a logger
    pub fn contains(&self, identity: &str) -> bool {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(identity)
    }

    /// Registered identities, sorted
    pub fn identities(&self) -> Vec<String> {
        let loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = loggers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build_logger(&self, identity: &str) -> Result<Logger, LoggerError> {
        let threshold = self.config.threshold;
        let log_file = &self.config.log_file;

        let file = FileSink::open(log_file, threshold).map_err(|source| {
            LoggerError::OpenLogFile {
                path: log_file.clone(),
                source,
            }
        })?;
        let console = ConsoleSink::with_writer(threshold, (self.console)());

        debug!(
            identity,
            threshold = %threshold,
            log_file = %log_file.display(),
            "Attached console and file sinks"
        );

        let sinks: Vec<Arc<dyn Sink>> = vec![Arc::new(console), Arc::new(file)];
        Ok(Logger::new(identity, sinks))
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("config", &self.config)
            .field("identities", &self.identities())
            .finish()
    }
}

static GLOBAL: OnceLock<Result<LoggerRegistry, ConfigError>> = OnceLock::new();

/// The process-wide registry, configured from the environment on first use
///
/// # Errors
///
/// Returns the `ConfigError` from the first initialisation (for example an
/// unknown `LOG_LEVEL`) on this and every later call.
pub fn global() -> Result<&'static LoggerRegistry, ConfigError> {
    GLOBAL
        .get_or_init(|| {
            let registry = LoggerRegistry::from_env();
            match &registry {
                Ok(r) => debug!(threshold = %r.config.threshold, "Initialized global logger registry"),
                Err(e) => debug!(error = %e, "Global logger registry configuration failed"),
            }
            registry
        })
        .as_ref()
        .map_err(|e| e.clone())
}

/// Installs `registry` as the process-wide registry
///
/// Must run before the first call to [`global`]. Returns `false`, dropping
/// `registry`, if a registry is already in place.
pub fn install_global(registry: LoggerRegistry) -> bool {
    GLOBAL.set(Ok(registry)).is_ok()
}

/// Resolves `identity` against the process-wide registry
pub fn get_logger(identity: &str) -> Result<Logger, LoggerError> {
    global()?.get_logger(identity)
}

/// Resolves the type `T` against the process-wide registry
pub fn logger_for<T: ?Sized>() -> Result<Logger, LoggerError> {
    global()?.logger_for::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Severity;
    use crate::sink::SinkKind;
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn line_count(&self) -> usize {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .count()
        }
    }

    fn test_registry(dir: &TempDir, threshold: Severity) -> (LoggerRegistry, Captured) {
        let captured = Captured::default();
        let writer = captured.clone();
        let config = LoggerConfig::default()
            .with_threshold(threshold)
            .with_log_file(dir.path().join("logs.log"));
        let registry =
            LoggerRegistry::with_console_factory(config, move || Box::new(writer.clone()));
        (registry, captured)
    }

    #[test]
    fn test_repeated_lookup_attaches_sinks_once() {
        let dir = TempDir::new().unwrap();
        let (registry, _captured) = test_registry(&dir, Severity::Debug);

        let first = registry.get_logger("app.Worker").unwrap();
        let second = registry.get_logger("app.Worker").unwrap();

        assert!(first.same_as(&second));
        assert_eq!(second.sink_count(), 2);
        assert_eq!(second.count_of(SinkKind::Console), 1);
        assert_eq!(second.count_of(SinkKind::File), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_identities_are_independent() {
        let dir = TempDir::new().unwrap();
        let (registry, _captured) = test_registry(&dir, Severity::Debug);

        let a = registry.get_logger("app.A").unwrap();
        let b = registry.get_logger("app.B").unwrap();
        let a_again = registry.get_logger("app.A").unwrap();

        assert!(!a.same_as(&b));
        assert!(a.same_as(&a_again));
        assert_eq!(a.sink_count(), 2);
        assert_eq!(b.sink_count(), 2);
        assert_eq!(registry.identities(), vec!["app.A", "app.B"]);
    }

    #[test]
    fn test_failed_open_is_not_registered() {
        let dir = TempDir::new().unwrap();
        let config = LoggerConfig::default().with_log_file(dir.path().join("nope").join("x.log"));
        let registry = LoggerRegistry::new(config);

        let err = registry.get_logger("app.Worker").unwrap_err();
        assert!(matches!(err, LoggerError::OpenLogFile { .. }));
        assert!(!registry.contains("app.Worker"));
        assert!(registry.is_empty());

        fs::create_dir(dir.path().join("nope")).unwrap();
        assert!(registry.get_logger("app.Worker").is_ok());
        assert!(registry.contains("app.Worker"));
    }

    #[test]
    fn test_concurrent_first_lookups_share_one_logger() {
        let dir = TempDir::new().unwrap();
        let (registry, captured) = test_registry(&dir, Severity::Debug);
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get_logger("app.Shared").unwrap())
            })
            .collect();
        let loggers: Vec<Logger> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for logger in &loggers {
            assert!(logger.same_as(&loggers[0]));
        }

        loggers[3].error("once");
        assert_eq!(captured.line_count(), 1);
        let contents = fs::read_to_string(dir.path().join("logs.log")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_logger_for_uses_type_identity() {
        struct Widget;

        let dir = TempDir::new().unwrap();
        let (registry, _captured) = test_registry(&dir, Severity::Debug);

        let logger = registry.logger_for::<Widget>().unwrap();
        assert_eq!(logger.name(), identity_of::<Widget>());
        assert!(logger.name().ends_with(".Widget"));
        assert!(!logger.name().contains("::"));
    }

    #[test]
    fn test_debug_lists_identities() {
        let dir = TempDir::new().unwrap();
        let (registry, _captured) = test_registry(&dir, Severity::Info);
        registry.get_logger("x.Y").unwrap();

        let debug = format!("{:?}", registry);
        assert!(debug.contains("x.Y"));
        assert!(debug.contains("Info"));
    }
}
