//! Diagnostic output for classlog itself
//!
//! The loggers handed out by the registry write application records to
//! stdout and the log file. Separately, classlog reports its own activity
//! (sinks attached, write failures) through the `tracing` ecosystem. This
//! module installs a `tracing-subscriber` that prints those diagnostics to
//! stderr, so they never interleave with console sink output.
//!
//! # Features
//!
//! - Console output on stderr
//! - Environment-based configuration via `CLASSLOG_DEBUG` and `RUST_LOG`
//! - Thread-safe, can only be initialized once
//!
//! # Example
//!
//! ```no_run
//! use classlog::util::logging;
//!
//! // Initialize from CLASSLOG_DEBUG / RUST_LOG
//! logging::init_from_env();
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures diagnostics are only initialized once
static INIT: Once = Once::new();

/// Environment variable selecting the diagnostic level
pub const DIAGNOSTICS_ENV: &str = "CLASSLOG_DEBUG";

/// Configuration for diagnostic output
#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    /// Minimum diagnostic level to display
    pub level: Level,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for DiagnosticsConfig {
    /// Defaults:
    /// - Level: WARN (only sink write failures)
    /// - Location: false
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_location: false,
        }
    }
}

impl DiagnosticsConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Debug level with source locations, for tracing sink setup
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_location: true,
        }
    }
}

/// Parses a diagnostic level from a string
///
/// Returns `Level::WARN` if parsing fails. `1`/`true` select `DEBUG`, so
/// `CLASSLOG_DEBUG=1` behaves like a switch.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" | "1" | "true" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid diagnostic level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

/// Installs the stderr subscriber. Subsequent calls are ignored.
pub fn init_diagnostics(config: DiagnosticsConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        // RUST_LOG wins when set
        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("classlog={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init();
    });
}

/// Reads `CLASSLOG_DEBUG` and installs diagnostics accordingly
pub fn init_from_env() {
    init_diagnostics(config_from_env());
}

fn config_from_env() -> DiagnosticsConfig {
    match env::var(DIAGNOSTICS_ENV) {
        Ok(level_str) => DiagnosticsConfig::with_level(parse_level(&level_str)),
        Err(_) => DiagnosticsConfig::default(),
    }
}
