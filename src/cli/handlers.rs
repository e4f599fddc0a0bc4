use crate::cli::commands::{CliArgs, EmitArgs};
use crate::config::LoggerConfig;
use crate::level::Severity;
use crate::registry::{self, LoggerRegistry};
use anyhow::{Context, Result};
use tracing::debug;

/// Builds the logger configuration from `LOG_LEVEL` and the global flags
///
/// `--level` replaces `LOG_LEVEL` entirely, so an invalid environment value
/// does not matter when the flag is given.
pub fn resolve_config(args: &CliArgs) -> Result<LoggerConfig> {
    let mut config = match &args.level {
        Some(level) => {
            let threshold = level
                .parse::<Severity>()
                .context("Invalid --level value")?;
            LoggerConfig::default().with_threshold(threshold)
        }
        None => LoggerConfig::from_env().context("Invalid LOG_LEVEL")?,
    };

    if let Some(log_file) = &args.log_file {
        config = config.with_log_file(log_file);
    }

    Ok(config)
}

pub fn handle_emit(args: &CliArgs, emit: &EmitArgs) -> i32 {
    match run_emit(args, emit) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_emit(args: &CliArgs, emit: &EmitArgs) -> Result<()> {
    let config = resolve_config(args)?;
    debug!("{}", config);

    if !registry::install_global(LoggerRegistry::new(config)) {
        debug!("Global logger registry was already initialized");
    }

    let mut logger = None;
    for _ in 0..emit.repeat {
        logger = Some(
            registry::get_logger(&emit.identity)
                .with_context(|| format!("Failed to resolve logger {}", emit.identity))?,
        );
    }

    if let Some(logger) = logger {
        debug!(
            identity = %emit.identity,
            resolved = emit.repeat,
            sinks = logger.sink_count(),
            "Emitting record"
        );
        logger.log(emit.severity, &emit.message);
    }

    Ok(())
}

pub fn handle_levels() -> i32 {
    for severity in Severity::ALL {
        println!("{:<8} {}", severity.as_str(), severity.value());
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use std::env;
    use std::path::PathBuf;

    #[test]
    #[serial]
    fn test_resolve_config_flag_overrides_env() {
        env::set_var("LOG_LEVEL", "not-a-level");
        let args = CliArgs::try_parse_from([
            "classlog",
            "--level",
            "ERROR",
            "--log-file",
            "/tmp/cli.log",
            "levels",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        env::remove_var("LOG_LEVEL");

        assert_eq!(config.threshold, Severity::Error);
        assert_eq!(config.log_file, PathBuf::from("/tmp/cli.log"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_reports_invalid_env() {
        env::set_var("LOG_LEVEL", "not-a-level");
        let args = CliArgs::try_parse_from(["classlog", "levels"]).unwrap();

        let result = resolve_config(&args);
        env::remove_var("LOG_LEVEL");

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("not-a-level"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_defaults() {
        env::remove_var("LOG_LEVEL");
        let args = CliArgs::try_parse_from(["classlog", "levels"]).unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_handle_levels_succeeds() {
        assert_eq!(handle_levels(), 0);
    }
}
