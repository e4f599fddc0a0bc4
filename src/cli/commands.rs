use crate::level::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-type loggers writing to stdout and an append-only log file
#[derive(Parser, Debug)]
#[command(
    name = "classlog",
    about = "Per-type loggers writing to stdout and an append-only log file",
    version,
    long_about = "classlog resolves named loggers the way a library caller would and \
                  emits records through them. Each identity gets exactly one console \
                  sink and one file sink, no matter how often it is resolved."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        help = "Severity threshold for both sinks (overrides LOG_LEVEL)"
    )]
    pub level: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Log file to append to (defaults to logs.log)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Print classlog diagnostics on stderr"
    )]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Resolve a logger and emit one record",
        long_about = "Resolves the logger for an identity, optionally several times, then \
                      emits a single record through it.\n\n\
                      Examples:\n  \
                      classlog emit --identity billing.Invoice \"total mismatch\"\n  \
                      classlog --level WARNING emit -i app.Worker -s ERROR -n 5 \"boom\""
    )]
    Emit(EmitArgs),

    #[command(about = "List accepted severity names")]
    Levels,
}

#[derive(Parser, Debug, Clone)]
pub struct EmitArgs {
    #[arg(
        short = 'i',
        long,
        value_name = "IDENTITY",
        help = "Logger identity, e.g. module.ClassName"
    )]
    pub identity: String,

    #[arg(
        short = 's',
        long,
        value_name = "SEVERITY",
        default_value = "INFO",
        value_parser = parse_severity,
        help = "Severity of the emitted record"
    )]
    pub severity: Severity,

    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "How many times to resolve the logger before emitting"
    )]
    pub repeat: u32,

    #[arg(value_name = "MESSAGE", help = "Message text")]
    pub message: String,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse::<Severity>().map_err(|e| e.to_string())
}
