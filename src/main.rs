use classlog::cli::commands::{CliArgs, Commands};
use classlog::cli::handlers::{handle_emit, handle_levels};
use classlog::util::logging::{self, DiagnosticsConfig};
use classlog::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_diagnostics_from_args(&args);

    debug!("classlog v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Emit(emit_args) => handle_emit(&args, emit_args),
        Commands::Levels => handle_levels(),
    };

    std::process::exit(exit_code);
}

fn init_diagnostics_from_args(args: &CliArgs) {
    if args.verbose {
        logging::init_diagnostics(DiagnosticsConfig::verbose());
    } else {
        logging::init_from_env();
    }
}
