pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, Commands, EmitArgs};
pub use handlers::{handle_emit, handle_levels, resolve_config};
