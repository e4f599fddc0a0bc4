//! Utility modules for classlog
//!
//! - Diagnostic output for the crate itself

pub mod logging;

pub use logging::{init_diagnostics, init_from_env, DiagnosticsConfig};
