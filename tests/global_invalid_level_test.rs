//! An unknown `LOG_LEVEL` makes every global lookup fail

use classlog::{registry, ConfigError, LoggerError};
use std::env;

#[test]
fn test_unknown_level_is_fatal_for_global_registry() {
    env::set_var("LOG_LEVEL", "CHATTY");

    let err = registry::global().unwrap_err();
    assert_eq!(err, ConfigError::InvalidLevel("CHATTY".to_string()));

    // The failure is sticky even once the variable is fixed
    env::set_var("LOG_LEVEL", "INFO");
    match registry::get_logger("app.Worker") {
        Err(LoggerError::Config(ConfigError::InvalidLevel(name))) => assert_eq!(name, "CHATTY"),
        other => panic!("Expected InvalidLevel, got {:?}", other),
    }
}
