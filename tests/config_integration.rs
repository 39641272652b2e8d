//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use starfield::config::AppConfig;
use starfield_core::LateralPlacement;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("STARFIELD_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("STARFIELD_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_starfield_params() {
    std::env::set_var("STARFIELD_STARFIELD__SPEED", "12.5");
    std::env::set_var("STARFIELD_STARFIELD__PLACEMENT", "uniform");
    std::env::set_var("STARFIELD_SIMULATION__SEED", "42");
    let config = AppConfig::load();
    std::env::remove_var("STARFIELD_STARFIELD__SPEED");
    std::env::remove_var("STARFIELD_STARFIELD__PLACEMENT");
    std::env::remove_var("STARFIELD_SIMULATION__SEED");

    let config = config.unwrap();
    assert_eq!(config.starfield.speed, 12.5);
    assert_eq!(config.starfield.placement, LateralPlacement::Uniform);
    assert_eq!(config.simulation.seed, Some(42));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let defaults = AppConfig::default();
    let config = AppConfig::load_from("config").unwrap();

    assert_eq!(config.starfield, defaults.starfield);
    assert_eq!(config.controls.palette, defaults.controls.palette);
    assert_eq!(config.window.width, defaults.window.width);
}

#[test]
#[serial]
fn test_user_config_loading() {
    // Remove env var to test file-based config
    std::env::remove_var("STARFIELD_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert!(!config.window.title.is_empty());
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    std::env::set_var("STARFIELD_STARFIELD__STAR_COUNT", "lots");
    let result = AppConfig::load();
    std::env::remove_var("STARFIELD_STARFIELD__STAR_COUNT");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
