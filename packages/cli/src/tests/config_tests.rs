use crate::config::{Config, ConfigError, DEFAULT_CORS_ORIGIN, DEFAULT_PORT};
use linkdesk_config::constants;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    for var in [
        constants::PORT,
        constants::CORS_ORIGIN,
        constants::LINKDESK_DATABASE_PATH,
        constants::VPS_BASE_URL,
        constants::HUBCLOUD_PORT,
        constants::TIMER_PORT,
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    assert!(config.database_path.ends_with(".linkdesk/linkdesk.db"));
    assert_eq!(config.endpoints.hubcloud_api(), "http://85.121.5.246:5001");
}

#[test]
#[serial]
fn test_config_from_env_with_all_custom() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("settings.db");
    env::set_var(constants::PORT, "3000");
    env::set_var(constants::CORS_ORIGIN, "https://app.example.com");
    env::set_var(constants::LINKDESK_DATABASE_PATH, &db_path);
    env::set_var(constants::VPS_BASE_URL, "http://10.0.0.5/");
    env::set_var(constants::TIMER_PORT, "9000");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.cors_origin, "https://app.example.com");
    assert_eq!(config.database_path, PathBuf::from(&db_path));
    assert_eq!(config.endpoints.timer_api(), "http://10.0.0.5:9000");

    clear_env();
}

#[test]
#[serial]
fn test_empty_database_path_uses_default() {
    clear_env();
    env::set_var(constants::LINKDESK_DATABASE_PATH, "");

    let config = Config::from_env().unwrap();
    assert!(config.database_path.ends_with(".linkdesk/linkdesk.db"));

    clear_env();
}

#[rstest]
#[case("not-a-number")]
#[case("70000")]
#[case("-1")]
#[serial]
fn test_config_invalid_port(#[case] value: &str) {
    clear_env();
    env::set_var(constants::PORT, value);

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(_)));
    clear_env();
}

#[test]
#[serial]
fn test_config_port_zero() {
    clear_env();
    env::set_var(constants::PORT, "0");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));
    clear_env();
}

#[test]
#[serial]
fn test_invalid_service_port_is_reported() {
    clear_env();
    env::set_var(constants::HUBCLOUD_PORT, "abc");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::Endpoints(_)));
    clear_env();
}
