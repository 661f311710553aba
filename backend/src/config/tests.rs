use crate::config::{ConfigError, Settings};
use std::env;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Helper to set environment variables for testing
fn with_env_vars<F, R>(vars: Vec<(&str, &str)>, test: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let all_config_vars = [
        "BIND_ADDRESS",
        "PORT",
        "CORS_ALLOW_ORIGINS",
        "LOG_LEVEL",
        "LOG_FORMAT",
        "SEED_MOCK_DATA",
    ];

    let original_values: Vec<_> = all_config_vars
        .iter()
        .map(|key| (*key, env::var(key).ok()))
        .collect();

    for key in &all_config_vars {
        env::remove_var(key);
    }

    for (key, value) in &vars {
        env::set_var(key, value);
    }

    let result = test();

    for (key, original_value) in original_values {
        match original_value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }

    result
}

#[test]
fn test_default_settings() {
    let settings = with_env_vars(vec![], || Settings::new_with_env_file(false))
        .expect("Failed to create default settings");

    assert_eq!(settings.bind_address, "0.0.0.0");
    assert_eq!(settings.port, 4000);
    assert_eq!(settings.cors_allow_origins, vec!["*"]);
    assert_eq!(settings.log_level, "INFO");
    assert_eq!(settings.log_format, "json");
    assert!(settings.seed_mock_data);
}

#[test]
fn test_environment_variable_override() {
    let settings = with_env_vars(
        vec![
            ("BIND_ADDRESS", "127.0.0.1"),
            ("PORT", "8081"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FORMAT", "plain"),
            ("SEED_MOCK_DATA", "false"),
        ],
        || Settings::new_with_env_file(false),
    )
    .expect("Failed to create settings");

    assert_eq!(settings.bind_address, "127.0.0.1");
    assert_eq!(settings.port, 8081);
    assert_eq!(settings.log_level, "DEBUG");
    assert_eq!(settings.log_format, "plain");
    assert!(!settings.seed_mock_data);
    assert_eq!(
        settings.socket_addr().unwrap().to_string(),
        "127.0.0.1:8081"
    );
}

#[test]
fn test_comma_separated_with_spaces() {
    let settings = with_env_vars(
        vec![(
            "CORS_ALLOW_ORIGINS",
            " http://localhost:3000 , https://example.org ",
        )],
        || Settings::new_with_env_file(false),
    )
    .expect("Failed to create settings");

    assert_eq!(
        settings.cors_allow_origins,
        vec!["http://localhost:3000", "https://example.org"]
    );
}

#[test]
fn test_validation_log_format() {
    let result = with_env_vars(vec![("LOG_FORMAT", "xml")], || {
        Settings::new_with_env_file(false)
    });

    match result {
        Err(ConfigError::Validation(msg)) => {
            assert!(msg.contains("log_format must be 'json' or 'plain'"))
        }
        other => panic!("Expected validation error for log_format, got {:?}", other),
    }
}

#[test]
fn test_validation_port_and_address() {
    let zero_port = with_env_vars(vec![("PORT", "0")], || Settings::new_with_env_file(false));
    assert!(matches!(zero_port, Err(ConfigError::Validation(_))));

    let bad_address = with_env_vars(vec![("BIND_ADDRESS", "not-an-ip")], || {
        Settings::new_with_env_file(false)
    });
    assert!(matches!(bad_address, Err(ConfigError::Validation(_))));
}

#[test]
fn test_boolean_parsing() {
    let enabled = with_env_vars(vec![("SEED_MOCK_DATA", "1")], || {
        Settings::new_with_env_file(false)
    })
    .unwrap();
    assert!(enabled.seed_mock_data);

    let disabled = with_env_vars(vec![("SEED_MOCK_DATA", "0")], || {
        Settings::new_with_env_file(false)
    })
    .unwrap();
    assert!(!disabled.seed_mock_data);

    // Unrecognised values leave the default in place
    let ignored = with_env_vars(vec![("SEED_MOCK_DATA", "maybe")], || {
        Settings::new_with_env_file(false)
    })
    .unwrap();
    assert!(ignored.seed_mock_data);
}

#[test]
fn test_process_env_wins_when_env_file_enabled() {
    let settings = with_env_vars(
        vec![
            ("BIND_ADDRESS", "127.0.0.1"),
            ("PORT", "4100"),
            ("CORS_ALLOW_ORIGINS", "http://localhost:5173"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "plain"),
            ("SEED_MOCK_DATA", "false"),
        ],
        || Settings::new_with_env_file(true),
    )
    .expect("Failed to create settings");

    assert_eq!(settings.bind_address, "127.0.0.1");
    assert_eq!(settings.port, 4100);
    assert_eq!(settings.cors_allow_origins, vec!["http://localhost:5173"]);
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.log_format, "plain");
    assert!(!settings.seed_mock_data);
}
