// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Cinder configuration system.

use cinder_config::diagnostic::{suggest_key, ConfigError};
use cinder_config::model::CinderConfig;
use cinder_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_cinder_config() {
    let toml = r#"
[app]
name = "cinder-staging"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9100

[storage]
database_path = "/tmp/cinder-test.db"
wal_mode = false

[rewind]
history_capacity = 20
daily_free_limit = 2
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "cinder-staging");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.storage.database_path, "/tmp/cinder-test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.rewind.history_capacity, 20);
    assert_eq!(config.rewind.daily_free_limit, 2);
}

/// Unknown field in [rewind] produces an error mentioning the bad key.
#[test]
fn unknown_field_in_rewind_produces_error() {
    let toml = r#"
[rewind]
daily_fre_limit = 2
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("daily_fre_limit"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// load_and_validate_str surfaces unknown keys as diagnostics that name
/// the offending key.
#[test]
fn unknown_key_produces_a_diagnostic_naming_it() {
    let toml = r#"
[server]
prot = 9100
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce diagnostics");
    assert!(!errors.is_empty());
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(
        rendered
            .iter()
            .any(|m| m.contains("prot") || m.contains("unknown")),
        "diagnostics should mention the bad key, got: {rendered:?}"
    );
}

/// Semantic validation errors flow through load_and_validate_str.
#[test]
fn semantic_validation_errors_are_reported() {
    let toml = r#"
[rewind]
history_capacity = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("history_capacity")
    )));
}

/// Wrong value types are reported as InvalidType diagnostics.
#[test]
fn wrong_type_produces_invalid_type_diagnostic() {
    let toml = r#"
[server]
port = "not-a-number"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce diagnostics");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "expected a type error diagnostic, got: {errors:?}"
    );
}

/// Defaults pass full validation.
#[test]
fn default_config_passes_load_and_validate_str() {
    let config = load_and_validate_str("").expect("defaults should be valid");
    assert_eq!(config.rewind.history_capacity, 10);
    assert_eq!(config.rewind.daily_free_limit, 1);
}

/// suggest_key is exported for diagnostics tooling.
#[test]
fn suggest_key_matches_close_typos_only() {
    let valid = &["history_capacity", "daily_free_limit"];
    assert_eq!(
        suggest_key("history_capcity", valid),
        Some("history_capacity".to_string())
    );
    assert_eq!(suggest_key("qqqq", valid), None);
}

/// CinderConfig::default matches the documented defaults.
#[test]
fn documented_defaults() {
    let config = CinderConfig::default();
    assert_eq!(config.server.port, 8700);
    assert_eq!(config.app.log_level, "info");
    assert!(config.storage.wal_mode);
}
