// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use influencetx::config::Config;

// ─── Default values ──────────────────────────────────────────────────────────

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.api_key.is_none());
    assert_eq!(config.base_url, "https://openstates.org/api/v1");
    assert_eq!(config.state, "tx");
    assert!(!config.debug);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
}

// ─── TOML deserialization ────────────────────────────────────────────────────

#[test]
fn load_from_valid_toml() {
    let toml_str = r#"
api_key = "abc123"
base_url = "http://localhost:8000/api/v1"
state = "ok"
debug = true
timeout_secs = 10
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.base_url, "http://localhost:8000/api/v1");
    assert_eq!(config.state, "ok");
    assert!(config.debug);
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn load_partial_toml_uses_defaults() {
    let toml_str = r#"debug = true"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.debug);
    // Everything else should be default
    assert_eq!(config.state, "tx");
    assert_eq!(config.base_url, "https://openstates.org/api/v1");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn empty_toml_uses_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    let default = Config::default();
    assert_eq!(config.state, default.state);
    assert_eq!(config.base_url, default.base_url);
    assert_eq!(config.timeout_secs, default.timeout_secs);
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn rejects_non_http_base_url() {
    let config = Config {
        base_url: "ftp://openstates.org/api/v1".into(),
        ..Config::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        base_url: "not a url".into(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_bad_state() {
    for state in ["texas", "t", "t1", ""] {
        let config = Config {
            state: state.into(),
            ..Config::default()
        };
        assert!(config.validate().is_err(), "state '{state}' should be rejected");
    }
}

#[test]
fn rejects_timeout_out_of_range() {
    for timeout_secs in [0, 601] {
        let config = Config {
            timeout_secs,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

#[test]
fn missing_api_key_is_not_a_config_error() {
    let config = Config {
        api_key: None,
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

// ─── Display ─────────────────────────────────────────────────────────────────

#[test]
fn redacted_toml_hides_key() {
    let config = Config {
        api_key: Some("super-secret-key".into()),
        ..Config::default()
    };
    let shown = config.to_redacted_toml().unwrap();
    assert!(!shown.contains("super-secret-key"));
    assert!(shown.contains("api_key"));
    assert!(shown.contains("state = \"tx\""));
}

// ─── Error handling ──────────────────────────────────────────────────────────

#[test]
fn invalid_toml_returns_error() {
    let result: std::result::Result<Config, _> = toml::from_str("state = [invalid");
    assert!(result.is_err(), "invalid TOML should return an error");
}
