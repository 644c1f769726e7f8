//! Tests for applying command-line overrides to config.

use crate::cli::effective_config;
use userlist_core::config::{UserlistConfig, DEFAULT_ENDPOINT};

#[test]
fn endpoint_override_replaces_config() {
    let cfg = effective_config(
        UserlistConfig::default(),
        Some("https://api.example.org/users/".to_string()),
    )
    .unwrap();
    assert_eq!(cfg.endpoint, "https://api.example.org/users/");
}

#[test]
fn no_override_keeps_config() {
    let cfg = effective_config(UserlistConfig::default(), None).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn invalid_override_is_rejected() {
    assert!(effective_config(UserlistConfig::default(), Some("nope".to_string())).is_err());
}
