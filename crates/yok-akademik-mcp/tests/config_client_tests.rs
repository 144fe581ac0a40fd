//! Configuration and client construction tests.

use std::time::Duration;

use yok_akademik_mcp::client::YokAkademikClient;
use yok_akademik_mcp::config::{Config, api};

#[test]
fn test_default_config_points_at_backend() {
    let config = Config::default();
    assert_eq!(config.base_url, api::BASE_URL);
    assert_eq!(config.request_timeout, Duration::from_millis(120_000));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
}

#[test]
fn test_client_construction_with_defaults() {
    let client = YokAkademikClient::new(Config::default()).unwrap();
    assert_eq!(client.base_url(), api::BASE_URL);
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let config = Config::new(Some("not a url".to_string()), None);
    assert!(YokAkademikClient::new(config).is_err());
}

#[test]
fn test_client_debug_does_not_leak_internals() {
    let client = YokAkademikClient::new(Config::default()).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("YokAkademikClient"));
    assert!(debug.contains(api::BASE_URL));
}

#[test]
fn test_for_testing_uses_short_timeouts() {
    let config = Config::for_testing("http://127.0.0.1:1");
    assert!(config.request_timeout <= Duration::from_secs(5));
    assert!(config.connect_timeout <= Duration::from_secs(2));
}

#[test]
fn test_timeout_override_applies() {
    let config = Config::new(None, Some(30_000));
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    // Base URL stays at the default when only the timeout is overridden.
    assert_eq!(config.base_url, api::BASE_URL);
}
