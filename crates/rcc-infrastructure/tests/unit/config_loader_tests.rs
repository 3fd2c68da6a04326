//! Tests for file-based configuration loading and validation

use rcc_infrastructure::config::loader::validate_app_config;
use rcc_infrastructure::config::{AppConfig, ConfigLoader};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.server.port, 3000);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.provider, "redis");
    assert_eq!(config.cache.default_ttl_secs, 3600);
    assert_eq!(config.cache.namespace, "text-processing");
    assert_eq!(config.analysis.latency_ms, 2000);
    assert_eq!(config.logging.level, "info");
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_file_overrides_defaults() {
    let file = config_file(
        r#"
[server]
port = 8080

[cache]
provider = "moka"
default_ttl_secs = 60

[analysis]
latency_ms = 0
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load config");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.cache.provider, "moka");
    assert_eq!(config.cache.default_ttl_secs, 60);
    assert_eq!(config.cache.namespace, "text-processing");
    assert_eq!(config.analysis.latency_ms, 0);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().expect("load config");

    assert_eq!(config.server, AppConfig::default().server);
    assert_eq!(loader.config_path(), Some(dir.path().join("absent.toml").as_path()));
}

#[test]
fn test_zero_port_rejected() {
    let file = config_file("[server]\nport = 0\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("Server port cannot be 0"));
}

#[test]
fn test_zero_ttl_rejected_only_when_enabled() {
    let mut config = AppConfig::default();
    config.cache.default_ttl_secs = 0;
    assert!(validate_app_config(&config).is_err());

    config.cache.enabled = false;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_remote_providers_require_url() {
    for provider in ["redis", "tiered"] {
        let mut config = AppConfig::default();
        config.cache.provider = provider.to_string();
        config.cache.redis_url = None;

        let err = validate_app_config(&config).unwrap_err();
        assert!(err.to_string().contains("requires cache.redis_url"));
    }

    let mut config = AppConfig::default();
    config.cache.provider = "moka".to_string();
    config.cache.redis_url = None;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_unknown_provider_rejected() {
    let mut config = AppConfig::default();
    config.cache.provider = "memcached".to_string();

    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("Unknown cache provider 'memcached'"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let file = config_file("[server]\nport = \"not a number\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, rcc_domain::Error::Configuration { .. }));
}

#[test]
fn test_saved_file_loads_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rcc.toml");
    let mut config = AppConfig::default();
    config.cache.provider = "moka".to_string();
    config.analysis.latency_ms = 250;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save config");
    let loaded = loader.load().expect("load config");

    assert_eq!(loaded.cache.provider, "moka");
    assert_eq!(loaded.analysis.latency_ms, 250);
}

#[test]
fn test_save_into_missing_directory_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent").join("rcc.toml");

    let err = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .unwrap_err();

    assert!(matches!(err, rcc_domain::Error::Infrastructure { .. }));
    assert!(err.to_string().contains("rcc.toml"));
}
