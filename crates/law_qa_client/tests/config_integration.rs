//! Integration tests for config load/save and endpoint resolution.

use law_qa_client::{config, Config};
use law_qa_client::config::{BACKEND_URL_ENV, DEFAULT_LOCAL_ENDPOINT, DEFAULT_REMOTE_ENDPOINT};
use predicates::prelude::*;

#[test]
fn load_existing_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        r#"
backend:
  endpoints:
    - "http://localhost:8000"
    - "https://immigration-law-chatbot.onrender.com"
video:
  source_url: "https://cdn.example.com/podcast.mp4"
"#,
    )
    .unwrap();

    let cfg = config::load(&config_path).expect("load should succeed");
    assert_eq!(
        cfg.backend.endpoints,
        vec![
            "http://localhost:8000",
            "https://immigration-law-chatbot.onrender.com"
        ]
    );
    assert_eq!(
        cfg.video.source_url.as_deref(),
        Some("https://cdn.example.com/podcast.mp4")
    );
}

#[test]
fn save_creates_directory_and_file_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("law-qa");
    let config_path = config_dir.join("config.yaml");
    assert!(!config_dir.exists(), "config dir should not exist yet");

    let mut config = Config::default();
    config.backend.endpoints = vec!["http://localhost:8000".into()];
    config.video.source_url = Some("https://cdn.example.com/podcast.mp4".into());

    config::save(&config_path, &config).expect("save should succeed");
    let pred = predicates::path::exists();
    assert!(
        pred.eval(&config_path),
        "config file should exist after save"
    );
    assert!(config_dir.exists(), "config directory should be created");
}

#[test]
fn round_trip_preserves_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    let yaml = r#"
backend:
  endpoints:
    - "http://localhost:8000"
    - "https://immigration-law-chatbot.onrender.com"
video:
  source_url: "https://cdn.example.com/podcast.mp4"
"#;
    std::fs::write(&config_path, yaml).unwrap();

    let loaded = config::load(&config_path).expect("load should succeed");
    config::save(&config_path, &loaded).expect("save should succeed");

    let contents = std::fs::read_to_string(&config_path).unwrap();
    let pred = predicates::str::contains("backend:");
    assert!(
        pred.eval(&contents),
        "saved file should contain backend section"
    );
    let pred = predicates::str::contains("endpoints");
    assert!(pred.eval(&contents), "saved file should contain endpoints");
    let pred = predicates::str::contains("video:");
    assert!(
        pred.eval(&contents),
        "saved file should contain video section"
    );

    let reloaded = config::load(&config_path).expect("reload should succeed");
    assert_eq!(reloaded.backend.endpoints, loaded.backend.endpoints);
    assert_eq!(reloaded.video.source_url, loaded.video.source_url);
}

/// Config path resolves to `~/.law-qa/config.yaml` using the current
/// platform's home dir. We override the HOME env var to a temp dir.
#[test]
fn default_config_path_uses_home_directory() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap().to_string();

    let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    let original = std::env::var(key).ok();

    std::env::set_var(key, &home);
    let path = config::default_config_path();
    // Restore.
    match original {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }

    let path = path.expect("should resolve a config path");
    let expected = dir.path().join(".law-qa").join("config.yaml");
    assert_eq!(path, expected);
}

/// Endpoint resolution order: env override first, then configured endpoints,
/// then the built-in local/production pair. One test so the env-var
/// manipulation cannot race with other assertions.
#[test]
fn endpoint_resolution_order() {
    let original = std::env::var(BACKEND_URL_ENV).ok();
    std::env::remove_var(BACKEND_URL_ENV);

    // No env, no config: the built-in local/production failover pair.
    let cfg = Config::default();
    assert_eq!(
        cfg.endpoints(),
        vec![
            DEFAULT_LOCAL_ENDPOINT.to_string(),
            DEFAULT_REMOTE_ENDPOINT.to_string()
        ]
    );

    // Configured endpoints replace the built-ins, order preserved.
    let mut cfg = Config::default();
    cfg.backend.endpoints = vec!["http://a".into(), "http://b".into()];
    assert_eq!(cfg.endpoints(), vec!["http://a", "http://b"]);

    // Env override is tried first.
    std::env::set_var(BACKEND_URL_ENV, "http://override");
    assert_eq!(
        cfg.endpoints(),
        vec!["http://override", "http://a", "http://b"]
    );

    // A blank env value is ignored.
    std::env::set_var(BACKEND_URL_ENV, "  ");
    assert_eq!(cfg.endpoints(), vec!["http://a", "http://b"]);

    match original {
        Some(v) => std::env::set_var(BACKEND_URL_ENV, v),
        None => std::env::remove_var(BACKEND_URL_ENV),
    }
}
