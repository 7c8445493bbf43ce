//! Precedence and failure coverage for the configuration loader.

use std::fs;
use std::time::Duration;

use cinedex_config::{ConfigLoadError, ConfigLoader, EnvConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("cinedex.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn file_values_apply_when_environment_is_silent() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
        [tmdb]
        api_key = "from-file"
        api_base = "http://127.0.0.1:8080/3/"
        language = "de-DE"
        request_timeout_secs = 3

        [catalog]
        target = 100
        page_ceiling = 5
        "#,
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect("config loads");

    let config = load.config;
    assert_eq!(config.tmdb.api_key.expose(), "from-file");
    assert_eq!(config.tmdb.api_base, "http://127.0.0.1:8080/3");
    assert_eq!(config.tmdb.image_base, "https://image.tmdb.org/t/p");
    assert_eq!(config.tmdb.language.as_deref(), Some("de-DE"));
    assert_eq!(config.tmdb.request_timeout, Duration::from_secs(3));
    assert_eq!(config.catalog.target, 100);
    assert_eq!(config.catalog.page_ceiling, 5);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));

    // plain http base is flagged
    assert!(
        load.warnings
            .items
            .iter()
            .any(|w| w.message.contains("not HTTPS"))
    );
}

#[test]
fn environment_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
        [tmdb]
        api_key = "from-file"
        region = "GB"

        [catalog]
        target = 100
        "#,
    );

    let env = EnvConfig {
        api_key: Some("from-env".into()),
        region: Some("US".into()),
        catalog_target: Some(40),
        ..EnvConfig::default()
    };

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .expect("config loads")
        .config;

    assert_eq!(config.tmdb.api_key.expose(), "from-env");
    assert_eq!(config.tmdb.region.as_deref(), Some("US"));
    assert_eq!(config.catalog.target, 40);
    assert_eq!(config.catalog.page_ceiling, 13);
}

#[test]
fn api_key_can_come_from_a_secret_file() {
    let dir = TempDir::new().expect("tempdir");
    let secret = dir.path().join("tmdb.key");
    fs::write(&secret, "  file-secret\n").expect("write secret");
    let path = write_config(&dir, "");

    let env = EnvConfig {
        api_key_file: Some(secret),
        ..EnvConfig::default()
    };

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .expect("config loads")
        .config;

    assert_eq!(config.tmdb.api_key.expose(), "file-secret");
}

#[test]
fn missing_api_key_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[catalog]\ntarget = 10\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("no key configured");

    assert!(matches!(err, ConfigLoadError::MissingApiKey));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load_with_env(EnvConfig {
            api_key: Some("k".into()),
            ..EnvConfig::default()
        })
        .expect_err("explicit path must exist");

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn invalid_base_url_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[tmdb]\napi_key = \"k\"\napi_base = \"not a url\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("bad url");

    assert!(matches!(
        err,
        ConfigLoadError::InvalidUrl {
            field: "api_base",
            ..
        }
    ));
}

#[test]
fn zero_page_ceiling_fails_guard_rails() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[tmdb]\napi_key = \"k\"\n[catalog]\npage_ceiling = 0\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("ceiling of zero");

    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn low_page_ceiling_only_warns() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[tmdb]\napi_key = \"k\"\n[catalog]\npage_ceiling = 2\n");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect("config loads");

    assert!(
        load.warnings
            .items
            .iter()
            .any(|w| w.message.contains("at most 40 entries"))
    );
}
