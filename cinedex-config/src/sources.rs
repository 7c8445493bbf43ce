use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_system_proxy: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ceiling: Option<u32>,
}

/// Values read from process environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub api_key_file: Option<PathBuf>,
    pub api_base: Option<String>,
    pub image_base: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub use_system_proxy: Option<bool>,
    pub catalog_target: Option<usize>,
    pub page_ceiling: Option<u32>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        let mut env_config = Self::default();

        env_config.config_path =
            non_empty_var("CINEDEX_CONFIG_PATH").map(PathBuf::from);
        env_config.api_key = non_empty_var("TMDB_API_KEY");
        env_config.api_key_file =
            non_empty_var("TMDB_API_KEY_FILE").map(PathBuf::from);
        env_config.api_base = non_empty_var("TMDB_API_BASE");
        env_config.image_base = non_empty_var("TMDB_IMAGE_BASE");
        env_config.language = non_empty_var("TMDB_LANG");
        env_config.region = non_empty_var("TMDB_REGION");
        env_config.request_timeout_secs =
            non_empty_var("CINEDEX_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok());
        env_config.use_system_proxy =
            non_empty_var("CINEDEX_USE_SYSTEM_PROXY").and_then(|s| parse_bool(&s));
        env_config.catalog_target = non_empty_var("CINEDEX_CATALOG_TARGET")
            .and_then(|s| s.parse().ok());
        env_config.page_ceiling = non_empty_var("CINEDEX_PAGE_CEILING")
            .and_then(|s| s.parse().ok());

        env_config
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
