use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_CATALOG_TARGET, DEFAULT_IMAGE_BASE,
    DEFAULT_PAGE_CEILING, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub catalog: CatalogSettings,
    pub metadata: ConfigMetadata,
}

/// Upstream API credential. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: ApiKey,
    /// Base of the v3 REST API, without a trailing slash.
    pub api_base: String,
    /// Base of the image CDN, without a trailing slash.
    pub image_base: String,
    pub language: Option<String>,
    pub region: Option<String>,
    pub request_timeout: Duration,
    pub use_system_proxy: bool,
}

impl TmdbConfig {
    /// Defaults for everything except the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            language: None,
            region: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            use_system_proxy: true,
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = trim_base(base.into());
        self
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = trim_base(base.into());
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

/// Limits for building the ranked catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSettings {
    pub target: usize,
    pub page_ceiling: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_CATALOG_TARGET,
            page_ceiling: DEFAULT_PAGE_CEILING,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

pub(crate) fn trim_base(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
