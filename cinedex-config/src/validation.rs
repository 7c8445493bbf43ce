use thiserror::Error;

use crate::constants::UPSTREAM_PAGE_SIZE;
use crate::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("catalog target must be at least 1")]
    EmptyCatalogTarget,
    #[error("page ceiling must be at least 1")]
    EmptyPageCeiling,
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.catalog.target == 0 {
        return Err(ConfigGuardRailError::EmptyCatalogTarget);
    }
    if config.catalog.page_ceiling == 0 {
        return Err(ConfigGuardRailError::EmptyPageCeiling);
    }
    if config.tmdb.request_timeout.is_zero() {
        return Err(ConfigGuardRailError::ZeroTimeout);
    }

    let reachable = config.catalog.page_ceiling as usize * UPSTREAM_PAGE_SIZE;
    if reachable < config.catalog.target {
        warnings.push_with_hint(
            format!(
                "page ceiling {} can yield at most {} entries, below the catalog target {}",
                config.catalog.page_ceiling, reachable, config.catalog.target
            ),
            "raise catalog.page_ceiling or lower catalog.target",
        );
    }

    if !config.tmdb.api_base.starts_with("https://") {
        warnings.push(format!(
            "TMDB API base {} is not HTTPS; the API key travels in the query string",
            config.tmdb.api_base
        ));
    }

    Ok(warnings)
}
