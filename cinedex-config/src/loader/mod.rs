pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, warn};
use url::Url;

use crate::{
    constants::{
        DEFAULT_API_BASE, DEFAULT_CATALOG_TARGET, DEFAULT_IMAGE_BASE,
        DEFAULT_PAGE_CEILING, DEFAULT_REQUEST_TIMEOUT_SECS,
    },
    models::{
        ApiKey, CatalogSettings, Config, ConfigMetadata, TmdbConfig, trim_base,
    },
    sources::{EnvConfig, FileConfig, FileTmdbConfig},
    validation::{self, ConfigWarnings},
};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("cinedex.toml"),
        PathBuf::from("config/cinedex.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, gather the process environment and resolve the final
    /// configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.resolve(EnvConfig::gather(), env_file_loaded)
    }

    /// Resolve against an explicit environment snapshot. Does not touch the
    /// process environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.resolve(env, false)
    }

    fn resolve(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No cinedex.toml detected; falling back to environment variables",
                "Create cinedex.toml or set CINEDEX_CONFIG_PATH",
            );
        }

        let config = compose_config(
            file_config.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::apply_guard_rails(&config)?);
        for warning in &warnings.items {
            warn!(
                detail = %warning.message,
                hint = ?warning.hint,
                "configuration warning"
            );
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(explicit) = &self.options.config_path
        {
            (Some(explicit.clone()), true)
        } else if let Some(from_env) = &env_config.config_path {
            (Some(from_env.clone()), true)
        } else {
            (
                DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .find(|candidate| candidate.exists())
                    .cloned(),
                false,
            )
        };

        let Some(path) = path else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        tmdb: file_tmdb,
        catalog: file_catalog,
    } = file;

    let api_key = resolve_api_key(&env, &file_tmdb)?;

    let api_base = validated_base(
        "api_base",
        env.api_base
            .clone()
            .or(file_tmdb.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
    )?;
    let image_base = validated_base(
        "image_base",
        env.image_base
            .clone()
            .or(file_tmdb.image_base.clone())
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string()),
    )?;

    let tmdb = TmdbConfig {
        api_key,
        api_base,
        image_base,
        language: env.language.clone().or(file_tmdb.language.clone()),
        region: env.region.clone().or(file_tmdb.region.clone()),
        request_timeout: Duration::from_secs(
            env.request_timeout_secs
                .or(file_tmdb.request_timeout_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        ),
        use_system_proxy: env
            .use_system_proxy
            .or(file_tmdb.use_system_proxy)
            .unwrap_or(true),
    };

    let catalog = CatalogSettings {
        target: env
            .catalog_target
            .or(file_catalog.target)
            .unwrap_or(DEFAULT_CATALOG_TARGET),
        page_ceiling: env
            .page_ceiling
            .or(file_catalog.page_ceiling)
            .unwrap_or(DEFAULT_PAGE_CEILING),
    };

    Ok(Config {
        tmdb,
        catalog,
        metadata,
    })
}

fn resolve_api_key(
    env: &EnvConfig,
    file_tmdb: &FileTmdbConfig,
) -> Result<ApiKey, ConfigLoadError> {
    if let Some(key) = env.api_key.clone() {
        return Ok(ApiKey::new(key));
    }

    for path in [env.api_key_file.as_ref(), file_tmdb.api_key_file.as_ref()]
        .into_iter()
        .flatten()
    {
        if let Some(secret) = read_secret_file(path)? {
            return Ok(ApiKey::new(secret));
        }
    }

    file_tmdb
        .api_key
        .clone()
        .filter(|value| !value.trim().is_empty())
        .map(|value| ApiKey::new(value.trim()))
        .ok_or(ConfigLoadError::MissingApiKey)
}

fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::SecretFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn validated_base(
    field: &'static str,
    raw: String,
) -> Result<String, ConfigLoadError> {
    Url::parse(raw.trim()).map_err(|source| ConfigLoadError::InvalidUrl {
        field,
        value: raw.clone(),
        source,
    })?;
    Ok(trim_base(raw))
}
