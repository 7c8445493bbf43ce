//! Shared configuration library for Cinedex.
//!
//! Resolves the upstream credential, endpoints and catalog limits from a
//! `cinedex.toml` file, an optional `.env` file and process environment
//! variables. Environment values win over file values, which win over the
//! built-in defaults. The upstream credential has no default: it must be
//! supplied at runtime and is never compiled into the binary.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{ApiKey, CatalogSettings, Config, ConfigMetadata, TmdbConfig};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
