use thiserror::Error;

use crate::providers::ProviderError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid {field} URL '{value}': {source}")]
    InvalidBaseUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
