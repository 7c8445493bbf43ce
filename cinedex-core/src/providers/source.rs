use async_trait::async_trait;
use cinedex_model::{Genre, GenreId, MovieDetail, MovieId, MovieSummary};
use std::fmt::Debug;

/// Upstream fetch failure.
///
/// Covers transport errors, non-success responses and undecodable bodies.
/// Kept distinct from an empty result so each caller can pick its own
/// degrade-or-surface policy.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read-only access to the upstream movie catalog.
///
/// Every method is a single best-effort attempt: no retries, no backoff.
#[async_trait]
pub trait CatalogSource: Send + Sync + Debug {
    /// One page (1-based) of the top-rated listing, in upstream rank order.
    async fn top_rated(
        &self,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError>;

    async fn movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieDetail, ProviderError>;

    /// The global movie genre vocabulary.
    async fn genres(&self) -> Result<Vec<Genre>, ProviderError>;

    /// One page of the most popular movies tagged with `genre`.
    async fn discover_by_genre(
        &self,
        genre: GenreId,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError>;
}
