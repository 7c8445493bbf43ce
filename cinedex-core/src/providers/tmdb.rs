use std::fmt;

use async_trait::async_trait;
use cinedex_config::{ApiKey, TmdbConfig};
use cinedex_model::{Genre, GenreId, MovieDetail, MovieId, MovieSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::listing::{
    BaseQuery, DiscoverMovieQuery, GenreList, ListingPage, TopRatedQuery,
};
use super::source::{CatalogSource, ProviderError};
use crate::error::CatalogError;

const NO_QUERY: [(&str, &str); 0] = [];

/// `reqwest` backed client for the TMDB v3 REST API.
pub struct TmdbCatalogClient {
    http: reqwest::Client,
    api_base: String,
    api_key: ApiKey,
    language: Option<String>,
    region: Option<String>,
}

impl fmt::Debug for TmdbCatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalogClient")
            .field("api_base", &self.api_base)
            .field("language", &self.language)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl TmdbCatalogClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, CatalogError> {
        Url::parse(&config.api_base).map_err(|source| {
            CatalogError::InvalidBaseUrl {
                field: "api_base",
                value: config.api_base.clone(),
                source,
            }
        })?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("cinedex/", env!("CARGO_PKG_VERSION")));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(CatalogError::HttpClient)?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            region: config.region.clone(),
        })
    }

    fn base_query(&self) -> BaseQuery<'_> {
        BaseQuery {
            api_key: self.api_key.expose(),
            language: self.language.as_deref(),
        }
    }

    async fn get_tmdb_json<Q, T>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .http
            .get(&url)
            .query(&self.base_query())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        debug!(%path, status = status.as_u16(), "tmdb response");

        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| ProviderError::Parse(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::Api(message)),
        }
    }
}

#[async_trait]
impl CatalogSource for TmdbCatalogClient {
    async fn top_rated(
        &self,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError> {
        let query = TopRatedQuery {
            page: page.max(1),
            region: self.region.as_deref(),
        };

        let listing: ListingPage<MovieSummary> =
            self.get_tmdb_json("/movie/top_rated", &query).await?;
        debug!(
            page = listing.page,
            total_pages = listing.total_pages,
            entries = listing.results.len(),
            "top rated page"
        );
        Ok(listing.results)
    }

    async fn movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieDetail, ProviderError> {
        self.get_tmdb_json(&format!("/movie/{id}"), &NO_QUERY).await
    }

    async fn genres(&self) -> Result<Vec<Genre>, ProviderError> {
        let list: GenreList =
            self.get_tmdb_json("/genre/movie/list", &NO_QUERY).await?;
        Ok(list.genres)
    }

    async fn discover_by_genre(
        &self,
        genre: GenreId,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError> {
        let query = DiscoverMovieQuery {
            with_genres: genre.get(),
            sort_by: "popularity.desc",
            include_adult: false,
            page: page.max(1),
            region: self.region.as_deref(),
        };

        let listing: ListingPage<MovieSummary> =
            self.get_tmdb_json("/discover/movie", &query).await?;
        Ok(listing.results)
    }
}
