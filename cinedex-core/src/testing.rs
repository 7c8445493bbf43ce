//! In-memory [`CatalogSource`] for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cinedex_model::{Genre, GenreId, MovieDetail, MovieId, MovieSummary};
use tokio_util::sync::CancellationToken;

use crate::providers::{CatalogSource, ProviderError};
use crate::{AggregationPolicy, Aggregator, CatalogCache};

pub(crate) fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary::new(id, title)
}

pub(crate) fn detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id: MovieId(id),
        title: title.to_string(),
        overview: String::new(),
        tagline: None,
        poster_path: None,
        backdrop_path: None,
        release_date: None,
        vote_average: 0.0,
        vote_count: 0,
        popularity: 0.0,
        runtime: Some(120),
        genres: Vec::new(),
        revenue: 0,
        budget: 0,
        status: None,
        homepage: None,
    }
}

/// `count` pages of `per_page` entries with ids numbered from 1.
pub(crate) fn numbered_pages(
    count: usize,
    per_page: usize,
) -> Vec<Vec<MovieSummary>> {
    (0..count)
        .map(|page| {
            (0..per_page)
                .map(|slot| {
                    let id = (page * per_page + slot + 1) as u64;
                    movie(id, &format!("Movie {id}"))
                })
                .collect()
        })
        .collect()
}

/// `ProviderError` is not `Clone` because of its transport variant.
fn replay(err: &ProviderError) -> ProviderError {
    match err {
        ProviderError::Api(message) => ProviderError::Api(message.clone()),
        ProviderError::NotFound => ProviderError::NotFound,
        ProviderError::RateLimited => ProviderError::RateLimited,
        ProviderError::InvalidApiKey => ProviderError::InvalidApiKey,
        ProviderError::Network(err) => ProviderError::Api(err.to_string()),
        ProviderError::Parse(message) => ProviderError::Parse(message.clone()),
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeCatalog {
    pages: Vec<Result<Vec<MovieSummary>, ProviderError>>,
    details: HashMap<MovieId, MovieDetail>,
    genres: Option<Result<Vec<Genre>, ProviderError>>,
    cancel_on_page: Option<(u32, CancellationToken)>,
    latency: Option<Duration>,
    requested_pages: Mutex<Vec<u32>>,
    detail_requests: Mutex<Vec<MovieId>>,
}

impl FakeCatalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(
        mut self,
        page: Result<Vec<MovieSummary>, ProviderError>,
    ) -> Self {
        self.pages.push(page);
        self
    }

    pub(crate) fn with_pages(
        mut self,
        pages: impl IntoIterator<Item = Vec<MovieSummary>>,
    ) -> Self {
        self.pages.extend(pages.into_iter().map(Ok));
        self
    }

    pub(crate) fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id, detail);
        self
    }

    pub(crate) fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = Some(Ok(genres));
        self
    }

    pub(crate) fn with_genres_error(mut self, err: ProviderError) -> Self {
        self.genres = Some(Err(err));
        self
    }

    /// Fire `token` while serving `page`.
    pub(crate) fn cancel_on_page(
        mut self,
        page: u32,
        token: CancellationToken,
    ) -> Self {
        self.cancel_on_page = Some((page, token));
        self
    }

    pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn page(
        &self,
        page: u32,
    ) -> Option<&Result<Vec<MovieSummary>, ProviderError>> {
        (page as usize)
            .checked_sub(1)
            .and_then(|index| self.pages.get(index))
    }

    pub(crate) fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages
            .lock()
            .map(|pages| pages.clone())
            .unwrap_or_default()
    }

    pub(crate) fn detail_requests(&self) -> Vec<MovieId> {
        self.detail_requests
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn top_rated(
        &self,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError> {
        if let Ok(mut log) = self.requested_pages.lock() {
            log.push(page);
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some((at, token)) = &self.cancel_on_page
            && *at == page
        {
            token.cancel();
        }

        match self.page(page) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(err)) => Err(replay(err)),
            None => Ok(Vec::new()),
        }
    }

    async fn movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieDetail, ProviderError> {
        if let Ok(mut log) = self.detail_requests.lock() {
            log.push(id);
        }
        self.details.get(&id).cloned().ok_or(ProviderError::NotFound)
    }

    async fn genres(&self) -> Result<Vec<Genre>, ProviderError> {
        match &self.genres {
            Some(Ok(genres)) => Ok(genres.clone()),
            Some(Err(err)) => Err(replay(err)),
            None => Ok(Vec::new()),
        }
    }

    async fn discover_by_genre(
        &self,
        genre: GenreId,
        page: u32,
    ) -> Result<Vec<MovieSummary>, ProviderError> {
        match self.page(page) {
            Some(Ok(entries)) => Ok(entries
                .iter()
                .filter(|movie| movie.has_genre(genre))
                .cloned()
                .collect()),
            Some(Err(err)) => Err(replay(err)),
            None => Ok(Vec::new()),
        }
    }
}

/// Shared cache over `source` with the default policy.
pub(crate) fn cache_over(
    source: FakeCatalog,
) -> (Arc<FakeCatalog>, Arc<CatalogCache>) {
    let source = Arc::new(source);
    let cache = CatalogCache::new(Aggregator::new(
        source.clone(),
        AggregationPolicy::default(),
    ));
    (source, Arc::new(cache))
}
