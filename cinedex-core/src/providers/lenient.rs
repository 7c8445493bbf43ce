//! Best-effort wrappers over [`CatalogSource`] that log a failure and
//! degrade to an empty or absent result instead of returning it.

use cinedex_model::{Genre, GenreId, MovieDetail, MovieId, MovieSummary};
use tracing::warn;

use super::source::CatalogSource;

pub async fn fetch_top_rated(
    source: &dyn CatalogSource,
    page: u32,
) -> Vec<MovieSummary> {
    match source.top_rated(page).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(page, error = %err, "top rated page fetch failed");
            Vec::new()
        }
    }
}

pub async fn fetch_detail(
    source: &dyn CatalogSource,
    id: MovieId,
) -> Option<MovieDetail> {
    match source.movie_detail(id).await {
        Ok(detail) => Some(detail),
        Err(err) => {
            warn!(movie_id = %id, error = %err, "movie detail fetch failed");
            None
        }
    }
}

pub async fn fetch_genres(source: &dyn CatalogSource) -> Vec<Genre> {
    match source.genres().await {
        Ok(genres) => genres,
        Err(err) => {
            warn!(error = %err, "genre vocabulary fetch failed");
            Vec::new()
        }
    }
}

pub async fn fetch_by_genre(
    source: &dyn CatalogSource,
    genre: GenreId,
    page: u32,
) -> Vec<MovieSummary> {
    match source.discover_by_genre(genre, page).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(genre_id = %genre, page, error = %err, "discover fetch failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use crate::testing::{FakeCatalog, detail, movie};

    #[tokio::test]
    async fn failures_degrade_to_empty() {
        let source = FakeCatalog::new()
            .with_page(Err(ProviderError::RateLimited))
            .with_genres_error(ProviderError::InvalidApiKey);

        assert!(fetch_top_rated(&source, 1).await.is_empty());
        assert!(fetch_genres(&source).await.is_empty());
        assert!(fetch_detail(&source, MovieId(7)).await.is_none());
        assert!(fetch_by_genre(&source, GenreId(18), 1).await.is_empty());
    }

    #[tokio::test]
    async fn successes_pass_through() {
        let source = FakeCatalog::new()
            .with_page(Ok(vec![movie(1, "Alpha"), movie(2, "Beta")]))
            .with_genres(vec![Genre::new(18u32, "Drama")])
            .with_detail(detail(1, "Alpha"));

        assert_eq!(fetch_top_rated(&source, 1).await.len(), 2);
        assert_eq!(fetch_genres(&source).await.len(), 1);
        let detail = fetch_detail(&source, MovieId(1)).await;
        assert_eq!(detail.map(|d| d.title), Some("Alpha".to_string()));
    }
}
