use std::sync::Arc;

use cinedex_model::{Genre, GenreId, GenreSet, MovieId};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::navigation::DetailTarget;
use super::selection::{RankedMovie, ViewSelection};
use crate::catalog::{CatalogCache, RankedCatalog};
use crate::providers::fetch_genres;
use crate::query::filter_by_genres;

/// Poster grid over the ranked catalog, narrowed by genre chips.
#[derive(Debug)]
pub struct GalleryController {
    cache: Arc<CatalogCache>,
    catalog: Option<Arc<RankedCatalog>>,
    genres: Vec<Genre>,
    selected: GenreSet,
}

impl GalleryController {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self {
            cache,
            catalog: None,
            genres: Vec::new(),
            selected: GenreSet::new(),
        }
    }

    /// Load the genre vocabulary and the shared catalog concurrently. A
    /// failed vocabulary fetch leaves the chip list empty; a cancelled
    /// catalog build is discarded and the view stays loading.
    pub async fn activate(&mut self, cancel: &CancellationToken) {
        let source = self.cache.source();
        let (genres, catalog) =
            tokio::join!(fetch_genres(source.as_ref()), self.cache.get(cancel));
        self.genres = genres;
        if catalog.report().cancelled {
            debug!("gallery activation cancelled");
            return;
        }
        debug!(
            genres = self.genres.len(),
            entries = catalog.len(),
            "gallery view activated"
        );
        self.catalog = Some(catalog);
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn selected(&self) -> &GenreSet {
        &self.selected
    }

    /// Returns whether `genre` is selected afterwards.
    pub fn toggle_genre(&mut self, genre: GenreId) -> bool {
        self.selected.toggle(genre)
    }

    /// The "All" chip.
    pub fn select_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, genre: GenreId) -> bool {
        self.selected.contains(genre)
    }

    pub fn all_selected(&self) -> bool {
        self.selected.is_empty()
    }

    /// Entries carrying every selected genre, in catalog order.
    pub fn derive_view(&self) -> ViewSelection {
        let Some(catalog) = &self.catalog else {
            return ViewSelection::default();
        };

        let ranked = RankedMovie::rank_all(catalog);
        let rows = filter_by_genres(&ranked, &self.selected)
            .into_iter()
            .cloned()
            .collect();
        ViewSelection::new(rows)
    }

    pub fn open(&self, id: MovieId) -> Option<DetailTarget> {
        let view = self.derive_view();
        view.position_of(id)?;
        Some(DetailTarget::with_context(id, view.to_context()))
    }
}
