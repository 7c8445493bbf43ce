use std::sync::Arc;

use cinedex_model::{MovieId, SortField, SortOrder};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::navigation::DetailTarget;
use super::selection::{RankedMovie, ViewSelection};
use crate::catalog::{CatalogCache, RankedCatalog};
use crate::query::{filter_by_title, sort_movies};

/// Free-text search over the ranked catalog with a user-chosen sort.
///
/// Starts with an empty query sorted by title, ascending.
#[derive(Debug)]
pub struct SearchController {
    cache: Arc<CatalogCache>,
    catalog: Option<Arc<RankedCatalog>>,
    query: String,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl SearchController {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self {
            cache,
            catalog: None,
            query: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Load the shared catalog. Until this completes the view is empty and
    /// [`SearchController::is_loading`] reports `true`. A cancelled build
    /// is discarded and the view stays loading.
    pub async fn activate(&mut self, cancel: &CancellationToken) {
        let catalog = self.cache.get(cancel).await;
        if catalog.report().cancelled {
            debug!("search activation cancelled");
            return;
        }
        debug!(entries = catalog.len(), "search view activated");
        self.catalog = Some(catalog);
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.reversed();
    }

    /// Filter by title, then stable sort. Each row keeps its rank in the
    /// unfiltered catalog.
    pub fn derive_view(&self) -> ViewSelection {
        let Some(catalog) = &self.catalog else {
            return ViewSelection::default();
        };

        let ranked = RankedMovie::rank_all(catalog);
        let mut rows: Vec<RankedMovie> = filter_by_title(&ranked, &self.query)
            .into_iter()
            .cloned()
            .collect();
        sort_movies(&mut rows, self.sort_field, self.sort_order);
        ViewSelection::new(rows)
    }

    /// Navigate to `id`, carrying the current view as context. `None` when
    /// the movie is not visible.
    pub fn open(&self, id: MovieId) -> Option<DetailTarget> {
        let view = self.derive_view();
        view.position_of(id)?;
        Some(DetailTarget::with_context(id, view.to_context()))
    }
}
