use std::sync::Arc;

use cinedex_model::{MovieDetail, MovieId, MovieSummary};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::navigation::{DetailTarget, NavigationContext};
use crate::catalog::CatalogCache;
use crate::providers::ProviderError;

/// Single movie view with previous/next through the list it was opened
/// from.
///
/// The displayed rank is the position in that list, not the catalog rank.
/// Without a carried list the shared catalog stands in, so the two
/// coincide only in that case.
#[derive(Debug)]
pub struct DetailController {
    cache: Arc<CatalogCache>,
    current: Option<MovieId>,
    detail: Option<MovieDetail>,
    error: Option<ProviderError>,
    context: NavigationContext,
    position: Option<usize>,
}

impl DetailController {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self {
            cache,
            current: None,
            detail: None,
            error: None,
            context: NavigationContext::default(),
            position: None,
        }
    }

    /// Fetch the detail record for `id` and settle the navigation list.
    ///
    /// The detail fetch and the list lookup run concurrently. An empty or
    /// absent `context` falls back to the shared catalog. A failed detail
    /// fetch is logged and leaves [`DetailController::detail`] empty.
    pub async fn resolve(
        &mut self,
        id: MovieId,
        context: Option<NavigationContext>,
        cancel: &CancellationToken,
    ) -> Option<&MovieDetail> {
        let source = self.cache.source();
        let (fetched, context) = tokio::join!(
            source.movie_detail(id),
            context_or_catalog(&self.cache, context, cancel)
        );

        let context = context.unwrap_or_default();
        self.position = context.position_of(id);
        self.context = context;
        self.current = Some(id);
        match fetched {
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
            }
            Err(err) => {
                warn!(movie_id = %id, error = %err, "movie detail unavailable");
                self.detail = None;
                self.error = Some(err);
            }
        }

        debug!(
            movie_id = %id,
            position = ?self.position,
            context_len = self.context.len(),
            "detail resolved"
        );
        self.detail.as_ref()
    }

    /// [`DetailController::resolve`] for a target produced by a list view
    /// or by [`DetailController::previous`] / [`DetailController::next`].
    pub async fn follow(
        &mut self,
        target: DetailTarget,
        cancel: &CancellationToken,
    ) -> Option<&MovieDetail> {
        self.resolve(target.id, target.context, cancel).await
    }

    pub fn current(&self) -> Option<MovieId> {
        self.current
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    /// Why the last detail fetch failed, if it did.
    pub fn error(&self) -> Option<&ProviderError> {
        self.error.as_ref()
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// 1-based position within the navigation list.
    pub fn displayed_rank(&self) -> Option<usize> {
        self.position.map(|position| position + 1)
    }

    /// The list entry for the current movie.
    pub fn summary(&self) -> Option<&Arc<MovieSummary>> {
        self.position.and_then(|position| self.context.get(position))
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.position, Some(position) if position > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.position, Some(position) if position + 1 < self.context.len())
    }

    /// Target for the entry before the current one; `None` at the start of
    /// the list or when the current movie is not in it.
    pub fn previous(&self) -> Option<DetailTarget> {
        let position = self.position?.checked_sub(1)?;
        self.target_at(position)
    }

    pub fn next(&self) -> Option<DetailTarget> {
        let position = self.position? + 1;
        self.target_at(position)
    }

    fn target_at(&self, position: usize) -> Option<DetailTarget> {
        let movie = self.context.get(position)?;
        Some(DetailTarget::with_context(movie.id, self.context.clone()))
    }
}

/// `None` when the catalog build was cancelled; a partial catalog is
/// never used for positions.
async fn context_or_catalog(
    cache: &CatalogCache,
    context: Option<NavigationContext>,
    cancel: &CancellationToken,
) -> Option<NavigationContext> {
    match context {
        Some(context) if !context.is_empty() => Some(context),
        _ => {
            let catalog = cache.get(cancel).await;
            if catalog.report().cancelled {
                debug!("catalog build cancelled; detail has no navigation list");
                return None;
            }
            Some(NavigationContext::from_catalog(&catalog))
        }
    }
}
