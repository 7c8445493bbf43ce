use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::aggregator::Aggregator;
use super::ranked::RankedCatalog;
use crate::providers::CatalogSource;

/// Process-wide ranked catalog, built once and shared read-only.
///
/// Concurrent first callers of [`CatalogCache::get`] wait on a single
/// build. A build that was cancelled, or that lost every page to upstream
/// failures, is handed to its caller but not kept.
#[derive(Debug)]
pub struct CatalogCache {
    aggregator: Aggregator,
    slot: RwLock<Option<Arc<RankedCatalog>>>,
    build_lock: Mutex<()>,
}

impl CatalogCache {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            slot: RwLock::new(None),
            build_lock: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        self.aggregator.source()
    }

    /// The cached catalog, if one has been built.
    pub async fn cached(&self) -> Option<Arc<RankedCatalog>> {
        self.slot.read().await.clone()
    }

    /// The shared catalog, aggregating it first if nothing is cached.
    pub async fn get(&self, cancel: &CancellationToken) -> Arc<RankedCatalog> {
        if let Some(catalog) = self.cached().await {
            return catalog;
        }

        let _guard = self.build_lock.lock().await;
        if let Some(catalog) = self.cached().await {
            debug!("catalog populated while waiting for build lock");
            return catalog;
        }

        self.build_and_store(cancel).await.0
    }

    /// Rebuild unconditionally. When the rebuild is not cacheable the
    /// previous catalog stays in place and is returned.
    pub async fn refresh(
        &self,
        cancel: &CancellationToken,
    ) -> Arc<RankedCatalog> {
        let _guard = self.build_lock.lock().await;
        let previous = self.cached().await;

        match (self.build_and_store(cancel).await, previous) {
            ((_, false), Some(previous)) => {
                info!("catalog refresh incomplete; keeping previous catalog");
                previous
            }
            ((fresh, _), _) => fresh,
        }
    }

    /// Drop the cached catalog; the next [`CatalogCache::get`] rebuilds.
    pub async fn invalidate(&self) {
        self.slot.write().await.take();
        debug!("catalog cache invalidated");
    }

    async fn build_and_store(
        &self,
        cancel: &CancellationToken,
    ) -> (Arc<RankedCatalog>, bool) {
        let catalog = Arc::new(self.aggregator.build(cancel).await);
        let stored = catalog.is_cacheable();
        if stored {
            *self.slot.write().await = Some(Arc::clone(&catalog));
        }
        (catalog, stored)
    }
}
