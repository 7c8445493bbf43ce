use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use cinedex_config::CatalogSettings;
use cinedex_config::constants::{DEFAULT_CATALOG_TARGET, DEFAULT_PAGE_CEILING};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::ranked::{AggregationReport, RankedCatalog};
use crate::providers::CatalogSource;

/// Size limits for one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPolicy {
    /// Maximum number of entries kept.
    pub target: usize,
    /// Last listing page that may be requested.
    pub page_ceiling: u32,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            target: DEFAULT_CATALOG_TARGET,
            page_ceiling: DEFAULT_PAGE_CEILING,
        }
    }
}

impl From<CatalogSettings> for AggregationPolicy {
    fn from(settings: CatalogSettings) -> Self {
        Self {
            target: settings.target,
            page_ceiling: settings.page_ceiling,
        }
    }
}

/// Pages the top-rated listing into a [`RankedCatalog`].
#[derive(Debug, Clone)]
pub struct Aggregator {
    source: Arc<dyn CatalogSource>,
    policy: AggregationPolicy,
}

impl Aggregator {
    pub fn new(source: Arc<dyn CatalogSource>, policy: AggregationPolicy) -> Self {
        Self { source, policy }
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Request pages 1..=ceiling one at a time until the target is reached.
    ///
    /// Failed and empty pages are recorded and skipped. The token is checked
    /// before every request and raced against the one in flight; a
    /// cancelled run returns what it had gathered, with
    /// [`AggregationReport::cancelled`] set.
    pub async fn build(&self, cancel: &CancellationToken) -> RankedCatalog {
        let AggregationPolicy {
            target,
            page_ceiling,
        } = self.policy;
        let started = Instant::now();
        let mut report = AggregationReport::default();
        let mut seen = HashSet::with_capacity(target);
        let mut entries = Vec::with_capacity(target);

        for page in 1..=page_ceiling {
            if entries.len() >= target {
                break;
            }
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            report.pages_requested += 1;
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                outcome = self.source.top_rated(page) => outcome,
            };

            match outcome {
                Ok(batch) if batch.is_empty() => {
                    debug!(page, "top rated page was empty");
                    report.empty_pages.push(page);
                }
                Ok(batch) => {
                    let received = batch.len();
                    for movie in batch {
                        if seen.insert(movie.id) {
                            entries.push(Arc::new(movie));
                        } else {
                            report.duplicates_dropped += 1;
                        }
                    }
                    debug!(page, received, total = entries.len(), "page aggregated");
                }
                Err(err) => {
                    warn!(page, error = %err, "skipping failed top rated page");
                    report.failed_pages.push(page);
                }
            }
        }

        entries.truncate(target);

        if report.cancelled {
            info!(
                entries = entries.len(),
                pages = report.pages_requested,
                "catalog aggregation cancelled"
            );
        } else {
            info!(
                entries = entries.len(),
                pages = report.pages_requested,
                failed = report.failed_pages.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "catalog aggregated"
            );
        }

        RankedCatalog::from_parts(entries, report)
    }
}
