use std::collections::HashMap;
use std::sync::Arc;

use cinedex_model::{MovieId, MovieSummary};

/// What happened while a catalog was being aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationReport {
    pub pages_requested: u32,
    /// Pages whose fetch returned an error, in request order.
    pub failed_pages: Vec<u32>,
    /// Pages that succeeded with no entries.
    pub empty_pages: Vec<u32>,
    pub duplicates_dropped: usize,
    pub cancelled: bool,
}

impl AggregationReport {
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.failed_pages.is_empty()
    }
}

/// Rank-ordered, duplicate-free list of top-rated movies.
///
/// Entry order is upstream rank: page-major, then within-page order. The
/// catalog is read-only once built; entries are shared by `Arc` so views
/// and navigation contexts can hold them without copying.
#[derive(Debug, Clone, Default)]
pub struct RankedCatalog {
    entries: Vec<Arc<MovieSummary>>,
    positions: HashMap<MovieId, usize>,
    report: AggregationReport,
}

impl RankedCatalog {
    /// Build from already ordered summaries. Later duplicates of an id are
    /// dropped.
    pub fn from_summaries<I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = MovieSummary>,
    {
        let mut report = AggregationReport::default();
        let mut entries = Vec::new();
        let mut positions = HashMap::new();
        for movie in summaries {
            if positions.contains_key(&movie.id) {
                report.duplicates_dropped += 1;
                continue;
            }
            positions.insert(movie.id, entries.len());
            entries.push(Arc::new(movie));
        }
        Self {
            entries,
            positions,
            report,
        }
    }

    pub(crate) fn from_parts(
        entries: Vec<Arc<MovieSummary>>,
        report: AggregationReport,
    ) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(index, movie)| (movie.id, index))
            .collect();
        Self {
            entries,
            positions,
            report,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MovieSummary>> + '_ {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Arc<MovieSummary>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Arc<MovieSummary>> {
        self.entries.get(index)
    }

    /// Zero-based position of `id`.
    pub fn position_of(&self, id: MovieId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// One-based rank of `id` in the catalog.
    pub fn rank_of(&self, id: MovieId) -> Option<usize> {
        self.position_of(id).map(|position| position + 1)
    }

    pub fn report(&self) -> &AggregationReport {
        &self.report
    }

    /// Whether the catalog may be kept as the shared copy. A cancelled run
    /// or one where every entry was lost to failed pages is not.
    pub(crate) fn is_cacheable(&self) -> bool {
        !self.report.cancelled
            && !(self.entries.is_empty() && !self.report.failed_pages.is_empty())
    }
}
