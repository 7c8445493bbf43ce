use std::sync::Arc;

use cinedex_model::{MovieId, MovieSummary};

use crate::catalog::RankedCatalog;

/// Ordered list carried from a list surface into the detail view.
///
/// Cheap to clone; previous/next navigation hands the same list forward.
#[derive(Debug, Clone, Default)]
pub struct NavigationContext {
    entries: Arc<[Arc<MovieSummary>]>,
}

impl NavigationContext {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Arc<MovieSummary>>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn from_catalog(catalog: &RankedCatalog) -> Self {
        Self::new(catalog.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<MovieSummary>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MovieSummary>> + '_ {
        self.entries.iter()
    }

    /// First index holding `id`.
    pub fn position_of(&self, id: MovieId) -> Option<usize> {
        self.entries.iter().position(|movie| movie.id == id)
    }

    pub fn ptr_eq(&self, other: &NavigationContext) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Where a list surface or the detail view navigates to next.
#[derive(Debug, Clone)]
pub struct DetailTarget {
    pub id: MovieId,
    /// `None` means the detail view falls back to the shared catalog.
    pub context: Option<NavigationContext>,
}

impl DetailTarget {
    pub fn new(id: MovieId) -> Self {
        Self { id, context: None }
    }

    pub fn with_context(id: MovieId, context: NavigationContext) -> Self {
        Self {
            id,
            context: Some(context),
        }
    }
}
