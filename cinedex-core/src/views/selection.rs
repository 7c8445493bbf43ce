use std::borrow::Borrow;
use std::sync::Arc;

use cinedex_model::{MovieId, MovieSummary};

use super::navigation::NavigationContext;
use crate::catalog::RankedCatalog;

/// A catalog entry paired with its 1-based rank in the unfiltered
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    pub movie: Arc<MovieSummary>,
    pub rank: usize,
}

impl RankedMovie {
    /// Every catalog entry, in catalog order.
    pub(crate) fn rank_all(catalog: &RankedCatalog) -> Vec<RankedMovie> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, movie)| RankedMovie {
                movie: Arc::clone(movie),
                rank: index + 1,
            })
            .collect()
    }
}

impl Borrow<MovieSummary> for RankedMovie {
    fn borrow(&self) -> &MovieSummary {
        &self.movie
    }
}

/// The filtered (and possibly sorted) projection a controller shows.
/// Never mutates the catalog it was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSelection {
    rows: Vec<RankedMovie>,
}

impl ViewSelection {
    pub(crate) fn new(rows: Vec<RankedMovie>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedMovie> + '_ {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[RankedMovie] {
        &self.rows
    }

    pub fn ids(&self) -> Vec<MovieId> {
        self.rows.iter().map(|row| row.movie.id).collect()
    }

    pub fn position_of(&self, id: MovieId) -> Option<usize> {
        self.rows.iter().position(|row| row.movie.id == id)
    }

    /// The visible list, in visible order, for carrying into a detail
    /// view.
    pub fn to_context(&self) -> NavigationContext {
        NavigationContext::new(self.rows.iter().map(|row| Arc::clone(&row.movie)))
    }
}
