use std::fmt;

use crate::ids::GenreId;
use crate::movie::MovieSummary;

/// Entry of the global genre vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Set of selected genre ids.
///
/// Selection order is kept so a UI can echo the chips back in the order
/// they were picked. Matching is conjunctive: a movie passes only when it
/// carries every selected genre. The empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSet {
    selected: Vec<GenreId>,
}

impl GenreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the genre if absent, remove it if present. Returns whether the
    /// genre is selected afterwards.
    pub fn toggle(&mut self, genre: GenreId) -> bool {
        if let Some(pos) = self.selected.iter().position(|g| *g == genre) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(genre);
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, genre: GenreId) -> bool {
        self.selected.contains(&genre)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = GenreId> + '_ {
        self.selected.iter().copied()
    }

    pub fn matches(&self, movie: &MovieSummary) -> bool {
        self.selected.iter().all(|genre| movie.has_genre(*genre))
    }
}

impl FromIterator<GenreId> for GenreSet {
    fn from_iter<T: IntoIterator<Item = GenreId>>(iter: T) -> Self {
        let mut set = GenreSet::new();
        for genre in iter {
            if !set.contains(genre) {
                set.selected.push(genre);
            }
        }
        set
    }
}
