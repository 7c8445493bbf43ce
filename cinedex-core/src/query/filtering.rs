use std::borrow::Borrow;

use cinedex_model::{GenreSet, MovieSummary};

/// Lowercased needle, or `None` when the query is blank and filters
/// nothing. Surrounding whitespace is part of the needle.
pub fn normalize_query(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_lowercase())
}

/// Case-insensitive substring test. `needle` must already be normalized.
pub fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// Entries whose title contains `query`, in input order.
pub fn filter_by_title<'a, T>(items: &'a [T], query: &str) -> Vec<&'a T>
where
    T: Borrow<MovieSummary>,
{
    match normalize_query(query) {
        None => items.iter().collect(),
        Some(needle) => items
            .iter()
            .filter(|item| {
                let movie = <T as Borrow<MovieSummary>>::borrow(item);
                title_matches(&movie.title, &needle)
            })
            .collect(),
    }
}

/// Entries carrying every selected genre, in input order.
pub fn filter_by_genres<'a, T>(
    items: &'a [T],
    selected: &GenreSet,
) -> Vec<&'a T>
where
    T: Borrow<MovieSummary>,
{
    items
        .iter()
        .filter(|item| {
            selected.matches(<T as Borrow<MovieSummary>>::borrow(item))
        })
        .collect()
}
