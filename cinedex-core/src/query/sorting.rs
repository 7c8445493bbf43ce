use std::borrow::Borrow;
use std::cmp::Ordering;

use cinedex_model::{MovieSummary, SortField, SortOrder};
use ordered_float::OrderedFloat;

/// Ascending comparison of two summaries on `field`.
///
/// Titles compare case-insensitively, dates chronologically with absent
/// dates first, ratings and popularity numerically.
pub fn compare_movies(
    a: &MovieSummary,
    b: &MovieSummary,
    field: SortField,
) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Rating => OrderedFloat(a.vote_average)
            .cmp(&OrderedFloat(b.vote_average)),
        SortField::ReleaseDate => a.release_date.cmp(&b.release_date),
        SortField::Popularity => {
            OrderedFloat(a.popularity).cmp(&OrderedFloat(b.popularity))
        }
    }
}

/// Stable in-place sort; equal keys keep their input order in both
/// directions.
pub fn sort_movies<T>(items: &mut [T], field: SortField, order: SortOrder)
where
    T: Borrow<MovieSummary>,
{
    items.sort_by(|a, b| {
        let ord = compare_movies(a.borrow(), b.borrow(), field);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}
