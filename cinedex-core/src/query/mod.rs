pub mod filtering;
pub mod sorting;

pub use filtering::{filter_by_genres, filter_by_title, normalize_query, title_matches};
pub use sorting::{compare_movies, sort_movies};
