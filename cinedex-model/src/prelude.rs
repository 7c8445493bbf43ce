//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module when working in view controllers or
//! other presentation layers.

pub use super::genre::{Genre, GenreSet};
pub use super::ids::{GenreId, MovieId};
pub use super::image::ImageSize;
pub use super::movie::{MovieDetail, MovieSummary};
pub use super::sort::{SortField, SortOrder};
