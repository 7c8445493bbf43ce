//! Core data model definitions shared across Cinedex crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod genre;
pub mod ids;
pub mod image;
pub mod movie;
pub mod prelude;
#[cfg(feature = "serde")]
pub mod release_date;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use genre::{Genre, GenreSet};
pub use ids::{GenreId, MovieId};
pub use image::ImageSize;
pub use movie::{MovieDetail, MovieSummary};
pub use sort::{SortField, SortOrder};
