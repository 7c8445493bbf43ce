pub mod images;
pub mod lenient;
pub mod listing;
pub mod source;
pub mod tmdb;

pub use images::{ImageResolver, PLACEHOLDER_IMAGE, resolve_image_url};
pub use lenient::{fetch_by_genre, fetch_detail, fetch_genres, fetch_top_rated};
pub use source::{CatalogSource, ProviderError};
pub use tmdb::TmdbCatalogClient;
