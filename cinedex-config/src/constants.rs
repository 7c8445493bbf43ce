//! Built-in defaults.

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Size of the ranked catalog ("top 250").
pub const DEFAULT_CATALOG_TARGET: usize = 250;
/// Hard stop on listing pages; 13 pages of 20 entries cover 250.
pub const DEFAULT_PAGE_CEILING: u32 = 13;
/// Entries per upstream listing page.
pub const UPSTREAM_PAGE_SIZE: usize = 20;
