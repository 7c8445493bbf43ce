use cinedex_model::Genre;
use serde::{Deserialize, Serialize};

/// Paginated listing envelope. Only `results` feeds aggregation; the
/// counters are kept for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage<T> {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// Query parameters every request carries.
#[derive(Debug, Clone, Serialize)]
pub struct BaseQuery<'a> {
    pub api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopRatedQuery<'a> {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscoverMovieQuery<'a> {
    pub with_genres: u32,
    pub sort_by: &'a str,
    pub include_adult: bool,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
}
