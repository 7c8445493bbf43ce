use chrono::NaiveDate;

use crate::genre::Genre;
use crate::ids::{GenreId, MovieId};

/// One entry of an upstream listing page.
///
/// Summaries are immutable once fetched and are kept exactly as the
/// listing reported them; ranking is positional and lives outside the
/// record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_path: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::release_date::deserialize_optional_date"
        )
    )]
    pub release_date: Option<NaiveDate>,
    /// Average rating on a 0-10 scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre_ids: Vec<GenreId>,
}

impl MovieSummary {
    /// Minimal constructor; every optional field starts empty.
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            genre_ids: Vec::new(),
        }
    }

    pub fn with_rating(mut self, vote_average: f32) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_genres<I>(mut self, genres: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GenreId>,
    {
        self.genre_ids = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genre_ids.contains(&genre)
    }
}

/// Full detail record for a single movie.
///
/// Fetched lazily per id; it carries resolved genre names instead of the
/// bare ids a listing entry has.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tagline: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_path: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::release_date::deserialize_optional_date"
        )
    )]
    pub release_date: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: f64,
    /// Runtime in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub runtime: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub revenue: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub homepage: Option<String>,
}

impl MovieDetail {
    pub fn genre_ids(&self) -> Vec<GenreId> {
        self.genres.iter().map(|genre| genre.id).collect()
    }

    /// Comma separated genre names, in upstream order.
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Project the detail record down to the listing shape.
    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            release_date: self.release_date,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            genre_ids: self.genre_ids(),
        }
    }
}
