use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Fields a catalog view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortField {
    #[default]
    Title,
    Rating,
    ReleaseDate,
    Popularity,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        Self::Title,
        Self::Rating,
        Self::ReleaseDate,
        Self::Popularity,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::ReleaseDate => "release_date",
            Self::Popularity => "popularity",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Rating => "Rating",
            Self::ReleaseDate => "Release Date",
            Self::Popularity => "Popularity",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "rating" | "vote_average" => Ok(Self::Rating),
            "release_date" => Ok(Self::ReleaseDate),
            "popularity" => Ok(Self::Popularity),
            other => Err(ModelError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            other => Err(ModelError::UnknownSortOrder(other.to_string())),
        }
    }
}
