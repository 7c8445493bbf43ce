use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Width buckets the upstream image CDN serves.
///
/// The CDN path segment is the lowercase `w<width>` name, or `original`
/// for the unscaled upload.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageSize {
    /// 92px width - tiny thumbnail
    W92,
    /// 154px width
    W154,
    /// 185px width
    W185,
    /// 200px width - list row poster
    W200,
    /// 300px width
    W300,
    /// 342px width
    W342,
    /// 500px width - gallery and detail poster (default)
    #[default]
    W500,
    /// 780px width
    W780,
    /// 1280px width - backdrop
    W1280,
    /// Original resolution
    Original,
}

impl ImageSize {
    /// All sized variants for UI enumeration (excluding Original)
    pub const ALL: [ImageSize; 9] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W200,
        Self::W300,
        Self::W342,
        Self::W500,
        Self::W780,
        Self::W1280,
    ];

    /// Default size for list rows.
    pub const fn thumbnail() -> Self {
        Self::W200
    }

    /// Default size for gallery tiles and the detail view.
    pub const fn poster() -> Self {
        Self::W500
    }

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W92 => Some(92),
            Self::W154 => Some(154),
            Self::W185 => Some(185),
            Self::W200 => Some(200),
            Self::W300 => Some(300),
            Self::W342 => Some(342),
            Self::W500 => Some(500),
            Self::W780 => Some(780),
            Self::W1280 => Some(1280),
            Self::Original => None,
        }
    }

    /// Path segment used by the image CDN
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W200 => "w200",
            Self::W300 => "w300",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w92" => Ok(Self::W92),
            "w154" => Ok(Self::W154),
            "w185" => Ok(Self::W185),
            "w200" => Ok(Self::W200),
            "w300" => Ok(Self::W300),
            "w342" => Ok(Self::W342),
            "w500" => Ok(Self::W500),
            "w780" => Ok(Self::W780),
            "w1280" => Ok(Self::W1280),
            "original" => Ok(Self::Original),
            other => Err(ModelError::UnknownImageSize(other.to_string())),
        }
    }
}
