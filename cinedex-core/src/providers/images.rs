use cinedex_config::TmdbConfig;
use cinedex_config::constants::DEFAULT_IMAGE_BASE;
use cinedex_model::ImageSize;

/// Reference returned whenever an entry has no image path.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Builds CDN URLs against a fixed image base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImageResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &TmdbConfig) -> Self {
        Self::new(config.image_base.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/{size}{path}`, or [`PLACEHOLDER_IMAGE`] for an absent or
    /// blank path.
    pub fn resolve(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            None => PLACEHOLDER_IMAGE.to_string(),
            Some(path) if path.starts_with('/') => {
                format!("{}/{}{}", self.base, size, path)
            }
            Some(path) => format!("{}/{}/{}", self.base, size, path),
        }
    }

    pub fn poster(&self, path: Option<&str>) -> String {
        self.resolve(path, ImageSize::poster())
    }

    pub fn thumbnail(&self, path: Option<&str>) -> String {
        self.resolve(path, ImageSize::thumbnail())
    }
}

/// [`ImageResolver::resolve`] against the public TMDB image CDN.
pub fn resolve_image_url(path: Option<&str>, size: ImageSize) -> String {
    ImageResolver::default().resolve(path, size)
}
