pub mod detail;
pub mod gallery;
pub mod navigation;
pub mod search;
pub mod selection;

pub use detail::DetailController;
pub use gallery::GalleryController;
pub use navigation::{DetailTarget, NavigationContext};
pub use search::SearchController;
pub use selection::{RankedMovie, ViewSelection};
