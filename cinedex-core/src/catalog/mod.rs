pub mod aggregator;
pub mod cache;
pub mod ranked;

pub use aggregator::{AggregationPolicy, Aggregator};
pub use cache::CatalogCache;
pub use ranked::{AggregationReport, RankedCatalog};
