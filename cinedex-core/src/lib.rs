//! # Cinedex Core
//!
//! Catalog aggregation and view-state logic for a top-rated movie
//! directory backed by the TMDB v3 API.
//!
//! ## Overview
//!
//! - **Catalog client** ([`providers`]): a [`CatalogSource`] trait with a
//!   `reqwest` implementation, lenient "degrade to empty" helpers and
//!   image URL resolution.
//! - **Aggregation** ([`catalog`]): sequential, cancellable paging of the
//!   top-rated listing into a [`RankedCatalog`] of at most 250 entries,
//!   and a process-wide [`CatalogCache`] that builds it once.
//! - **Query helpers** ([`query`]): title filtering, stable field sorting
//!   and conjunctive genre filtering over catalog slices.
//! - **View-state controllers** ([`views`]): search, gallery and detail
//!   surfaces deriving their visible list from the shared catalog.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cinedex_config::ConfigLoader;
//! use cinedex_core::{
//!     Aggregator, CatalogCache, CatalogSource, SearchController, TmdbCatalogClient,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! async fn top_dark_titles() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?.config;
//!     let source: Arc<dyn CatalogSource> =
//!         Arc::new(TmdbCatalogClient::new(&config.tmdb)?);
//!     let cache = Arc::new(CatalogCache::new(Aggregator::new(
//!         source,
//!         config.catalog.into(),
//!     )));
//!
//!     let mut search = SearchController::new(cache);
//!     search.activate(&CancellationToken::new()).await;
//!     search.set_query("dark");
//!     for row in search.derive_view().iter() {
//!         println!("#{} {}", row.rank, row.movie.title);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Ranked catalog aggregation and the shared catalog cache
pub mod catalog;

/// Error types for fallible construction
pub mod error;

/// Upstream catalog access (TMDB integration)
pub mod providers;

/// Filtering and sorting over catalog slices
pub mod query;

/// View-state controllers for the search, gallery and detail surfaces
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{
    AggregationPolicy, AggregationReport, Aggregator, CatalogCache,
    RankedCatalog,
};
pub use error::{CatalogError, Result};
pub use providers::{
    CatalogSource, ImageResolver, PLACEHOLDER_IMAGE, ProviderError,
    TmdbCatalogClient, resolve_image_url,
};
pub use views::{
    DetailController, DetailTarget, GalleryController, NavigationContext,
    RankedMovie, SearchController, ViewSelection,
};

pub use cinedex_model as model;
