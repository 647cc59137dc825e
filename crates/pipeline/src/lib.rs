//! Pipeline for filtering candidates and answering browser queries.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Recommender, which runs "similar to this movie" and "browse by genre"
//!
//! ## Architecture
//! Each query is processed in stages:
//! 1. A source proposes candidates (ranked neighbours, or a table scan)
//! 2. Filters remove unwanted candidates (wrong origin, wrong genre)
//! 3. Surviving rows are resolved to movie records
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::Recommender;
//! use data_loader::OriginFilter;
//!
//! let recommender = Recommender::new(catalog.clone());
//!
//! let similar = recommender.recommend("Avatar", &OriginFilter::All)?;
//! let dramas = recommender.browse_by_genre("Drama", &OriginFilter::from("Bollywood"))?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommender;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommender::{
    Recommender, GENRES, GENRE_BROWSE_LIMIT, ORIGIN_CHOICES, RECOMMENDATION_LIMIT,
};
