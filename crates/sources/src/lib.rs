//! # Sources Crate
//!
//! This crate implements candidate generation for the two ways of browsing
//! the catalog.
//!
//! ## Components
//!
//! ### Similarity Source
//! Ranked neighbours of a chosen movie, read straight from the
//! precomputed similarity matrix:
//! - "Because you picked X, you may like..."
//! - Highest score first, ties in storage order, never the movie itself
//!
//! ### Catalog Scan Source
//! Every movie in storage order, used for genre browsing where the
//! filters do all the selecting.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{QueryContext, SimilaritySource};
//! use data_loader::{Catalog, OriginFilter};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_dir(Path::new("data"))?);
//! let row = catalog.row_of("Avatar").unwrap();
//!
//! let source = SimilaritySource::new(catalog.clone());
//! let candidates = source.get_candidates(&QueryContext::for_movie(row, OriginFilter::All), 5);
//! ```

// Public modules
pub mod types;
pub mod similarity;
pub mod catalog_scan;

// Re-export commonly used types
pub use types::{genre_token, Candidate, CandidateSource, QueryContext};
pub use similarity::{rank_neighbors, SimilaritySource};
pub use catalog_scan::CatalogScanSource;
