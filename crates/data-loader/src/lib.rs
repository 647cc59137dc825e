//! # Data Loader Crate
//!
//! This crate loads the two precomputed snapshots the browser runs on:
//! the movie metadata table and the item-similarity matrix.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Origin, SimilarityMatrix, Catalog)
//! - **parser**: Parse the JSON movie list and the text matrix
//! - **index**: Build the title lookup and validate the snapshots
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! let row = catalog.row_of("Avatar").unwrap();
//! let scores = catalog.similarity_row(row).unwrap();
//! println!("{} has {} neighbours", catalog.get_movie(row).unwrap().title, scores.len() - 1);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{MOVIES_FILE, SIMILARITY_FILE};
pub use types::{
    // Type aliases
    MovieId,
    RowIndex,
    // Core types
    Catalog,
    MovieRecord,
    Overview,
    SimilarityMatrix,
    // Enums
    Origin,
    OriginFilter,
};
