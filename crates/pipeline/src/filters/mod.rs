//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre_tag;
pub mod origin;

// Re-export for convenience
pub use genre_tag::GenreTagFilter;
pub use origin::OriginMatchFilter;
