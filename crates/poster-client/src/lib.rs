//! Poster client for the movie browser.
//!
//! This crate turns a movie record into a poster image URL. It handles:
//! - Using posters embedded in the snapshot where the origin ships them
//! - Looking up poster paths on TMDB over HTTP
//! - Memoising lookups per movie id
//! - Falling back to a placeholder image on any failure
//!
//! ## Example Usage
//! ```ignore
//! use poster_client::{PosterResolver, PosterSettings, TmdbClient};
//!
//! let tmdb = TmdbClient::new(api_key, poster_client::DEFAULT_API_URL, None)?;
//! let settings = PosterSettings::new(DEFAULT_IMAGE_BASE, DEFAULT_PLACEHOLDER_BASE)?;
//! let resolver = PosterResolver::new(Arc::new(tmdb), settings);
//!
//! let url = resolver.resolve(&movie).await;
//! ```

pub mod error;
pub mod resolver;
pub mod tmdb;

pub use error::PosterError;
pub use resolver::{PosterResolver, PosterSettings, DEFAULT_IMAGE_BASE, DEFAULT_PLACEHOLDER_BASE};
pub use tmdb::{DisabledLookup, PosterLookup, TmdbClient, DEFAULT_API_URL};
