//! Server crate for the MojFlix movie browser.
//!
//! This crate contains the orchestrator that joins recommendations with
//! poster lookups, the card renderer shared by both front-ends, the
//! environment config, and the axum web front-end.

pub mod card;
pub mod config;
pub mod orchestrator;
pub mod web;

use std::path::Path;
use std::sync::Arc;

use data_loader::{Catalog, DataLoadError};

pub use card::MovieCard;
pub use config::Config;
pub use orchestrator::MovieBrowser;

/// Shown when either snapshot is missing at startup
pub const MISSING_DATA_MESSAGE: &str = "The movie list and similarity files were not found.";
pub const MISSING_DATA_HINT: &str = "Please run the data processing notebook to generate them.";

/// Loads the catalog, printing setup guidance when a snapshot is missing.
///
/// Returns `Ok(None)` in that case so callers can halt with a failure
/// status instead of a raw error.
pub fn load_catalog(
    movies_path: &Path,
    similarity_path: &Path,
) -> Result<Option<Arc<Catalog>>, DataLoadError> {
    match Catalog::load_from_files(movies_path, similarity_path) {
        Ok(catalog) => Ok(Some(Arc::new(catalog))),
        Err(e) if e.is_missing_file() => {
            tracing::error!(error = %e, "Catalog snapshot missing");
            eprintln!("{}", MISSING_DATA_MESSAGE);
            eprintln!("{}", MISSING_DATA_HINT);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_snapshots_are_not_an_error() {
        let dir = std::env::temp_dir().join("mojflix-missing-snapshots");
        let result = load_catalog(&dir.join("movie_list.json"), &dir.join("similarity.txt"));
        assert!(matches!(result, Ok(None)));
    }
}
