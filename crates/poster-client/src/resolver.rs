//! Poster URL resolution.
//!
//! Order of preference for a record:
//! 1. Bollywood records: the URL embedded in the snapshot
//! 2. Everyone else: a TMDB poster path, joined onto the image base
//! 3. A placeholder image carrying the title as its text
//!
//! TMDB outcomes are memoised per movie id for the process lifetime,
//! including misses, so each id costs at most one request.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Url;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use data_loader::{MovieId, MovieRecord};

use crate::error::PosterError;
use crate::tmdb::PosterLookup;

/// Default base for composed TMDB image URLs
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Default placeholder image service
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/500x750.png";

/// Fixed URL parts used to build poster links
#[derive(Debug, Clone)]
pub struct PosterSettings {
    image_base: String,
    placeholder_base: Url,
}

impl PosterSettings {
    pub fn new(image_base: &str, placeholder_base: &str) -> Result<Self, PosterError> {
        let placeholder_base = Url::parse(placeholder_base).map_err(|e| PosterError::InvalidUrl {
            url: placeholder_base.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            image_base: image_base.trim_end_matches('/').to_string(),
            placeholder_base,
        })
    }

    /// `{image_base}/{poster_path}` with exactly one slash between them
    pub fn image_url(&self, poster_path: &str) -> String {
        format!("{}/{}", self.image_base, poster_path.trim_start_matches('/'))
    }

    /// Placeholder image URL with the title form-encoded as `text`
    pub fn placeholder_url(&self, title: &str) -> String {
        let text = if title.trim().is_empty() { "Movie" } else { title };
        let mut url = self.placeholder_base.clone();
        url.query_pairs_mut().append_pair("text", text);
        url.to_string()
    }
}

/// Resolves display URLs for movie posters
#[derive(Clone)]
pub struct PosterResolver {
    lookup: Arc<dyn PosterLookup>,
    settings: PosterSettings,
    /// Movie id to composed poster URL; `None` records a failed lookup
    cache: Arc<RwLock<HashMap<MovieId, Option<String>>>>,
}

impl PosterResolver {
    pub fn new(lookup: Arc<dyn PosterLookup>, settings: PosterSettings) -> Self {
        Self {
            lookup,
            settings,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Display URL for a record's poster. Never fails and never empty.
    #[instrument(skip(self, record), fields(movie_id = record.movie_id))]
    pub async fn resolve(&self, record: &MovieRecord) -> String {
        let resolved = if record.origin.has_embedded_posters() {
            record.poster_url().map(str::to_string)
        } else {
            self.remote_poster(record.movie_id).await
        };

        resolved.unwrap_or_else(|| self.settings.placeholder_url(&record.title))
    }

    /// Cached TMDB lookup
    async fn remote_poster(&self, movie_id: MovieId) -> Option<String> {
        if let Some(cached) = self.cache.read().await.get(&movie_id) {
            debug!("Poster cache hit");
            return cached.clone();
        }

        let resolved = match self.lookup.poster_path(movie_id).await {
            Ok(path) => Some(self.settings.image_url(&path)),
            Err(e) => {
                debug!(error = %e, "Poster lookup failed, using placeholder");
                None
            }
        };

        // Two concurrent misses may both fetch; the first write wins
        self.cache
            .write()
            .await
            .entry(movie_id)
            .or_insert(resolved)
            .clone()
    }

    /// Number of movie ids with a memoised lookup outcome
    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }
}
