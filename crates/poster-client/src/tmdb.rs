//! TMDB lookups.
//!
//! API flow: `GET {api_url}/3/movie/{movie_id}?api_key=...` returns the
//! movie details object; only its `poster_path` field is used.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use serde::Deserialize;
use tracing::debug;

use data_loader::MovieId;

use crate::error::PosterError;

/// Default TMDB API host
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org";

/// Source of poster paths for movies without an embedded poster
#[async_trait]
pub trait PosterLookup: Send + Sync {
    /// Poster path (e.g. `/kyeqWdyU.jpg`) for a movie
    async fn poster_path(&self, movie_id: MovieId) -> Result<String, PosterError>;
}

#[derive(Deserialize)]
struct MovieDetails {
    poster_path: Option<String>,
}

/// HTTP client for the TMDB movie details endpoint
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbClient {
    /// Builds a client.
    ///
    /// `timeout` of `None` keeps the HTTP client default (no timeout).
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, PosterError> {
        let api_url = api_url.into();
        Url::parse(&api_url).map_err(|e| PosterError::InvalidUrl {
            url: api_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            api_key: api_key.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PosterLookup for TmdbClient {
    async fn poster_path(&self, movie_id: MovieId) -> Result<String, PosterError> {
        let url = format!("{}/3/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PosterError::Status(response.status()));
        }

        let details: MovieDetails = response.json().await?;
        let path = details
            .poster_path
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(PosterError::MissingPosterPath)?;

        debug!(movie_id, poster_path = %path, "TMDB poster lookup succeeded");
        Ok(path)
    }
}

/// Lookup used when no API key is configured; every call fails fast.
pub struct DisabledLookup;

#[async_trait]
impl PosterLookup for DisabledLookup {
    async fn poster_path(&self, _movie_id: MovieId) -> Result<String, PosterError> {
        Err(PosterError::MissingApiKey)
    }
}
