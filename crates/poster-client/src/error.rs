use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while looking up a poster.
///
/// None of these reach the user: the resolver logs them and falls back to
/// a placeholder image.
#[derive(Error, Debug)]
pub enum PosterError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned status {0}")]
    Status(StatusCode),

    #[error("TMDB response has no poster path")]
    MissingPosterPath,

    #[error("No TMDB API key configured")]
    MissingApiKey,

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
