use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use data_loader::{MOVIES_FILE, SIMILARITY_FILE};
use poster_client::{
    DisabledLookup, PosterLookup, PosterResolver, PosterSettings, TmdbClient, DEFAULT_API_URL,
    DEFAULT_IMAGE_BASE, DEFAULT_PLACEHOLDER_BASE,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key; without one every non-embedded poster is a placeholder
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL that TMDB poster paths are appended to
    #[serde(default = "default_tmdb_image_base")]
    pub tmdb_image_base: String,

    /// Placeholder image service
    #[serde(default = "default_placeholder_base")]
    pub placeholder_base: String,

    /// Request timeout for TMDB calls; unset keeps the client default
    #[serde(default)]
    pub tmdb_timeout_secs: Option<u64>,

    /// Directory holding the two snapshots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Override for the movie list path
    #[serde(default)]
    pub movies_file: Option<PathBuf>,

    /// Override for the similarity matrix path
    #[serde(default)]
    pub similarity_file: Option<PathBuf>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_tmdb_image_base() -> String {
    DEFAULT_IMAGE_BASE.to_string()
}

fn default_placeholder_base() -> String {
    DEFAULT_PLACEHOLDER_BASE.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn movies_path(&self) -> PathBuf {
        self.movies_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(MOVIES_FILE))
    }

    pub fn similarity_path(&self) -> PathBuf {
        self.similarity_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(SIMILARITY_FILE))
    }

    /// API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Builds the poster resolver described by this config.
    ///
    /// `offline` forces placeholder posters for non-embedded records.
    pub fn poster_resolver(&self, offline: bool) -> anyhow::Result<PosterResolver> {
        let settings = PosterSettings::new(&self.tmdb_image_base, &self.placeholder_base)?;

        let lookup: Arc<dyn PosterLookup> = match (offline, self.api_key()) {
            (false, Some(key)) => Arc::new(TmdbClient::new(
                key,
                self.tmdb_api_url.as_str(),
                self.tmdb_timeout_secs.map(Duration::from_secs),
            )?),
            (false, None) => {
                warn!("TMDB_API_KEY is not set; posters will fall back to placeholders");
                Arc::new(DisabledLookup)
            }
            (true, _) => Arc::new(DisabledLookup),
        };

        Ok(PosterResolver::new(lookup, settings))
    }
}
