//! # Browse Orchestrator
//!
//! Glues the synchronous recommender to the async poster resolver:
//! 1. Run the lookup (`recommend` or `browse_by_genre`)
//! 2. Resolve a poster for each result, one after another in rank order
//! 3. Render each record as a `MovieCard`
//!
//! Both front-ends (web and CLI) go through this type.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use data_loader::{Catalog, MovieRecord, OriginFilter};
use pipeline::Recommender;
use poster_client::PosterResolver;

use crate::card::MovieCard;

#[derive(Clone)]
pub struct MovieBrowser {
    recommender: Recommender,
    posters: PosterResolver,
}

impl MovieBrowser {
    pub fn new(catalog: Arc<Catalog>, posters: PosterResolver) -> Self {
        Self {
            recommender: Recommender::new(catalog),
            posters,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.recommender.catalog()
    }

    /// Cards for the movies most similar to `title`
    #[instrument(skip(self, origin), fields(origin = %origin))]
    pub async fn recommend(&self, title: &str, origin: &OriginFilter) -> Result<Vec<MovieCard>> {
        let start_time = Instant::now();

        let movies = self
            .recommender
            .recommend(title, origin)
            .with_context(|| format!("Failed to recommend titles similar to '{}'", title))?;
        let cards = self.render(&movies).await;

        info!(
            "Recommended {} titles in {:?}",
            cards.len(),
            start_time.elapsed()
        );
        Ok(cards)
    }

    /// Cards for up to 10 movies tagged with `genre`
    #[instrument(skip(self, origin), fields(origin = %origin))]
    pub async fn browse(&self, genre: &str, origin: &OriginFilter) -> Result<Vec<MovieCard>> {
        let start_time = Instant::now();

        let movies = self
            .recommender
            .browse_by_genre(genre, origin)
            .with_context(|| format!("Failed to browse genre '{}'", genre))?;
        let cards = self.render(&movies).await;

        info!(
            "Found {} {} titles in {:?}",
            cards.len(),
            genre,
            start_time.elapsed()
        );
        Ok(cards)
    }

    /// Titles matching `query`, for pickers. No posters are resolved.
    pub fn search_titles(&self, query: &str, limit: usize) -> Vec<String> {
        self.recommender
            .search_titles(query, limit)
            .into_iter()
            .map(|movie| movie.title.clone())
            .collect()
    }

    /// Every title in storage order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.catalog().movies().iter().map(|movie| movie.title.as_str())
    }

    async fn render(&self, movies: &[&MovieRecord]) -> Vec<MovieCard> {
        let mut cards = Vec::with_capacity(movies.len());
        for movie in movies {
            let poster_url = self.posters.resolve(movie).await;
            cards.push(MovieCard::from_record(movie, poster_url));
        }
        cards
    }
}
