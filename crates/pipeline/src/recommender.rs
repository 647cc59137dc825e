//! # Recommender
//!
//! The two lookups the browser offers, built from sources and filters:
//!
//! - **recommend**: top similar titles for a chosen movie
//!   1. Resolve the title to its row
//!   2. Take the 5 best-ranked neighbours (the movie itself excluded)
//!   3. Drop those failing the origin filter; no backfill
//!
//! - **browse_by_genre**: movies whose tags mention a genre
//!   1. Scan the table in storage order
//!   2. Keep rows matching the genre token and the origin filter
//!   3. Cap at 10
//!
//! Both are pure functions over the loaded catalog.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument};

use data_loader::{Catalog, MovieRecord, OriginFilter};
use sources::{Candidate, CatalogScanSource, QueryContext, SimilaritySource};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreTagFilter, OriginMatchFilter};

/// Most titles returned by `recommend`
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Most titles returned by `browse_by_genre`
pub const GENRE_BROWSE_LIMIT: usize = 10;

/// Genres offered by the front-ends
pub const GENRES: [&str; 8] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Romance",
    "Thriller",
    "Crime",
    "Family",
];

/// Origin choices offered by the front-ends
pub const ORIGIN_CHOICES: [&str; 3] = ["All", "Hollywood", "Bollywood"];

#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: SimilaritySource,
    scan: CatalogScanSource,
    recommend_filters: Arc<FilterPipeline>,
    browse_filters: Arc<FilterPipeline>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let similarity = SimilaritySource::new(catalog.clone());
        let scan = CatalogScanSource::new(catalog.clone());
        let recommend_filters = Arc::new(
            FilterPipeline::new().add_filter(OriginMatchFilter::new(catalog.clone())),
        );
        let browse_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(GenreTagFilter::new(catalog.clone()))
                .add_filter(OriginMatchFilter::new(catalog.clone())),
        );
        Self {
            catalog,
            similarity,
            scan,
            recommend_filters,
            browse_filters,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Movies most similar to `title`, best first.
    ///
    /// An unknown title yields an empty list, not an error. The origin
    /// filter is applied to the top 5 neighbours only, so a narrow filter
    /// can return fewer than 5 titles or none.
    #[instrument(skip(self, origin), fields(origin = %origin))]
    pub fn recommend(&self, title: &str, origin: &OriginFilter) -> Result<Vec<&MovieRecord>> {
        let Some(row) = self.catalog.row_of(title) else {
            debug!("Title not in catalog");
            return Ok(Vec::new());
        };

        let context = QueryContext::for_movie(row, origin.clone());
        let candidates = self.similarity.get_candidates(&context, RECOMMENDATION_LIMIT);
        let filtered = self.recommend_filters.apply(candidates, &context)?;

        debug!("Recommending {} titles", filtered.len());
        Ok(self.resolve(&filtered))
    }

    /// Up to 10 movies tagged with `genre`, in storage order.
    #[instrument(skip(self, origin), fields(origin = %origin))]
    pub fn browse_by_genre(&self, genre: &str, origin: &OriginFilter) -> Result<Vec<&MovieRecord>> {
        let context = QueryContext::for_genre(genre, origin.clone());
        let candidates = self.scan.get_candidates(&context);

        let mut filtered = self.browse_filters.apply(candidates, &context)?;
        filtered.truncate(GENRE_BROWSE_LIMIT);

        debug!("Found {} titles for genre", filtered.len());
        Ok(self.resolve(&filtered))
    }

    /// Titles containing `query` (case-insensitive), exact matches first.
    ///
    /// Within each group results keep storage order.
    pub fn search_titles(&self, query: &str, limit: usize) -> Vec<&MovieRecord> {
        let needle = query.trim().to_lowercase();
        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for movie in self.catalog.movies() {
            let title = movie.title.to_lowercase();
            if title == needle {
                exact.push(movie);
            } else if title.contains(&needle) {
                partial.push(movie);
            }
        }

        exact.extend(partial);
        exact.truncate(limit);
        exact
    }

    fn resolve(&self, candidates: &[Candidate]) -> Vec<&MovieRecord> {
        candidates
            .iter()
            .filter_map(|candidate| self.catalog.get_movie(candidate.row))
            .collect()
    }
}
