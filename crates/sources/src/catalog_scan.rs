//! Catalog Scan Source - every movie, in storage order
//!
//! Genre browsing is not similarity-ranked: it walks the table from the
//! top and lets the filter pipeline decide what to keep.

use crate::types::{Candidate, CandidateSource, QueryContext};
use data_loader::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CatalogScanSource {
    catalog: Arc<Catalog>,
}

impl CatalogScanSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// One candidate per movie, rows ascending
    #[instrument(skip(self, context), fields(genre = ?context.genre_token))]
    pub fn get_candidates(&self, context: &QueryContext) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = (0..self.catalog.len())
            .map(|row| Candidate::new(row, CandidateSource::CatalogScan, 0.0))
            .collect();

        debug!("Generated {} catalog scan candidates", candidates.len());
        candidates
    }
}
