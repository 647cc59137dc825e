//! Filter to keep only movies of the requested origin.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates whose origin passes `context.origin`.
///
/// With the wildcard filter every candidate passes untouched. Candidates
/// whose row is not in the catalog are dropped.
pub struct OriginMatchFilter {
    catalog: Arc<Catalog>,
}

impl OriginMatchFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for OriginMatchFilter {
    fn name(&self) -> &str {
        "OriginMatchFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        if context.origin.is_wildcard() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_movie(candidate.row)
                    .is_some_and(|movie| context.origin.accepts(&movie.origin))
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{MovieRecord, Origin, OriginFilter, SimilarityMatrix};
    use sources::CandidateSource;

    fn create_test_catalog() -> Arc<Catalog> {
        let movies = vec![
            MovieRecord::new(1, "Hollywood One", Origin::Hollywood),
            MovieRecord::new(2, "Bollywood One", Origin::Bollywood),
            MovieRecord::new(3, "Hollywood Two", Origin::from("HOLLYWOOD")),
            MovieRecord::new(4, "Elsewhere", Origin::from("Tollywood")),
        ];
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.0; 4]; 4]).unwrap();
        Arc::new(Catalog::from_parts(movies, matrix).unwrap())
    }

    fn all_rows() -> Vec<Candidate> {
        (0..4)
            .map(|row| Candidate::new(row, CandidateSource::Similarity, 1.0 - row as f32 / 10.0))
            .collect()
    }

    #[test]
    fn test_wildcard_keeps_everything() {
        let filter = OriginMatchFilter::new(create_test_catalog());
        let context = QueryContext::for_movie(0, OriginFilter::All);

        let filtered = filter.apply(all_rows(), &context).unwrap();
        assert_eq!(filtered, all_rows());
    }

    #[test]
    fn test_case_insensitive_match_preserves_order() {
        let filter = OriginMatchFilter::new(create_test_catalog());
        let context = QueryContext::for_movie(0, OriginFilter::from("hollywood"));

        let filtered = filter.apply(all_rows(), &context).unwrap();
        let rows: Vec<usize> = filtered.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn test_other_origins_match_by_name() {
        let filter = OriginMatchFilter::new(create_test_catalog());
        let context = QueryContext::for_movie(0, OriginFilter::from("TOLLYWOOD"));

        let filtered = filter.apply(all_rows(), &context).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].row, 3);
    }

    #[test]
    fn test_unknown_row_is_dropped() {
        let filter = OriginMatchFilter::new(create_test_catalog());
        let context = QueryContext::for_movie(0, OriginFilter::from("Bollywood"));

        let candidates = vec![Candidate::new(99, CandidateSource::Similarity, 0.5)];
        assert!(filter.apply(candidates, &context).unwrap().is_empty());
    }
}
