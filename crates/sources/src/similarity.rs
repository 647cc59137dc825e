//! Similarity Source - ranked neighbours from the precomputed matrix
//!
//! ## Algorithm
//! 1. Take the query movie's row of the similarity matrix
//! 2. Pair every score with its column index
//! 3. Drop the query movie itself
//! 4. Stable sort by score, highest first (ties keep index order)
//! 5. Return the first `limit` neighbours

use crate::types::{Candidate, CandidateSource, QueryContext};
use data_loader::{Catalog, RowIndex};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Produces the nearest neighbours of a movie
#[derive(Clone)]
pub struct SimilaritySource {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl SimilaritySource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Ranked neighbours of `context.query_row`.
    ///
    /// Empty when the context has no query movie or the row is unknown.
    #[instrument(skip(self, context), fields(query_row = ?context.query_row))]
    pub fn get_candidates(&self, context: &QueryContext, limit: usize) -> Vec<Candidate> {
        let Some(query_row) = context.query_row else {
            return Vec::new();
        };
        let Some(scores) = self.catalog.similarity_row(query_row) else {
            debug!("No similarity row for {}", query_row);
            return Vec::new();
        };

        let candidates: Vec<Candidate> = rank_neighbors(scores, query_row, limit)
            .into_iter()
            .map(|(row, score)| Candidate::new(row, CandidateSource::Similarity, score))
            .collect();

        debug!("Generated {} similarity candidates", candidates.len());
        candidates
    }
}

/// Top `limit` (index, score) pairs of one matrix row, excluding `exclude`.
///
/// `sort_by` is stable, so equal scores stay in ascending index order.
pub fn rank_neighbors(scores: &[f32], exclude: RowIndex, limit: usize) -> Vec<(RowIndex, f32)> {
    let mut ranked: Vec<(RowIndex, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row, _)| row != exclude)
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{MovieRecord, Origin, OriginFilter, SimilarityMatrix};

    fn create_test_catalog() -> Arc<Catalog> {
        let movies = vec![
            MovieRecord::new(10, "A", Origin::Hollywood),
            MovieRecord::new(11, "B", Origin::Bollywood),
            MovieRecord::new(12, "C", Origin::Hollywood),
            MovieRecord::new(13, "D", Origin::Bollywood),
        ];
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.2, 0.5],
            vec![0.9, 1.0, 0.1, 0.3],
            vec![0.2, 0.1, 1.0, 0.7],
            vec![0.5, 0.3, 0.7, 1.0],
        ])
        .unwrap();
        Arc::new(Catalog::from_parts(movies, matrix).unwrap())
    }

    #[test]
    fn test_rank_neighbors_orders_by_score() {
        let ranked = rank_neighbors(&[1.0, 0.9, 0.2, 0.5], 0, 5);
        let rows: Vec<RowIndex> = ranked.iter().map(|&(row, _)| row).collect();
        assert_eq!(rows, vec![1, 3, 2]);
    }

    #[test]
    fn test_rank_neighbors_ties_keep_index_order() {
        let ranked = rank_neighbors(&[0.4, 1.0, 0.4, 0.4], 1, 5);
        let rows: Vec<RowIndex> = ranked.iter().map(|&(row, _)| row).collect();
        assert_eq!(rows, vec![0, 2, 3]);
    }

    #[test]
    fn test_rank_neighbors_excludes_query_even_when_tied() {
        // Row 0 ties the diagonal; the query row must still be the one removed
        let ranked = rank_neighbors(&[1.0, 1.0, 0.3], 1, 5);
        let rows: Vec<RowIndex> = ranked.iter().map(|&(row, _)| row).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn test_rank_neighbors_respects_limit() {
        let scores: Vec<f32> = (0..20).map(|i| i as f32 / 20.0).collect();
        let ranked = rank_neighbors(&scores, 19, 5);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].0, 18);
        assert_eq!(ranked[4].0, 14);
    }

    #[test]
    fn test_get_candidates() {
        let source = SimilaritySource::new(create_test_catalog());
        let context = QueryContext::for_movie(2, OriginFilter::All);

        let candidates = source.get_candidates(&context, 5);
        let rows: Vec<RowIndex> = candidates.iter().map(|c| c.row).collect();

        assert_eq!(rows, vec![3, 0, 1]);
        assert!(candidates.iter().all(|c| c.source == CandidateSource::Similarity));
        assert_eq!(candidates[0].score, 0.7);
    }

    #[test]
    fn test_get_candidates_without_query_row() {
        let source = SimilaritySource::new(create_test_catalog());

        assert!(source.get_candidates(&QueryContext::default(), 5).is_empty());
        assert!(source
            .get_candidates(&QueryContext::for_movie(99, OriginFilter::All), 5)
            .is_empty());
    }
}
