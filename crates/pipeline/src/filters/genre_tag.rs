//! Filter to keep only movies whose tag field mentions a genre.
//!
//! Matching is plain substring containment against the normalised tag
//! string, so "action" also matches "actionthriller".

use crate::traits::Filter;
use anyhow::Result;
use data_loader::Catalog;
use sources::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates whose tags contain `context.genre_token`.
///
/// A context without a genre token passes everything through. Records
/// with no tags never match, even an empty token.
pub struct GenreTagFilter {
    catalog: Arc<Catalog>,
}

impl GenreTagFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreTagFilter {
    fn name(&self) -> &str {
        "GenreTagFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        let Some(token) = context.genre_token.as_deref() else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_movie(candidate.row)
                    .and_then(|movie| movie.tags.as_deref())
                    .is_some_and(|tags| tags.contains(token))
            })
            .collect();
        Ok(filtered)
    }
}
