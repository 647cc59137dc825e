//! Ordered chain of candidate filters.
//!
//! Each query builds its chain once; `apply` then threads the candidate
//! list through every filter in insertion order.

use crate::traits::Filter;
use anyhow::{Context, Result};
use sources::{Candidate, QueryContext};
use tracing::debug;

/// Filters applied one after another.
///
/// ```ignore
/// let browse = FilterPipeline::new()
///     .add_filter(GenreTagFilter::new(catalog.clone()))
///     .add_filter(OriginMatchFilter::new(catalog.clone()));
///
/// let kept = browse.apply(candidates, &context)?;
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter; it runs after every filter already added
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every filter in order. Stops at the first filter error.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>> {
        self.filters
            .iter()
            .try_fold(candidates, |current, filter| -> Result<Vec<Candidate>> {
                let before = current.len();
                let kept = filter
                    .apply(current, context)
                    .with_context(|| format!("Filter {} failed", filter.name()))?;
                debug!(
                    filter = filter.name(),
                    before,
                    after = kept.len(),
                    "Filter applied"
                );
                Ok(kept)
            })
    }
}
