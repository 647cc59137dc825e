//! The seam between candidate sources and the final result list.

use anyhow::Result;
use sources::{Candidate, QueryContext};

/// A step that narrows a candidate list for one query.
///
/// Filters only drop candidates: never reorder, never add. Anything
/// composed from them therefore returns a subsequence of its input.
pub trait Filter: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &QueryContext,
    ) -> Result<Vec<Candidate>>;
}
