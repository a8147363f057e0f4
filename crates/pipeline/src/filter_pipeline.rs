//! Ordered chain of eligibility filters run before scoring.

use crate::error::Result;
use crate::filters::{AlreadyJudgedFilter, InactiveListingFilter, MissingIdentifierFilter};
use crate::traits::{Exclusions, Filter};
use data_loader::Listing;
use tracing::debug;

/// Runs its filters in insertion order; each sees the previous one's output.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MissingIdentifierFilter)
///     .add_filter(InactiveListingFilter)
///     .add_filter(AlreadyJudgedFilter);
///
/// let eligible = pipeline.apply(pool.iter().collect(), &exclusions)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// A pipeline that lets every candidate through
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The eligibility filters every ranking pass runs:
    /// malformed, inactive, then already judged listings are removed.
    pub fn eligibility() -> Self {
        Self::new()
            .add_filter(MissingIdentifierFilter)
            .add_filter(InactiveListingFilter)
            .add_filter(AlreadyJudgedFilter)
    }

    /// Append a filter (builder pattern)
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter over `candidates`, stopping at the first error.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a Listing>,
        exclusions: &Exclusions,
    ) -> Result<Vec<&'a Listing>> {
        let mut remaining = candidates;
        for filter in &self.filters {
            let before = remaining.len();
            remaining = filter.apply(remaining, exclusions)?;
            debug!(
                filter = filter.name(),
                "{} -> {} candidates",
                before,
                remaining.len()
            );
        }
        Ok(remaining)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
