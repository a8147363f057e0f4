//! Core traits for the candidate filtering stage.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate pool before scoring.

use crate::error::Result;
use data_loader::{Listing, ListingId};
use std::collections::HashSet;

/// Per-request exclusion data handed to every filter.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    /// Listings the user already liked or disliked
    pub judged: HashSet<ListingId>,
}

impl Exclusions {
    /// Merge the liked listings' ids with the disliked ids
    pub fn from_history(liked: &[Listing], disliked: &HashSet<ListingId>) -> Self {
        let mut judged = disliked.clone();
        judged.extend(liked.iter().filter_map(|listing| listing.id));
        Self { judged }
    }
}

/// Core trait for filtering candidates.
///
/// - `Send + Sync` allows filters to be shared by concurrent requests
/// - Filters take ownership of the candidate Vec and return the survivors;
///   candidates are borrowed listings so the caller's pool is never touched
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Listing>,
        exclusions: &Exclusions,
    ) -> Result<Vec<&'a Listing>>;
}
