//! Active Listing Source - the candidate pool
//!
//! Produces the listings a user could be shown:
//! 1. Walk active listings newest first (JobIndex recency index)
//! 2. Skip listings the user already liked or disliked
//! 3. Skip listings posted by the user's own employer
//! 4. Stop at `max_pool_size` if one is set
//!
//! The ranker re-applies the eligibility rules, so this pass only keeps
//! the pool small.

use crate::types::UserContext;
use data_loader::{JobIndex, Listing, ListingId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ActiveListingSource {
    /// Shared reference to the data index (read-only, so no Mutex needed)
    data_index: Arc<JobIndex>,

    /// Upper bound on the pool, `None` means every active listing
    max_pool_size: Option<usize>,

    exclude_own_employer: bool,
}

impl ActiveListingSource {
    pub fn new(data_index: Arc<JobIndex>) -> Self {
        Self {
            data_index,
            max_pool_size: None,
            exclude_own_employer: true,
        }
    }

    /// Bound the pool to the newest `max` listings
    pub fn with_max_pool_size(mut self, max: Option<usize>) -> Self {
        self.max_pool_size = max;
        self
    }

    /// Whether recruiters see their own employer's listings (default: excluded)
    pub fn with_own_employer_excluded(mut self, exclude: bool) -> Self {
        self.exclude_own_employer = exclude;
        self
    }

    #[instrument(skip(self, user_context), fields(user_id = user_context.user_id))]
    pub fn get_candidates(&self, user_context: &UserContext) -> Vec<Listing> {
        // listings posted by the recruiter's employer, via the employer index
        let own_listings: HashSet<ListingId> = match user_context.employer_id {
            Some(employer_id) if self.exclude_own_employer => self
                .data_index
                .get_listings_by_employer(employer_id)
                .iter()
                .copied()
                .collect(),
            _ => HashSet::new(),
        };

        let limit = self.max_pool_size.unwrap_or(usize::MAX);
        let candidates: Vec<Listing> = self
            .data_index
            .active_listing_ids_by_recency()
            .into_iter()
            .filter(|&id| !user_context.has_judged(id) && !own_listings.contains(&id))
            .filter_map(|id| self.data_index.get_listing(id))
            .take(limit)
            .cloned()
            .collect();

        debug!(
            "Active pool for user {}: {} candidates",
            user_context.user_id,
            candidates.len()
        );
        candidates
    }
}
