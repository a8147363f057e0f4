//! Request-scoped types shared by the candidate sources.

use data_loader::{EmployerId, Listing, ListingId, Role, UserId};
use std::collections::HashSet;

/// Everything the recommendation flow needs to know about one user.
///
/// Built once per request from the JobIndex so sources and the ranker
/// don't query the index again.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: UserId,
    pub role: Role,
    /// Set for recruiters; their own employer's listings are never suggested
    pub employer_id: Option<EmployerId>,
    /// Liked listings, oldest like first
    pub liked_listings: Vec<Listing>,
    pub disliked_listings: HashSet<ListingId>,
}

impl UserContext {
    /// A student with no history
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Student,
            employer_id: None,
            liked_listings: Vec::new(),
            disliked_listings: HashSet::new(),
        }
    }

    /// Whether the user already liked or disliked `listing_id`
    pub fn has_judged(&self, listing_id: ListingId) -> bool {
        self.disliked_listings.contains(&listing_id)
            || self
                .liked_listings
                .iter()
                .any(|listing| listing.id == Some(listing_id))
    }

    /// No likes yet; the ranker will fall back to recency
    pub fn is_cold_start(&self) -> bool {
        self.liked_listings.is_empty()
    }

    pub fn judged_count(&self) -> usize {
        self.liked_listings.len() + self.disliked_listings.len()
    }
}
