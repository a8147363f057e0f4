//! Filter to remove deactivated listings.

use crate::error::Result;
use crate::traits::{Exclusions, Filter};
use data_loader::Listing;

/// Keeps only listings with `is_active` set.
///
/// The storage layer usually hands over active listings only; this filter
/// holds the line when it doesn't.
pub struct InactiveListingFilter;

impl Filter for InactiveListingFilter {
    fn name(&self) -> &str {
        "InactiveListingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Listing>,
        _exclusions: &Exclusions,
    ) -> Result<Vec<&'a Listing>> {
        Ok(candidates
            .into_iter()
            .filter(|listing| listing.is_active)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_listing_filter() {
        let pool = vec![
            Listing::new(1, 1, "Open"),
            Listing::new(2, 1, "Closed").inactive(),
            Listing::new(3, 1, "Open too"),
        ];

        let filtered = InactiveListingFilter
            .apply(pool.iter().collect(), &Exclusions::default())
            .unwrap();

        let ids: Vec<_> = filtered.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }
}
