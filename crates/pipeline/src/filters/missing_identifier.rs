//! Filter to drop malformed candidates.
//!
//! A listing without an identifier can't be liked, disliked or linked to,
//! so it is skipped with a warning instead of failing the whole feed.

use crate::error::Result;
use crate::traits::{Exclusions, Filter};
use data_loader::Listing;
use tracing::warn;

pub struct MissingIdentifierFilter;

impl Filter for MissingIdentifierFilter {
    fn name(&self) -> &str {
        "MissingIdentifierFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Listing>,
        _exclusions: &Exclusions,
    ) -> Result<Vec<&'a Listing>> {
        let (valid, malformed): (Vec<&Listing>, Vec<&Listing>) =
            candidates.into_iter().partition(|listing| listing.id.is_some());

        for listing in &malformed {
            warn!("Skipping listing without identifier: {:?}", listing.title);
        }
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_without_id_is_dropped() {
        let mut preview = Listing::new(0, 1, "Template preview");
        preview.id = None;
        let pool = vec![Listing::new(1, 1, "Real"), preview];

        let filtered = MissingIdentifierFilter
            .apply(pool.iter().collect(), &Exclusions::default())
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, Some(1));
    }
}
