//! Filter to remove listings the user has already liked or disliked.
//!
//! A listing, once judged, is never shown again.

use crate::error::Result;
use crate::traits::{Exclusions, Filter};
use data_loader::Listing;

/// Removes candidates whose id appears in `Exclusions::judged`.
pub struct AlreadyJudgedFilter;

impl Filter for AlreadyJudgedFilter {
    fn name(&self) -> &str {
        "AlreadyJudgedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Listing>,
        exclusions: &Exclusions,
    ) -> Result<Vec<&'a Listing>> {
        let filtered: Vec<&Listing> = candidates
            .into_iter()
            .filter(|listing| match listing.id {
                Some(id) => !exclusions.judged.contains(&id),
                None => true,
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_judged_filter() {
        let mut exclusions = Exclusions::default();
        exclusions.judged.insert(100);
        exclusions.judged.insert(200);

        let pool = vec![
            Listing::new(100, 1, "Liked"),
            Listing::new(101, 1, "Fresh"),
            Listing::new(200, 2, "Disliked"),
            Listing::new(300, 2, "Also fresh"),
        ];

        let filter = AlreadyJudgedFilter;
        let filtered = filter.apply(pool.iter().collect(), &exclusions).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, Some(101));
        assert_eq!(filtered[1].id, Some(300));
    }
}
