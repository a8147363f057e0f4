//! Helper functions to build UserContext from JobIndex

use crate::types::UserContext;
use anyhow::{anyhow, Result};
use data_loader::{Disposition, Interaction, JobIndex, UserId};
use tracing::warn;

/// Build a UserContext from JobIndex for a given user
///
/// Gathers:
/// - role and employer of the user
/// - liked listings, in the order they were liked
/// - ids of disliked listings
pub fn build_user_context(index: &JobIndex, user_id: UserId) -> Result<UserContext> {
    let user = index
        .get_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    let mut context = UserContext::new(user_id);
    context.role = user.role;
    context.employer_id = user.employer_id;

    let mut interactions: Vec<&Interaction> = index.get_user_interactions(user_id).iter().collect();
    if interactions.is_empty() {
        return Ok(context);
    }
    interactions.sort_by_key(|interaction| interaction.timestamp);

    for interaction in interactions {
        match interaction.disposition {
            Disposition::Liked => match index.get_listing(interaction.listing_id) {
                Some(listing) => context.liked_listings.push(listing.clone()),
                None => warn!(
                    "User {} liked unknown listing {}, ignoring",
                    user_id, interaction.listing_id
                ),
            },
            Disposition::Disliked => {
                context.disliked_listings.insert(interaction.listing_id);
            }
        }
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Listing, Role, User};

    fn create_test_index() -> JobIndex {
        let mut index = JobIndex::new();

        index.insert_user(User {
            id: 1,
            role: Role::Student,
            employer_id: None,
            name: "Anna".to_string(),
        });
        index.insert_user(User {
            id: 2,
            role: Role::Recruiter,
            employer_id: Some(10),
            name: "Sanne".to_string(),
        });

        index.insert_listing(Listing::new(1, 10, "Python Developer"));
        index.insert_listing(Listing::new(2, 20, "Barista"));
        index.insert_listing(Listing::new(3, 20, "Data Analyst"));

        // inserted out of time order on purpose
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 3,
            disposition: Disposition::Liked,
            timestamp: 300,
        });
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 1,
            disposition: Disposition::Liked,
            timestamp: 100,
        });
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 2,
            disposition: Disposition::Disliked,
            timestamp: 200,
        });

        index.build_secondary_indices();
        index
    }

    #[test]
    fn test_build_user_context_basic() {
        let index = create_test_index();
        let context = build_user_context(&index, 1).unwrap();

        assert_eq!(context.user_id, 1);
        assert_eq!(context.role, Role::Student);
        assert_eq!(context.judged_count(), 3);
        assert!(context.disliked_listings.contains(&2));
        assert!(context.has_judged(1));
        assert!(context.has_judged(2));
    }

    #[test]
    fn test_liked_listings_in_time_order() {
        let index = create_test_index();
        let context = build_user_context(&index, 1).unwrap();

        let liked: Vec<_> = context.liked_listings.iter().map(|l| l.id).collect();
        assert_eq!(liked, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_recruiter_context_carries_employer() {
        let index = create_test_index();
        let context = build_user_context(&index, 2).unwrap();

        assert_eq!(context.role, Role::Recruiter);
        assert_eq!(context.employer_id, Some(10));
        assert!(context.is_cold_start());
    }

    #[test]
    fn test_user_not_found() {
        let index = JobIndex::new();
        assert!(build_user_context(&index, 999).is_err());
    }
}
