//! JobIndex building and indexing logic.
//!
//! Builds the JobIndex from parsed data:
//! - Primary stores (users, listings, interactions)
//! - Secondary indices (employer_index, recency_index)
//! - Integrity checks on interactions

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

impl JobIndex {
    /// Load a dataset directory.
    ///
    /// Expects `users.dat`, `listings.dat` and `interactions.dat`.
    /// `stopwords.txt` is optional; without it the built-in list is used.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading job dataset from {:?}", data_dir);

        let users_path = data_dir.join("users.dat");
        let listings_path = data_dir.join("listings.dat");
        let interactions_path = data_dir.join("interactions.dat");
        let stopwords_path = data_dir.join("stopwords.txt");

        let ((users, listings), interactions) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_users(&users_path),
                    || parser::parse_listings(&listings_path),
                )
            },
            || parser::parse_interactions(&interactions_path),
        );

        let users = users?;
        let listings = listings?;
        let interactions = interactions?;

        let stopwords = if stopwords_path.exists() {
            parser::parse_stopwords(&stopwords_path)?
        } else {
            warn!(
                "No stopwords.txt in {:?}, falling back to built-in stopwords",
                data_dir
            );
            StopwordSet::builtin()
        };

        info!(
            "Loaded {} users, {} listings, {} interactions, {} stopwords",
            users.len(),
            listings.len(),
            interactions.len(),
            stopwords.len()
        );

        let mut index = JobIndex::new();
        index.set_stopwords(stopwords);

        for user in users {
            index.insert_user(user);
        }

        // The parser always assigns ids, so nothing comes back here
        for listing in listings {
            index.insert_listing(listing);
        }

        for interaction in interactions {
            index.insert_interaction(interaction);
        }

        index.build_secondary_indices();
        index.validate()?;

        info!("JobIndex successfully built and validated");
        Ok(index)
    }

    /// Build employer and recency indices after primary data is loaded.
    ///
    /// Only active listings enter the recency index, so it doubles as the
    /// active pool.
    pub fn build_secondary_indices(&mut self) {
        self.employer_index.clear();
        self.recency_index.clear();

        for (listing_id, listing) in &self.listings {
            self.employer_index
                .entry(listing.employer_id)
                .or_insert_with(Vec::new)
                .push(*listing_id);

            if listing.is_active {
                self.recency_index
                    .entry(listing.created_at)
                    .or_insert_with(Vec::new)
                    .push(*listing_id);
            }
        }

        for ids in self.employer_index.values_mut() {
            ids.sort_unstable();
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - every interaction references an existing user and listing
    /// - a user holds at most one disposition per listing
    pub fn validate(&self) -> Result<()> {
        for (user_id, interactions) in &self.user_interactions {
            if !self.users.contains_key(user_id) {
                return Err(DataLoadError::UnknownUser { user_id: *user_id });
            }

            let mut seen = HashSet::with_capacity(interactions.len());
            for interaction in interactions {
                if !self.listings.contains_key(&interaction.listing_id) {
                    return Err(DataLoadError::UnknownListing {
                        user_id: *user_id,
                        listing_id: interaction.listing_id,
                    });
                }
                if !seen.insert(interaction.listing_id) {
                    return Err(DataLoadError::DuplicateInteraction {
                        user_id: *user_id,
                        listing_id: interaction.listing_id,
                    });
                }
            }
        }

        for user in self.users.values() {
            if user.role == Role::Recruiter && user.employer_id.is_none() {
                warn!("Recruiter {} is not attached to an employer", user.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/jobs")
    }

    fn student(id: UserId) -> User {
        User {
            id,
            role: Role::Student,
            employer_id: None,
            name: format!("student-{}", id),
        }
    }

    #[test]
    fn test_recency_index_only_holds_active_listings() {
        let mut index = JobIndex::new();
        index.insert_listing(Listing::new(1, 10, "Old").with_created_at(100));
        index.insert_listing(Listing::new(2, 10, "New").with_created_at(300));
        index.insert_listing(Listing::new(3, 11, "Closed").with_created_at(200).inactive());
        index.build_secondary_indices();

        assert_eq!(index.active_listing_ids_by_recency(), vec![2, 1]);
        assert_eq!(index.get_listings_by_employer(10), &[1, 2]);
        assert_eq!(index.get_listings_by_employer(11), &[3]);
    }

    #[test]
    fn test_validate_rejects_duplicate_interaction() {
        let mut index = JobIndex::new();
        index.insert_user(student(1));
        index.insert_listing(Listing::new(5, 10, "Dev"));
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 5,
            disposition: Disposition::Liked,
            timestamp: 1,
        });
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 5,
            disposition: Disposition::Disliked,
            timestamp: 2,
        });

        let err = index.validate().unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::DuplicateInteraction { user_id: 1, listing_id: 5 }
        ));
    }

    #[test]
    fn test_validate_rejects_missing_listing() {
        let mut index = JobIndex::new();
        index.insert_user(student(1));
        index.insert_interaction(Interaction {
            user_id: 1,
            listing_id: 42,
            disposition: Disposition::Liked,
            timestamp: 1,
        });

        assert!(matches!(
            index.validate(),
            Err(DataLoadError::UnknownListing { user_id: 1, listing_id: 42 })
        ));
    }

    #[test]
    fn test_load_sample_dataset() {
        let index = JobIndex::load_from_files(&sample_data_dir()).unwrap();
        let (users, listings, interactions) = index.counts();

        assert_eq!(users, 6);
        assert_eq!(listings, 12);
        assert_eq!(interactions, 9);

        assert!(index.stopwords().contains("the"));
        assert!(index.get_listing(11).is_some_and(|l| !l.is_active));
        assert!(!index.active_listing_ids_by_recency().contains(&11));
    }
}
