//! Interest profile built from a user's liked listings.
//!
//! ## Contents
//! - description term frequencies, summed over every liked description
//! - lowercased locations of liked listings (absent ones skipped)
//! - distinct title terms of liked listings
//!
//! The profile is rebuilt on each request and never stored.

use crate::tokenizer::Tokenizer;
use data_loader::Listing;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestProfile {
    description_term_counts: HashMap<String, u32>,
    liked_locations: HashSet<String>,
    liked_title_terms: HashSet<String>,
    /// Tokenized location words, only used for the overlap vocabulary
    location_terms: HashSet<String>,
}

impl InterestProfile {
    pub fn build(liked: &[Listing], tokenizer: &Tokenizer<'_>) -> Self {
        let mut profile = Self::default();

        for listing in liked {
            for term in tokenizer.tokens(listing.description_text()) {
                *profile.description_term_counts.entry(term).or_insert(0) += 1;
            }

            if let Some(location) = listing.normalized_location() {
                profile.location_terms.extend(tokenizer.tokens(&location));
                profile.liked_locations.insert(location);
            }

            profile
                .liked_title_terms
                .extend(tokenizer.tokens(&listing.title));
        }

        profile
    }

    /// True when the liked listings contributed no signal at all
    pub fn is_empty(&self) -> bool {
        self.description_term_counts.is_empty()
            && self.liked_locations.is_empty()
            && self.liked_title_terms.is_empty()
    }

    /// Frequency of `term` across liked descriptions
    pub fn description_count(&self, term: &str) -> u32 {
        self.description_term_counts.get(term).copied().unwrap_or(0)
    }

    /// Sum of liked-description frequencies over the candidate's tokens.
    ///
    /// Repeated candidate tokens count each time they appear, so the sum
    /// grows with the product of both text lengths and needs 64 bits.
    pub fn description_overlap(&self, candidate_tokens: &[String]) -> u64 {
        candidate_tokens
            .iter()
            .map(|token| u64::from(self.description_count(token)))
            .sum()
    }

    /// Whether a normalized location is one of the liked locations
    pub fn has_location(&self, location: &str) -> bool {
        self.liked_locations.contains(location)
    }

    /// Number of candidate title terms also found in liked titles
    pub fn title_overlap(&self, candidate_title_terms: &HashSet<String>) -> u32 {
        candidate_title_terms
            .intersection(&self.liked_title_terms)
            .count() as u32
    }

    /// Whether `term` occurs anywhere in the profile
    pub fn contains_term(&self, term: &str) -> bool {
        self.description_term_counts.contains_key(term)
            || self.liked_title_terms.contains(term)
            || self.location_terms.contains(term)
    }
}
