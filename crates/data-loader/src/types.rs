//! Core domain types for the job-matching dataset.
//!
//! This module defines the records the rest of the workspace reads:
//! - Type aliases for identifiers (UserId, ListingId, EmployerId)
//! - Listing, Interaction and User records
//! - StopwordSet, the normalized stopword input to tokenization
//! - JobIndex, the in-memory store playing the role of the database

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for an application user (student or recruiter)
pub type UserId = u32;

/// Unique identifier for a job listing
pub type ListingId = u32;

/// Unique identifier for an employer
pub type EmployerId = u32;

// =============================================================================
// User-related Types
// =============================================================================

/// An application user.
///
/// Recruiters are attached to an employer; students are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub role: Role,
    pub employer_id: Option<EmployerId>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Recruiter,
}

// =============================================================================
// Listing
// =============================================================================

/// A job posting.
///
/// `id` is `None` for listings that were never persisted (previews built
/// for templates). Such listings can feed a profile but are never ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Option<ListingId>,
    pub employer_id: EmployerId,
    /// Unix timestamp of creation, used for recency ordering
    pub created_at: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
}

impl Listing {
    /// Create an active listing with only a title.
    pub fn new(id: ListingId, employer_id: EmployerId, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            employer_id,
            created_at: 0,
            title: title.into(),
            description: None,
            location: None,
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Description text, empty when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Location text, empty when absent
    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Lowercased, trimmed location. `None` when absent or blank.
    pub fn normalized_location(&self) -> Option<String> {
        let location = self.location.as_deref()?.trim();
        if location.is_empty() {
            None
        } else {
            Some(location.to_lowercase())
        }
    }
}

// =============================================================================
// Interaction Type
// =============================================================================

/// A user's judgement of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Liked,
    Disliked,
}

/// A single like or dislike recorded for a (user, listing) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub listing_id: ListingId,
    pub disposition: Disposition,
    /// Unix timestamp when the interaction was recorded
    pub timestamp: i64,
}

// =============================================================================
// Stopwords
// =============================================================================

/// Built-in stopword list used when no administered list is available.
///
/// The platform serves Dutch and English listings, so both are covered.
const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "if", "in", "into",
    "is", "it", "no", "not", "of", "on", "or", "our", "such", "that", "the", "their", "then",
    "there", "these", "they", "this", "to", "was", "we", "will", "with", "you", "your",
    "de", "het", "een", "en", "van", "ik", "te", "dat", "die", "in", "is", "op", "aan", "met",
    "als", "voor", "bij", "je", "jij", "wij", "we", "zijn", "er", "om", "ook", "naar", "niet",
    "of", "tot", "uit", "wat", "wordt", "worden",
];

/// A set of stopwords, always stored trimmed and lowercased.
///
/// Source agnostic: built from the default list, a file, or any
/// administered collection. An empty set is valid and filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English/Dutch list
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }

    /// Build from arbitrary words, normalizing each one.
    /// Blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Membership test. `word` is expected to be lowercase already,
    /// which is what the tokenizer produces.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// =============================================================================
// JobIndex - The In-Memory Store
// =============================================================================

/// Holds all users, listings and interactions with lookup indices.
///
/// Plays the storage layer for the recommendation core: it answers
/// "which listings are active" and "what has this user judged".
#[derive(Debug)]
pub struct JobIndex {
    // Primary data stores
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) listings: HashMap<ListingId, Listing>,

    /// All interactions made by each user, in insertion order
    pub(crate) user_interactions: HashMap<UserId, Vec<Interaction>>,

    // Secondary indices
    /// Listings grouped by employer
    pub(crate) employer_index: HashMap<EmployerId, Vec<ListingId>>,
    /// Active listings keyed by creation time
    pub(crate) recency_index: BTreeMap<i64, Vec<ListingId>>,

    pub(crate) stopwords: StopwordSet,
}

impl JobIndex {
    /// Creates a new, empty JobIndex using the built-in stopwords
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            listings: HashMap::new(),
            user_interactions: HashMap::new(),
            employer_index: HashMap::new(),
            recency_index: BTreeMap::new(),
            stopwords: StopwordSet::builtin(),
        }
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_listing(&self, id: ListingId) -> Option<&Listing> {
        self.listings.get(&id)
    }

    /// All interactions made by a user; empty slice if none
    pub fn get_user_interactions(&self, user_id: UserId) -> &[Interaction] {
        self.user_interactions
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All listings posted by an employer
    pub fn get_listings_by_employer(&self, employer_id: EmployerId) -> &[ListingId] {
        self.employer_index
            .get(&employer_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Active listing ids, newest first. Equal timestamps are ordered by id.
    pub fn active_listing_ids_by_recency(&self) -> Vec<ListingId> {
        self.recency_index
            .iter()
            .rev()
            .flat_map(|(_, ids)| {
                let mut ids = ids.clone();
                ids.sort_unstable();
                ids
            })
            .collect()
    }

    pub fn get_all_listing_ids(&self) -> Vec<ListingId> {
        let mut ids: Vec<ListingId> = self.listings.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn get_all_user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.users.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Stopwords loaded alongside the data
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Insert a listing. Listings without an id cannot be stored and are
    /// returned back to the caller.
    pub fn insert_listing(&mut self, listing: Listing) -> Option<Listing> {
        match listing.id {
            Some(id) => {
                self.listings.insert(id, listing);
                None
            }
            None => Some(listing),
        }
    }

    pub fn insert_interaction(&mut self, interaction: Interaction) {
        self.user_interactions
            .entry(interaction.user_id)
            .or_insert_with(Vec::new)
            .push(interaction);
    }

    pub fn set_stopwords(&mut self, stopwords: StopwordSet) {
        self.stopwords = stopwords;
    }

    /// Get counts for debugging/validation: (users, listings, interactions)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_interactions = self.user_interactions.values().map(|v| v.len()).sum();
        (self.users.len(), self.listings.len(), total_interactions)
    }
}

impl Default for JobIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_are_normalized() {
        let stopwords = StopwordSet::from_words(["  The ", "AND", "", "   "]);
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("The"));
    }

    #[test]
    fn test_builtin_stopwords() {
        let stopwords = StopwordSet::builtin();
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("het"));
        assert!(!stopwords.contains("python"));
    }

    #[test]
    fn test_normalized_location() {
        let listing = Listing::new(1, 1, "Dev").with_location("  Amsterdam ");
        assert_eq!(listing.normalized_location().as_deref(), Some("amsterdam"));

        let blank = Listing::new(2, 1, "Dev").with_location("   ");
        assert_eq!(blank.normalized_location(), None);

        assert_eq!(Listing::new(3, 1, "Dev").normalized_location(), None);
    }

    #[test]
    fn test_insert_listing_without_id_is_rejected() {
        let mut index = JobIndex::new();
        let mut preview = Listing::new(1, 1, "Preview");
        preview.id = None;

        assert!(index.insert_listing(preview).is_some());
        assert_eq!(index.counts().1, 0);
    }
}
