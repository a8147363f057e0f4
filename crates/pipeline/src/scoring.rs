//! Fit scoring of a single candidate against an interest profile.
//!
//! ## Formula
//! ```text
//! score = description_overlap * description_weight
//!       + location_bonus (if the candidate's location was liked before)
//!       + title_overlap * title_weight
//! ```
//! - `description_overlap`: for every token of the candidate description,
//!   add how often it occurs across liked descriptions
//! - `title_overlap`: shared distinct title terms
//!
//! Besides the score, each candidate carries an `overlap_count` (distinct
//! candidate terms found anywhere in the profile) and a display-only
//! `fit_percentage = floor(overlap_count / distinct candidate terms * 100)`.

use crate::config::FitWeights;
use crate::profile::InterestProfile;
use crate::tokenizer::Tokenizer;
use data_loader::Listing;
use serde::Serialize;
use std::collections::HashSet;

/// The individual signals behind a score, kept for explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub description_overlap: u64,
    pub location_match: bool,
    pub title_overlap: u32,
}

/// A listing with its fit score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub listing: Listing,
    pub score: f32,
    pub overlap_count: u32,
    pub fit_percentage: u8,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate {
    /// A zero-score entry, used for cold-start feeds
    pub fn unscored(listing: Listing) -> Self {
        Self {
            listing,
            score: 0.0,
            overlap_count: 0,
            fit_percentage: 0,
            breakdown: ScoreBreakdown::default(),
        }
    }

    /// Human-readable summary of why this listing was ranked
    pub fn explanation(&self) -> String {
        if self.score == 0.0 {
            return "Newest listing (no likes yet)".to_string();
        }
        let mut parts = vec![format!(
            "{} shared description term hits",
            self.breakdown.description_overlap
        )];
        if self.breakdown.location_match {
            parts.push("location you liked before".to_string());
        }
        if self.breakdown.title_overlap > 0 {
            parts.push(format!("{} shared title terms", self.breakdown.title_overlap));
        }
        format!(
            "Score {:.1} ({}% fit): {}",
            self.score,
            self.fit_percentage,
            parts.join(", ")
        )
    }
}

/// `floor(overlap / total * 100)`, 0 when the candidate has no terms
pub fn fit_percentage(overlap: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((overlap * 100) / total).min(100) as u8
}

/// Scores candidates against one profile with fixed weights.
pub struct FitScorer<'a> {
    profile: &'a InterestProfile,
    tokenizer: Tokenizer<'a>,
    weights: FitWeights,
}

impl<'a> FitScorer<'a> {
    pub fn new(profile: &'a InterestProfile, tokenizer: Tokenizer<'a>, weights: FitWeights) -> Self {
        Self {
            profile,
            tokenizer,
            weights,
        }
    }

    pub fn breakdown(&self, listing: &Listing) -> ScoreBreakdown {
        let description_tokens = self.tokenizer.tokens(listing.description_text());
        let title_terms = self.tokenizer.term_set(&listing.title);

        ScoreBreakdown {
            description_overlap: self.profile.description_overlap(&description_tokens),
            location_match: listing
                .normalized_location()
                .is_some_and(|location| self.profile.has_location(&location)),
            title_overlap: self.profile.title_overlap(&title_terms),
        }
    }

    pub fn score_breakdown(&self, breakdown: &ScoreBreakdown) -> f32 {
        let location_bonus = if breakdown.location_match {
            self.weights.location_bonus
        } else {
            0.0
        };
        breakdown.description_overlap as f32 * self.weights.description_weight
            + location_bonus
            + breakdown.title_overlap as f32 * self.weights.title_weight
    }

    /// Distinct terms of all three text fields
    fn candidate_terms(&self, listing: &Listing) -> HashSet<String> {
        let mut terms = self.tokenizer.term_set(&listing.title);
        terms.extend(self.tokenizer.tokens(listing.description_text()));
        terms.extend(self.tokenizer.tokens(listing.location_text()));
        terms
    }

    /// Score one candidate. Zero-score results are returned as well;
    /// dropping them is the ranker's job.
    pub fn score(&self, listing: &Listing) -> ScoredCandidate {
        let breakdown = self.breakdown(listing);
        let score = self.score_breakdown(&breakdown);

        let terms = self.candidate_terms(listing);
        let overlap = terms
            .iter()
            .filter(|term| self.profile.contains_term(term))
            .count();

        ScoredCandidate {
            listing: listing.clone(),
            score,
            overlap_count: overlap as u32,
            fit_percentage: fit_percentage(overlap, terms.len()),
            breakdown,
        }
    }
}
