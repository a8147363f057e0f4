//! Ranking of a candidate pool for one user.
//!
//! ## Algorithm
//! 1. Drop ineligible candidates (no id, inactive, already judged)
//! 2. No likes: return the eligible pool newest first, all scores 0
//! 3. Otherwise build the InterestProfile from the liked listings
//! 4. Score every eligible candidate, drop zero scores
//! 5. Sort and truncate to the limit
//!
//! ## Ordering
//! Score descending, then overlap count descending, then fit percentage
//! descending, then newest first, then lowest listing id. The last key makes
//! the order total, so identical inputs always give identical output.

use crate::config::{FitWeights, RankingConfig, TokenizerConfig};
use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::profile::InterestProfile;
use crate::scoring::{FitScorer, ScoredCandidate};
use crate::tokenizer::Tokenizer;
use crate::traits::Exclusions;
use data_loader::{Listing, ListingId, StopwordSet};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Canonical result order
pub fn compare_ranked(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.overlap_count.cmp(&a.overlap_count))
        .then_with(|| b.fit_percentage.cmp(&a.fit_percentage))
        .then_with(|| b.listing.created_at.cmp(&a.listing.created_at))
        .then_with(|| a.listing.id.cmp(&b.listing.id))
}

/// Ranks candidate pools with a validated configuration.
///
/// Holds no per-user state; one Ranker can serve every request.
pub struct Ranker {
    config: RankingConfig,
    filters: FilterPipeline,
}

impl Ranker {
    /// Create a ranker, failing fast on invalid weights
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            filters: FilterPipeline::eligibility(),
        })
    }

    /// Replace the eligibility filters (builder pattern)
    pub fn with_filters(mut self, filters: FilterPipeline) -> Self {
        self.filters = filters;
        self
    }

    /// Rank `pool` for a user with the given history.
    ///
    /// `limit` falls back to the configured default; `None` in both
    /// means unbounded.
    #[instrument(skip_all, fields(liked = liked.len(), disliked = disliked.len(), pool = pool.len()))]
    pub fn rank(
        &self,
        liked: &[Listing],
        disliked: &HashSet<ListingId>,
        pool: &[Listing],
        stopwords: &StopwordSet,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredCandidate>> {
        let exclusions = Exclusions::from_history(liked, disliked);
        let eligible = self.filters.apply(pool.iter().collect(), &exclusions)?;
        debug!("{} of {} candidates eligible", eligible.len(), pool.len());

        let mut ranked: Vec<ScoredCandidate> = if liked.is_empty() {
            debug!("No liked listings, falling back to recency order");
            eligible
                .into_iter()
                .map(|listing| ScoredCandidate::unscored(listing.clone()))
                .collect()
        } else {
            let tokenizer = Tokenizer::new(stopwords, self.config.tokenizer);
            let profile = InterestProfile::build(liked, &tokenizer);
            let scorer = FitScorer::new(&profile, tokenizer, self.config.weights);

            eligible
                .into_iter()
                .map(|listing| scorer.score(listing))
                .filter(|candidate| candidate.score > 0.0)
                .collect()
        };

        ranked.sort_by(compare_ranked);

        if let Some(limit) = limit.or(self.config.default_limit) {
            ranked.truncate(limit);
        }

        debug!("Ranked {} candidates", ranked.len());
        Ok(ranked)
    }
}

/// One-shot ranking with explicit weights and default tokenizer settings.
pub fn rank(
    liked: &[Listing],
    disliked: &HashSet<ListingId>,
    pool: &[Listing],
    stopwords: &StopwordSet,
    weights: &FitWeights,
    limit: Option<usize>,
) -> Result<Vec<ScoredCandidate>> {
    let ranker = Ranker::new(RankingConfig {
        weights: *weights,
        tokenizer: TokenizerConfig::default(),
        ..RankingConfig::default()
    })?;
    ranker.rank(liked, disliked, pool, stopwords, limit)
}
