//! # Recommendation Orchestrator
//!
//! This module coordinates the recommendation flow for one request:
//! 1. Fetch user context
//! 2. Build the active candidate pool
//! 3. Rank the pool against the user's likes (on the blocking pool)
//! 4. Map results to JobRecommendation records
//!
//! The JobIndex and the Ranker are shared read-only behind `Arc`, so a
//! cloned orchestrator can serve concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use data_loader::{EmployerId, JobIndex, ListingId, UserId};
use pipeline::{Ranker, RankingConfig, ScoredCandidate};
use sources::{ActiveListingSource, UserContext};

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecommendation {
    pub listing_id: ListingId,
    pub employer_id: EmployerId,
    pub title: String,
    pub location: Option<String>,
    pub created_at: i64,
    pub score: f32,
    pub overlap_count: u32,
    pub fit_percentage: u8,
    pub explanation: String,
}

impl JobRecommendation {
    /// `None` for candidates without an id; the ranker never returns those
    fn from_scored(candidate: ScoredCandidate) -> Option<Self> {
        let explanation = candidate.explanation();
        let listing = candidate.listing;
        Some(Self {
            listing_id: listing.id?,
            employer_id: listing.employer_id,
            title: listing.title,
            location: listing.location,
            created_at: listing.created_at,
            score: candidate.score,
            overlap_count: candidate.overlap_count,
            fit_percentage: candidate.fit_percentage,
            explanation,
        })
    }
}

/// Main orchestrator that coordinates the recommendation flow
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    data_index: Arc<JobIndex>,
    source: Arc<ActiveListingSource>,
    ranker: Arc<Ranker>,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator with all components initialized
    ///
    /// Fails when the ranking configuration is invalid, so a bad weight is
    /// reported at startup instead of on the first request.
    pub fn new(data_index: Arc<JobIndex>, config: RankingConfig) -> Result<Self> {
        let source = ActiveListingSource::new(data_index.clone())
            .with_max_pool_size(config.max_pool_size);
        let ranker = Ranker::new(config).context("Invalid ranking configuration")?;

        Ok(Self {
            data_index,
            source: Arc::new(source),
            ranker: Arc::new(ranker),
        })
    }

    /// Main entry point: Get recommendations for a user
    ///
    /// # Arguments
    /// * `user_id` - The user to generate recommendations for
    /// * `limit` - Number of recommendations to return; `None` falls back to
    ///   the configured `default_limit`, and to the whole feed without one
    ///
    /// # Returns
    /// Vector of JobRecommendation in ranked order (best fit first)
    pub async fn get_recommendations(
        &self,
        user_id: UserId,
        limit: Option<usize>,
    ) -> Result<Vec<JobRecommendation>> {
        let start_time = Instant::now();

        let context = self.build_user_context(user_id)?;
        info!(
            "Built user context for user {} ({} liked, {} disliked)",
            user_id,
            context.liked_listings.len(),
            context.disliked_listings.len()
        );

        let ranked = self.rank_in_background(context, limit).await?;

        let recommendations: Vec<JobRecommendation> = ranked
            .into_iter()
            .filter_map(JobRecommendation::from_scored)
            .collect();

        info!(
            "Total time to get {} recommendations for user {}: {:.2?}",
            recommendations.len(),
            user_id,
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    fn build_user_context(&self, user_id: UserId) -> Result<UserContext> {
        sources::build_user_context(&self.data_index, user_id)
            .context("Failed to build user context")
    }

    /// Pool building and ranking are CPU-bound; keep them off the async workers
    async fn rank_in_background(
        &self,
        context: UserContext,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredCandidate>> {
        let data_index = self.data_index.clone();
        let source = self.source.clone();
        let ranker = self.ranker.clone();

        let ranked = tokio::task::spawn_blocking(move || {
            let pool = source.get_candidates(&context);
            info!("Active pool for user {}: {} listings", context.user_id, pool.len());

            ranker.rank(
                &context.liked_listings,
                &context.disliked_listings,
                &pool,
                data_index.stopwords(),
                limit,
            )
        })
        .await
        .context("Ranking task panicked")?
        .context("Failed to rank candidates")?;

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Disposition, Interaction, Listing, Role, StopwordSet, User};
    use pipeline::FitWeights;
    use std::path::PathBuf;

    fn student(id: UserId, name: &str) -> User {
        User {
            id,
            role: Role::Student,
            employer_id: None,
            name: name.to_string(),
        }
    }

    fn like(user_id: UserId, listing_id: ListingId, timestamp: i64) -> Interaction {
        Interaction {
            user_id,
            listing_id,
            disposition: Disposition::Liked,
            timestamp,
        }
    }

    fn build_test_data_index() -> Arc<JobIndex> {
        let mut index = JobIndex::new();

        index.insert_user(student(1, "Anna"));
        index.insert_user(student(2, "Chen"));
        index.insert_user(User {
            id: 3,
            role: Role::Recruiter,
            employer_id: Some(20),
            name: "Sanne".to_string(),
        });

        index.insert_listing(
            Listing::new(1, 10, "Python Developer")
                .with_description("python django backend")
                .with_location("Amsterdam")
                .with_created_at(100),
        );
        index.insert_listing(
            Listing::new(2, 20, "Python Engineer")
                .with_description("python flask backend role")
                .with_location("Amsterdam")
                .with_created_at(200),
        );
        index.insert_listing(
            Listing::new(3, 20, "Barista")
                .with_description("coffee bar service")
                .with_location("Rotterdam")
                .with_created_at(300),
        );
        index.insert_listing(
            Listing::new(4, 30, "Backend Engineer")
                .with_description("rust backend services")
                .with_location("Utrecht")
                .with_created_at(400),
        );

        index.insert_interaction(like(1, 1, 1_000));
        index.insert_interaction(like(3, 4, 1_000));

        index.set_stopwords(StopwordSet::empty());
        index.build_secondary_indices();
        Arc::new(index)
    }

    fn build_test_orchestrator() -> RecommendationOrchestrator {
        RecommendationOrchestrator::new(build_test_data_index(), RankingConfig::default()).unwrap()
    }

    fn ids(recommendations: &[JobRecommendation]) -> Vec<ListingId> {
        recommendations.iter().map(|r| r.listing_id).collect()
    }

    #[tokio::test]
    async fn test_recommendations_ranked_by_fit() {
        let orchestrator = build_test_orchestrator();
        let recommendations = orchestrator.get_recommendations(1, Some(10)).await.unwrap();

        // 2: 2*1.5 + 2 + 1 = 6.0, 4: 1.5 + 0 + 0 = 1.5, 3 shares nothing
        assert_eq!(ids(&recommendations), vec![2, 4]);
        assert_eq!(recommendations[0].score, 6.0);
        assert_eq!(recommendations[0].overlap_count, 3);
        assert_eq!(recommendations[0].fit_percentage, 50);
        assert_eq!(recommendations[0].location.as_deref(), Some("Amsterdam"));
    }

    #[tokio::test]
    async fn test_cold_start_falls_back_to_recency() {
        let orchestrator = build_test_orchestrator();
        let recommendations = orchestrator.get_recommendations(2, Some(10)).await.unwrap();

        assert_eq!(ids(&recommendations), vec![4, 3, 2, 1]);
        assert!(recommendations.iter().all(|r| r.score == 0.0));
    }

    #[tokio::test]
    async fn test_limit_truncates() {
        let orchestrator = build_test_orchestrator();
        let recommendations = orchestrator.get_recommendations(2, Some(2)).await.unwrap();
        assert_eq!(ids(&recommendations), vec![4, 3]);
    }

    #[tokio::test]
    async fn test_recruiter_never_sees_own_employer() {
        let orchestrator = build_test_orchestrator();
        let recommendations = orchestrator.get_recommendations(3, Some(10)).await.unwrap();

        assert!(recommendations.iter().all(|r| r.employer_id != 20));
        assert!(!ids(&recommendations).contains(&4), "liked listing must not reappear");
    }

    #[tokio::test]
    async fn test_unknown_user_is_an_error() {
        let orchestrator = build_test_orchestrator();
        let result = orchestrator.get_recommendations(999, Some(10)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_no_limit_uses_configured_default_or_whole_feed() {
        let unbounded = build_test_orchestrator();
        let recommendations = unbounded.get_recommendations(2, None).await.unwrap();
        assert_eq!(recommendations.len(), 4);

        let config = RankingConfig {
            default_limit: Some(3),
            ..RankingConfig::default()
        };
        let bounded = RecommendationOrchestrator::new(build_test_data_index(), config).unwrap();
        let recommendations = bounded.get_recommendations(2, None).await.unwrap();
        assert_eq!(ids(&recommendations), vec![4, 3, 2]);

        // an explicit limit still wins over the default
        let recommendations = bounded.get_recommendations(2, Some(1)).await.unwrap();
        assert_eq!(ids(&recommendations), vec![4]);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_at_construction() {
        let config = RankingConfig {
            weights: FitWeights {
                location_bonus: -1.0,
                ..FitWeights::default()
            },
            ..RankingConfig::default()
        };
        assert!(RecommendationOrchestrator::new(build_test_data_index(), config).is_err());
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_the_index() {
        let orchestrator = build_test_orchestrator();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let orchestrator = orchestrator.clone();
                tokio::spawn(async move { orchestrator.get_recommendations(1 + i % 2, Some(10)).await })
            })
            .collect();

        for handle in handles {
            let recommendations = handle.await.unwrap().unwrap();
            assert!(!recommendations.is_empty());
        }
    }

    #[tokio::test]
    async fn test_recommendation_serializes_to_json() {
        let orchestrator = build_test_orchestrator();
        let recommendations = orchestrator.get_recommendations(1, Some(1)).await.unwrap();

        let json = serde_json::to_value(&recommendations).unwrap();
        assert_eq!(json[0]["listing_id"], 2);
        assert_eq!(json[0]["fit_percentage"], 50);
        assert!(json[0]["explanation"].as_str().unwrap().contains("Score 6.0"));
    }

    #[tokio::test]
    async fn test_sample_dataset_end_to_end() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/jobs");
        let index = Arc::new(JobIndex::load_from_files(&dir).unwrap());
        let orchestrator = RecommendationOrchestrator::new(index, RankingConfig::default()).unwrap();

        let recommendations = orchestrator.get_recommendations(1, Some(5)).await.unwrap();
        assert!(recommendations.len() <= 5);
        // user 1 liked 1 and 6, disliked 3; listing 11 is closed
        for rec in &recommendations {
            assert!(![1, 3, 6, 11].contains(&rec.listing_id));
            assert!(rec.score > 0.0);
        }
        assert!(recommendations.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
