//! Simple test harness for the recommendation orchestrator.
//!
//! Loads the sample data set and prints one feed per user.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use data_loader::JobIndex;
use pipeline::RankingConfig;
use server::RecommendationOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,sources=debug,pipeline=debug")
        .init();

    info!("Starting job-recs server test harness");

    let path = Path::new("data/jobs");
    let data_index = Arc::new(JobIndex::load_from_files(path)?);
    info!("Data index loaded successfully");

    let orchestrator = RecommendationOrchestrator::new(data_index.clone(), RankingConfig::default())?;
    let limit = Some(5);

    let mut user_ids = data_index.get_all_user_ids();
    user_ids.sort_unstable();

    for user_id in user_ids {
        let recommendations = orchestrator.get_recommendations(user_id, limit).await?;
        info!("User {}: {} recommendations", user_id, recommendations.len());
        for (i, rec) in recommendations.iter().enumerate() {
            info!(
                "{}. {} ({}) - Score: {:.1}",
                i + 1,
                rec.title,
                rec.location.as_deref().unwrap_or("anywhere"),
                rec.score
            );
            info!("   {}", rec.explanation);
        }
    }

    Ok(())
}
