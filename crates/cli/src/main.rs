use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Disposition, Interaction, JobIndex, Listing, ListingId, Role, UserId};
use pipeline::RankingConfig;
use rand::Rng;
use server::{JobRecommendation, RecommendationOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

const DEFAULT_LIMIT: usize = 10;

/// job-recs - Content-based job recommendation engine
#[derive(Parser)]
#[command(name = "job-recs")]
#[command(about = "Job recommendations from the listings a user liked", long_about = None)]
struct Cli {
    /// Path to the job dataset directory
    #[arg(short, long, default_value = "data/jobs")]
    data_dir: PathBuf,

    /// Ranking configuration (JSON); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get job recommendations for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: UserId,

        /// Number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,

        /// Show why each listing was recommended
        #[arg(long)]
        explain: bool,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a user's role and like/dislike history
    User {
        /// User ID to display
        #[arg(long)]
        user_id: UserId,
    },

    /// Search for listings by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RankingConfig::from_file(path)
            .with_context(|| format!("Failed to load ranking config {}", path.display()))?,
        None => RankingConfig::default(),
    };
    debug!("Ranking config: {:?}", config);

    let start = Instant::now();
    let data_index = Arc::new(
        JobIndex::load_from_files(&cli.data_dir).context("Failed to load job dataset")?,
    );
    let (users, listings, interactions) = data_index.counts();
    eprintln!(
        "{} Loaded {} users, {} listings, {} interactions from {} in {:?}",
        "✓".green(),
        users,
        listings,
        interactions,
        cli.data_dir.display(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            user_id,
            limit,
            explain,
            json,
        } => {
            let limit = resolve_limit(limit, &config);
            handle_recommend(data_index, config, user_id, limit, explain, json).await?
        }
        Commands::User { user_id } => handle_user(&data_index, user_id)?,
        Commands::Search { title } => handle_search(&data_index, &title),
        Commands::Benchmark { requests } => handle_benchmark(data_index, config, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    data_index: Arc<JobIndex>,
    config: RankingConfig,
    user_id: UserId,
    limit: Option<usize>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let user = data_index
        .get_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;
    let name = user.name.clone();

    let orchestrator = RecommendationOrchestrator::new(data_index, config)?;
    let recommendations = orchestrator.get_recommendations(user_id, limit).await?;

    if json {
        let output = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{}", output);
    } else {
        print_recommendations(&name, &recommendations, explain);
    }
    Ok(())
}

/// Handle the 'user' command
fn handle_user(data_index: &JobIndex, user_id: UserId) -> Result<()> {
    let user = data_index
        .get_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    println!("{}", format!("User {}: {}", user_id, user.name).bold().blue());
    match (user.role, user.employer_id) {
        (Role::Recruiter, Some(employer_id)) => {
            println!("{}Role: recruiter (employer {})", "• ".green(), employer_id)
        }
        (role, _) => println!("{}Role: {:?}", "• ".green(), role),
    }

    let (liked, disliked) = split_history(data_index, user_id);
    println!("{}Liked: {}", "• ".cyan(), liked.len());
    println!("{}Disliked: {}", "• ".cyan(), disliked.len());

    if liked.is_empty() {
        println!("No likes yet, recommendations fall back to the newest listings");
        return Ok(());
    }

    println!("Liked listings:");
    let mut locations: Vec<String> = Vec::new();
    for interaction in &liked {
        if let Some(listing) = data_index.get_listing(interaction.listing_id) {
            println!("  - {}", describe_listing(interaction.listing_id, listing));
            if let Some(location) = listing.normalized_location() {
                if !locations.contains(&location) {
                    locations.push(location);
                }
            }
        }
    }

    if !disliked.is_empty() {
        println!("Disliked listings:");
        for interaction in &disliked {
            if let Some(listing) = data_index.get_listing(interaction.listing_id) {
                println!("  - {}", describe_listing(interaction.listing_id, listing));
            }
        }
    }

    if !locations.is_empty() {
        println!("Liked locations: {}", locations.join(", "));
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(data_index: &JobIndex, title: &str) {
    let title_lower = title.to_lowercase();

    // (exact match first, newest first)
    let mut matches: Vec<(bool, &Listing, ListingId)> = data_index
        .get_all_listing_ids()
        .into_iter()
        .filter_map(|id| data_index.get_listing(id).map(|listing| (id, listing)))
        .filter_map(|(id, listing)| {
            let listing_title = listing.title.to_lowercase();
            if listing_title == title_lower {
                Some((true, listing, id))
            } else if listing_title.contains(&title_lower) {
                Some((false, listing, id))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.created_at.cmp(&a.1.created_at))
            .then_with(|| a.2.cmp(&b.2))
    });

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("No listings found");
        return;
    }
    for (_, listing, id) in matches.iter().take(20) {
        let status = if listing.is_active {
            "open".green()
        } else {
            "closed".red()
        };
        println!("{} [{}]", describe_listing(*id, listing), status);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    data_index: Arc<JobIndex>,
    config: RankingConfig,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let student_ids: Vec<UserId> = data_index
        .get_all_user_ids()
        .into_iter()
        .filter(|&id| {
            data_index
                .get_user(id)
                .is_some_and(|user| user.role == Role::Student)
        })
        .collect();
    if student_ids.is_empty() {
        bail!("Dataset has no students to benchmark with");
    }

    let limit = resolve_limit(None, &config);
    let orchestrator = RecommendationOrchestrator::new(data_index, config)?;

    let user_ids: Vec<UserId> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| student_ids[rng.random_range(0..student_ids.len())])
            .collect()
    };

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for user in user_ids {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.get_recommendations(user, limit).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// `--limit` wins; otherwise the orchestrator applies the configured
/// `default_limit`, and without one the CLI shows DEFAULT_LIMIT listings
fn resolve_limit(limit: Option<usize>, config: &RankingConfig) -> Option<usize> {
    match (limit, config.default_limit) {
        (Some(limit), _) => Some(limit),
        (None, Some(_)) => None,
        (None, None) => Some(DEFAULT_LIMIT),
    }
}

/// A user's likes and dislikes, each oldest first
fn split_history(data_index: &JobIndex, user_id: UserId) -> (Vec<&Interaction>, Vec<&Interaction>) {
    let mut interactions: Vec<&Interaction> =
        data_index.get_user_interactions(user_id).iter().collect();
    interactions.sort_by_key(|interaction| interaction.timestamp);

    interactions
        .into_iter()
        .partition(|interaction| interaction.disposition == Disposition::Liked)
}

fn describe_listing(id: ListingId, listing: &Listing) -> String {
    format!(
        "{}: {} ({})",
        id,
        listing.title,
        listing.location.as_deref().unwrap_or("no location")
    )
}

/// Helper function to format and print recommendations
fn print_recommendations(name: &str, recommendations: &[JobRecommendation], explain: bool) {
    println!("{}", format!("Job recommendations for {}:", name).bold().blue());
    if recommendations.is_empty() {
        println!("No matching listings");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) - Score: {:.1}, {}% fit",
            (rank + 1).to_string().green(),
            rec.title,
            rec.location.as_deref().unwrap_or("no location"),
            rec.score,
            rec.fit_percentage
        );
        if explain {
            println!("   Explanation: {}", rec.explanation);
        }
    }
}
