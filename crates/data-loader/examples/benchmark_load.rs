use data_loader::JobIndex;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let data_dir = Path::new("data/jobs");

    println!("Loading job dataset...\n");

    let start = Instant::now();
    let index = JobIndex::load_from_files(data_dir)?;
    let elapsed = start.elapsed();

    let (users, listings, interactions) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Listings: {}", listings);
    println!("Interactions: {}", interactions);
    println!("Stopwords: {}", index.stopwords().len());
    println!("Active listings: {}", index.active_listing_ids_by_recency().len());
    Ok(())
}
