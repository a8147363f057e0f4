//! # Sources Crate
//!
//! Turns the loaded JobIndex into per-request inputs for the ranker.
//!
//! ## Components
//!
//! ### User Context
//! A user's role, employer, liked listings and disliked listing ids,
//! gathered once per request by [`build_user_context`].
//!
//! ### Active Listing Source
//! The candidate pool: active listings newest first, minus what the user
//! already judged and (for recruiters) their own employer's listings.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{build_user_context, ActiveListingSource};
//! use data_loader::JobIndex;
//! use std::sync::Arc;
//!
//! let index = Arc::new(JobIndex::load_from_files(Path::new("data/jobs"))?);
//! let context = build_user_context(&index, user_id)?;
//!
//! let source = ActiveListingSource::new(index.clone()).with_max_pool_size(Some(500));
//! let pool = source.get_candidates(&context);
//! ```

pub mod pool;
pub mod types;
pub mod user_context;

pub use pool::ActiveListingSource;
pub use types::UserContext;
pub use user_context::build_user_context;

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::JobIndex;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn sample_index() -> Arc<JobIndex> {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/jobs");
        Arc::new(JobIndex::load_from_files(&dir).unwrap())
    }

    #[test]
    fn test_sample_context_and_pool() {
        let index = sample_index();
        let context = build_user_context(&index, 1).unwrap();
        assert_eq!(context.liked_listings.len(), 2);
        assert!(context.disliked_listings.contains(&3));

        let pool = ActiveListingSource::new(index.clone()).get_candidates(&context);
        assert!(!pool.is_empty());
        assert!(pool.iter().all(|l| l.is_active));
        assert!(pool.iter().all(|l| !context.has_judged(l.id.unwrap())));
        // newest first
        assert!(pool.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_cold_start_user_has_no_history() {
        let index = sample_index();
        let context = build_user_context(&index, 3).unwrap();
        assert!(context.is_cold_start());
        assert_eq!(context.judged_count(), 0);
    }
}
