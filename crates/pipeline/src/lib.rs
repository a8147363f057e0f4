//! Content-based job recommendation core.
//!
//! This crate provides:
//! - A tokenizer for free-text listing fields
//! - Filter trait and implementations for candidate eligibility
//! - FilterPipeline for composing filters
//! - InterestProfile built from a user's liked listings
//! - FitScorer and Ranker producing the ordered feed
//!
//! ## Architecture
//! The ranking pass runs in stages, recomputed from scratch per request:
//! 1. Filters remove ineligible candidates (no id, inactive, already judged)
//! 2. The liked listings are folded into an InterestProfile
//! 3. FitScorer scores each candidate against the profile
//! 4. Ranker drops zero scores, sorts and truncates
//!
//! Nothing here performs I/O or keeps state between calls.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, FitWeights};
//!
//! let feed = rank(
//!     &liked_listings,
//!     &disliked_ids,
//!     &active_pool,
//!     index.stopwords(),
//!     &FitWeights::default(),
//!     Some(20),
//! )?;
//!
//! for candidate in &feed {
//!     println!("{} {:.1}", candidate.listing.title, candidate.score);
//! }
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod profile;
pub mod scoring;
pub mod ranker;

// Re-export main types
pub use config::{FitWeights, RankingConfig, TokenizerConfig};
pub use error::{ConfigError, RankError, Result};
pub use filter_pipeline::FilterPipeline;
pub use profile::InterestProfile;
pub use ranker::{rank, Ranker};
pub use scoring::{FitScorer, ScoreBreakdown, ScoredCandidate};
pub use tokenizer::{tokenize, Tokenizer};
pub use traits::{Exclusions, Filter};
