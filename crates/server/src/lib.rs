//! Server crate for the job-recs recommendation engine.
//!
//! This crate contains the orchestrator that wires user context, the
//! candidate pool and the ranker into one async request.

pub mod orchestrator;

pub use orchestrator::{JobRecommendation, RecommendationOrchestrator};
