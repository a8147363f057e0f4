//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_judged;
pub mod inactive;
pub mod missing_identifier;

// Re-export for convenience
pub use already_judged::AlreadyJudgedFilter;
pub use inactive::InactiveListingFilter;
pub use missing_identifier::MissingIdentifierFilter;
