//! # Data Loader Crate
//!
//! Loads and indexes the job-matching dataset: users, job listings,
//! like/dislike interactions and the administered stopword list.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, Listing, Interaction, StopwordSet, JobIndex)
//! - **parser**: Parse `.dat` files into Rust structs
//! - **index**: Build indices and validate interaction integrity
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::JobIndex;
//! use std::path::Path;
//!
//! let index = JobIndex::load_from_files(Path::new("data/jobs"))?;
//!
//! let listing = index.get_listing(1).unwrap();
//! let history = index.get_user_interactions(1);
//!
//! println!("{} ({} interactions)", listing.title, history.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    ListingId,
    EmployerId,
    // Core types
    User,
    Listing,
    Interaction,
    StopwordSet,
    JobIndex,
    // Enums
    Role,
    Disposition,
};
