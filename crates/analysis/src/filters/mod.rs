//! Filter implementations for the movie pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod max_length;
pub mod release_window;
pub mod relevant_score;

// Re-export for convenience
pub use genre::GenreFilter;
pub use max_length::MaxLengthFilter;
pub use release_window::ReleaseWindowFilter;
pub use relevant_score::RelevantScoreFilter;
