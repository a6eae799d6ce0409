//! Filters, reports and export over a loaded movie catalog.
//!
//! This crate provides:
//! - MovieFilter trait and implementations for selecting movies
//! - FilterPipeline for composing filters
//! - Reports (aggregations) used by the catalog menu
//! - CSV export of movies without a relevant score
//!
//! ## Example Usage
//! ```ignore
//! use analysis::{FilterPipeline, reports};
//! use analysis::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new(Genre::Comedy))
//!     .add_filter(RelevantScoreFilter::relevant());
//! let comedies = pipeline.apply(catalog.movies())?;
//!
//! let per_genre = reports::movies_per_genre(catalog.movies());
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod reports;
pub mod export;

// Re-export main types
pub use traits::MovieFilter;
pub use filter_pipeline::FilterPipeline;
pub use export::export_without_relevant_score;
