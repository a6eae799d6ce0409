//! Core traits for the filtering pipeline.
//!
//! This module defines the MovieFilter trait that allows composable
//! filters to be applied to a selection of catalog movies.

use anyhow::Result;
use catalog::Movie;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters work on borrowed movies; the catalog keeps ownership
/// - Filters take ownership of the selection Vec and return a filtered Vec
pub trait MovieFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a selection of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership of the selection)
    ///
    /// # Returns
    /// * `Ok(Vec<&Movie>)` - The movies that passed, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Result<Vec<&'a Movie>>;
}
