//! # Catalog Crate
//!
//! The in-memory movie catalog and its domain model.
//!
//! ## Main Components
//!
//! - **person**: `Person` and the `PersonRegistry` that keeps one instance per name
//! - **rating**: `Rating` (NR < G < PG < PG-13 < R < NC-17) and the `RatingRegistry`
//! - **movie**: the `Movie` enum over the seven genres and the shared `MovieDetails`
//! - **factory**: `MovieFactory`, turning a raw CSV record into a `Movie`
//! - **loader**: `Catalog`, loading a whole CSV file and skipping bad records
//! - **error**: error types for the crate
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("reviews.csv"))?;
//!
//! for movie in catalog.movies() {
//!     if let Some(horror) = movie.as_horror() {
//!         println!("{} scary: {}", horror.title(), horror.is_scary());
//!     }
//! }
//! println!("{} directors", catalog.persons().count());
//! ```

// Public modules
pub mod error;
pub mod person;
pub mod rating;
pub mod movie;
pub mod factory;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use factory::{MovieFactory, RawRecord};
pub use loader::{Catalog, SkippedRecord};
pub use movie::{Comedy, Genre, Horror, Movie, MovieDetails, Romance};
pub use person::{Person, PersonRegistry};
pub use rating::{Rating, RatingRegistry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.persons().count(), 0);
        assert_eq!(catalog.ratings().len(), 6);
    }

    #[test]
    fn test_insert_movie() {
        let mut catalog = Catalog::new();
        let rating = catalog.ratings().lookup("R").unwrap();
        let director = catalog
            .factory_mut()
            .persons_mut()
            .get_or_create("John Carpenter")
            .unwrap();

        let details = MovieDetails::new("m/halloween", "Halloween", rating)
            .unwrap()
            .with_directors(vec![director]);
        catalog.insert_movie(Movie::new(Genre::Horror, details));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.movies()[0].as_horror().unwrap().is_scary());
        assert_eq!(catalog.persons().count(), 1);
    }
}
