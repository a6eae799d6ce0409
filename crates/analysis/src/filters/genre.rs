//! Filter to keep a single genre.

use crate::traits::MovieFilter;
use anyhow::Result;
use catalog::{Genre, Movie};

/// Keeps only movies of one genre.
pub struct GenreFilter {
    genre: Genre,
}

impl GenreFilter {
    pub fn new(genre: Genre) -> Self {
        Self { genre }
    }
}

impl MovieFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Result<Vec<&'a Movie>> {
        Ok(movies
            .into_iter()
            .filter(|movie| movie.genre() == self.genre)
            .collect())
    }
}
