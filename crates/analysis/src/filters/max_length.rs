//! Filter on runtime.
//!
//! Keeps movies strictly shorter than a maximum number of minutes.
//! Movies without a known runtime are dropped.

use crate::traits::MovieFilter;
use anyhow::Result;
use catalog::Movie;

/// Removes movies that run `max_minutes` or longer.
pub struct MaxLengthFilter {
    max_minutes: u32,
}

impl MaxLengthFilter {
    /// Create a new MaxLengthFilter.
    ///
    /// # Arguments
    /// * `max_minutes` - Exclusive upper bound on the runtime
    pub fn new(max_minutes: u32) -> Self {
        Self { max_minutes }
    }
}

impl MovieFilter for MaxLengthFilter {
    fn name(&self) -> &str {
        "MaxLengthFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Result<Vec<&'a Movie>> {
        let filtered = movies
            .into_iter()
            .filter(|movie| movie.length().is_some_and(|len| len < self.max_minutes))
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, MovieDetails, RatingRegistry};

    #[test]
    fn test_max_length_filter() {
        let rating = RatingRegistry::new().lookup("G").unwrap();
        let movies: Vec<Movie> = [Some(119), Some(120), None]
            .into_iter()
            .enumerate()
            .map(|(i, length)| {
                let details = MovieDetails::new(format!("m/{i}"), format!("Movie {i}"), rating.clone())
                    .unwrap()
                    .with_length(length);
                Movie::new(Genre::Western, details)
            })
            .collect();

        let filter = MaxLengthFilter::new(120);
        let filtered = filter.apply(movies.iter().collect()).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Movie 0");
    }
}
