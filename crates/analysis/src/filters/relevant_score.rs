//! Filter on score relevance.
//!
//! A score is relevant when it is backed by at least 100 votes. The filter
//! can keep either side of that line: the relevant movies for rankings, or
//! the others for the export of movies that still need votes.

use crate::traits::MovieFilter;
use anyhow::Result;
use catalog::Movie;

/// Splits movies on `has_relevant_score`.
pub struct RelevantScoreFilter {
    keep_relevant: bool,
}

impl RelevantScoreFilter {
    /// Keep movies with a relevant score
    pub fn relevant() -> Self {
        Self { keep_relevant: true }
    }

    /// Keep movies without a relevant score
    pub fn not_relevant() -> Self {
        Self { keep_relevant: false }
    }
}

impl MovieFilter for RelevantScoreFilter {
    fn name(&self) -> &str {
        "RelevantScoreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Result<Vec<&'a Movie>> {
        Ok(movies
            .into_iter()
            .filter(|movie| movie.has_relevant_score() == self.keep_relevant)
            .collect())
    }
}
