//! Filter on original release date.
//!
//! Keeps movies released inside an inclusive date window. Movies with an
//! unknown release date fall outside every window.

use crate::traits::MovieFilter;
use anyhow::Result;
use catalog::Movie;
use chrono::NaiveDate;

/// Keeps movies released between `from` and `to`, both inclusive.
pub struct ReleaseWindowFilter {
    from: NaiveDate,
    to: NaiveDate,
}

impl ReleaseWindowFilter {
    /// Create a new ReleaseWindowFilter.
    ///
    /// The bounds are swapped if given in the wrong order.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }
}

impl MovieFilter for ReleaseWindowFilter {
    fn name(&self) -> &str {
        "ReleaseWindowFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Result<Vec<&'a Movie>> {
        let filtered = movies
            .into_iter()
            .filter(|movie| {
                movie
                    .release_date()
                    .is_some_and(|date| date >= self.from && date <= self.to)
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, MovieDetails, RatingRegistry};

    fn released(title: &str, date: Option<NaiveDate>) -> Movie {
        let rating = RatingRegistry::new().lookup("PG").unwrap();
        let details = MovieDetails::new(format!("m/{title}"), title, rating)
            .unwrap()
            .with_release_date(date);
        Movie::new(Genre::Drama, details)
    }

    #[test]
    fn test_release_window_is_inclusive() {
        let from = NaiveDate::from_ymd_opt(2000, 4, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2005, 4, 1).unwrap();
        let movies = vec![
            released("Start", Some(from)),
            released("End", Some(to)),
            released("Before", from.pred_opt()),
            released("After", to.succ_opt()),
            released("Unknown", None),
        ];

        // Reversed bounds describe the same window
        let filter = ReleaseWindowFilter::new(to, from);
        let filtered = filter.apply(movies.iter().collect()).unwrap();

        let titles: Vec<_> = filtered.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["Start", "End"]);
    }
}
