//! Catalog reports.
//!
//! Each report is a single pass over the loaded movies and returns plain
//! data; formatting is left to the caller.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MaxLengthFilter, ReleaseWindowFilter, RelevantScoreFilter};
use anyhow::Result;
use catalog::{Genre, Movie, Person};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

/// Highest possible audience score
pub const MAX_SCORE: u32 = 100;

/// Movies sharing the highest relevant score
#[derive(Debug)]
pub struct TopScore<'a> {
    pub score: u32,
    pub movies: Vec<&'a Movie>,
}

/// Directors with the largest number of movies
#[derive(Debug, PartialEq, Eq)]
pub struct ActiveDirectors {
    pub movie_count: usize,
    /// Sorted alphabetically
    pub names: Vec<String>,
}

/// Shortest and longest movies among those with a known runtime
#[derive(Debug)]
pub struct LengthExtremes<'a> {
    pub shortest_length: u32,
    pub shortest: Vec<&'a Movie>,
    pub longest_length: u32,
    pub longest: Vec<&'a Movie>,
}

/// Horror movies rated above PG, out of all horror movies
#[derive(Debug)]
pub struct ScaryHorror<'a> {
    pub horror_count: usize,
    pub scary: Vec<&'a Movie>,
}

/// Number of movies per genre, most common first.
///
/// Genres without movies are left out. Ties keep genre order.
pub fn movies_per_genre(movies: &[Movie]) -> Vec<(Genre, usize)> {
    let mut counts: HashMap<Genre, usize> = HashMap::new();
    for movie in movies {
        *counts.entry(movie.genre()).or_insert(0) += 1;
    }

    let mut counts: Vec<(Genre, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// The highest relevant score and every movie that has it
pub fn highest_scoring(movies: &[Movie]) -> Result<Option<TopScore<'_>>> {
    let relevant = FilterPipeline::new()
        .add_filter(RelevantScoreFilter::relevant())
        .apply(movies)?;

    let Some(score) = relevant.iter().filter_map(|m| m.score()).max() else {
        return Ok(None);
    };
    let movies = relevant
        .into_iter()
        .filter(|m| m.score() == Some(score))
        .collect();

    Ok(Some(TopScore { score, movies }))
}

/// The director(s) credited on the most movies
pub fn most_active_directors(movies: &[Movie]) -> Option<ActiveDirectors> {
    let mut counts: HashMap<&Arc<Person>, usize> = HashMap::new();
    for director in movies.iter().flat_map(|m| m.directors()) {
        *counts.entry(director).or_insert(0) += 1;
    }

    let movie_count = counts.values().copied().max()?;
    let mut names: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count == movie_count)
        .map(|(person, _)| person.full_name().to_string())
        .collect();
    names.sort();

    Some(ActiveDirectors { movie_count, names })
}

/// Shortest and longest movies; `None` when no runtime is known
pub fn shortest_and_longest(movies: &[Movie]) -> Option<LengthExtremes<'_>> {
    let with_length: Vec<(&Movie, u32)> = movies
        .iter()
        .filter_map(|m| m.length().map(|len| (m, len)))
        .collect();

    let shortest_length = with_length.iter().map(|(_, len)| *len).min()?;
    let longest_length = with_length.iter().map(|(_, len)| *len).max()?;

    let pick = |wanted: u32| {
        with_length
            .iter()
            .filter(|(_, len)| *len == wanted)
            .map(|(m, _)| *m)
            .collect::<Vec<_>>()
    };

    Some(LengthExtremes {
        shortest_length,
        shortest: pick(shortest_length),
        longest_length,
        longest: pick(longest_length),
    })
}

/// Horror movies, and the scary ones among them
pub fn scary_horror(movies: &[Movie]) -> Result<ScaryHorror<'_>> {
    let horror = FilterPipeline::new()
        .add_filter(GenreFilter::new(Genre::Horror))
        .apply(movies)?;

    let horror_count = horror.len();
    let scary = horror
        .into_iter()
        .filter(|m| m.as_horror().is_some_and(|h| h.is_scary()))
        .collect();

    Ok(ScaryHorror { horror_count, scary })
}

/// How many movies have each score from 0 to 100.
///
/// Index `i` holds the count for score `i`. Scores above 100 are ignored.
pub fn score_distribution(movies: &[Movie]) -> Vec<usize> {
    let mut distribution = vec![0; MAX_SCORE as usize + 1];
    for score in movies.iter().filter_map(|m| m.score()) {
        if let Some(slot) = distribution.get_mut(score as usize) {
            *slot += 1;
        }
    }
    distribution
}

/// Movies released inside `[from, to]` that run shorter than `max_minutes`
pub fn released_between<'a>(
    movies: &'a [Movie],
    from: NaiveDate,
    to: NaiveDate,
    max_minutes: u32,
) -> Result<Vec<&'a Movie>> {
    FilterPipeline::new()
        .add_filter(ReleaseWindowFilter::new(from, to))
        .add_filter(MaxLengthFilter::new(max_minutes))
        .apply(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{MovieFactory, RawRecord};

    struct Fixture<'a> {
        title: &'a str,
        genre: &'a str,
        rating: &'a str,
        directors: &'a str,
        released: &'a str,
        runtime: &'a str,
        score: &'a str,
        votes: &'a str,
    }

    fn build(rows: &[Fixture<'_>]) -> (MovieFactory, Vec<Movie>) {
        let mut factory = MovieFactory::new();
        let movies = rows
            .iter()
            .map(|s| {
                let record: RawRecord = [
                    ("rotten_tomatoes_link", format!("m/{}", s.title)),
                    ("movie_title", s.title.to_string()),
                    ("genre", s.genre.to_string()),
                    ("content_rating", s.rating.to_string()),
                    ("directors", s.directors.to_string()),
                    ("original_release_date", s.released.to_string()),
                    ("runtime", s.runtime.to_string()),
                    ("audience_rating", s.score.to_string()),
                    ("audience_count", s.votes.to_string()),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
                factory.create_movie(&record).unwrap()
            })
            .collect();
        (factory, movies)
    }

    fn sample() -> Vec<Movie> {
        build(&[
            Fixture { title: "A", genre: "Horror", rating: "R", directors: "Wes Craven", released: "2001-05-01", runtime: "90", score: "92", votes: "150" },
            Fixture { title: "B", genre: "Horror", rating: "PG", directors: "Wes Craven, Sam Raimi", released: "2004-01-01", runtime: "130", score: "92", votes: "400" },
            Fixture { title: "C", genre: "Comedy", rating: "G", directors: "Sam Raimi", released: "1990-01-01", runtime: "12", score: "99", votes: "3" },
            Fixture { title: "D", genre: "Drama", rating: "NR", directors: "", released: "", runtime: "130", score: "", votes: "" },
            Fixture { title: "E", genre: "Horror", rating: "NC17", directors: "Ana Lily", released: "2005-04-01", runtime: "12", score: "40", votes: "100" },
        ])
        .1
    }

    #[test]
    fn test_movies_per_genre() {
        let counts = movies_per_genre(&sample());
        assert_eq!(
            counts,
            [(Genre::Horror, 3), (Genre::Comedy, 1), (Genre::Drama, 1)]
        );
    }

    #[test]
    fn test_highest_scoring() {
        let movies = sample();
        let top = highest_scoring(&movies).unwrap().unwrap();

        // C scores 99 but with only 3 votes
        assert_eq!(top.score, 92);
        let titles: Vec<_> = top.movies.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["A", "B"]);

        assert!(highest_scoring(&[]).unwrap().is_none());
    }

    #[test]
    fn test_most_active_directors() {
        let active = most_active_directors(&sample()).unwrap();
        assert_eq!(
            active,
            ActiveDirectors {
                movie_count: 2,
                names: vec!["Sam Raimi".to_string(), "Wes Craven".to_string()],
            }
        );
        assert!(most_active_directors(&[]).is_none());
    }

    #[test]
    fn test_shortest_and_longest() {
        let movies = sample();
        let extremes = shortest_and_longest(&movies).unwrap();

        assert_eq!(extremes.shortest_length, 12);
        assert_eq!(extremes.shortest.len(), 2);
        assert_eq!(extremes.longest_length, 130);
        let longest: Vec<_> = extremes.longest.iter().map(|m| m.title()).collect();
        assert_eq!(longest, ["B", "D"]);
    }

    #[test]
    fn test_scary_horror() {
        let movies = sample();
        let report = scary_horror(&movies).unwrap();

        assert_eq!(report.horror_count, 3);
        let scary: Vec<_> = report.scary.iter().map(|m| m.title()).collect();
        assert_eq!(scary, ["A", "E"]);
    }

    #[test]
    fn test_score_distribution() {
        let distribution = score_distribution(&sample());

        assert_eq!(distribution.len(), 101);
        assert_eq!(distribution[92], 2);
        assert_eq!(distribution[99], 1);
        assert_eq!(distribution[40], 1);
        assert_eq!(distribution.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_released_between() {
        let movies = sample();
        let from = NaiveDate::from_ymd_opt(2000, 4, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2005, 4, 1).unwrap();

        let selected = released_between(&movies, from, to, 120).unwrap();
        let titles: Vec<_> = selected.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["A", "E"]);
    }
}
