//! Building movies from raw CSV field maps.
//!
//! The factory owns the person and rating registries so that every movie it
//! builds shares director and rating instances with all the others.
//!
//! Required fields (link, title, content rating, genre) must be present and
//! non-blank. Optional fields that fail to parse are left absent instead of
//! rejecting the whole record.

use crate::error::{CatalogError, Result};
use crate::movie::{Genre, Movie, MovieDetails};
use crate::person::{Person, PersonRegistry};
use crate::rating::RatingRegistry;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Column names of the source CSV
pub mod fields {
    pub const LINK: &str = "rotten_tomatoes_link";
    pub const TITLE: &str = "movie_title";
    pub const CONTENT_RATING: &str = "content_rating";
    pub const GENRE: &str = "genre";
    pub const DIRECTORS: &str = "directors";
    pub const RELEASE_DATE: &str = "original_release_date";
    pub const STREAMING_DATE: &str = "streaming_release_date";
    pub const RUNTIME: &str = "runtime";
    pub const COMPANY: &str = "production_company";
    pub const AUDIENCE_RATING: &str = "audience_rating";
    pub const AUDIENCE_COUNT: &str = "audience_count";
}

/// Date format used by the source data
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One CSV record, keyed by column name
pub type RawRecord = HashMap<String, String>;

/// Creates movies and keeps the registries they reference
#[derive(Debug, Default)]
pub struct MovieFactory {
    persons: PersonRegistry,
    ratings: RatingRegistry,
}

impl MovieFactory {
    /// A factory with an empty person registry and the standard ratings
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory working on the given registries
    pub fn with_registries(persons: PersonRegistry, ratings: RatingRegistry) -> Self {
        Self { persons, ratings }
    }

    pub fn persons(&self) -> &PersonRegistry {
        &self.persons
    }

    pub fn persons_mut(&mut self) -> &mut PersonRegistry {
        &mut self.persons
    }

    pub fn ratings(&self) -> &RatingRegistry {
        &self.ratings
    }

    pub fn ratings_mut(&mut self) -> &mut RatingRegistry {
        &mut self.ratings
    }

    /// Build the genre-specific movie described by `record`.
    ///
    /// ## Errors
    /// `InvalidArgument` when a required field is blank, the rating code is
    /// unknown or the genre is not one of the seven known genres.
    pub fn create_movie(&mut self, record: &RawRecord) -> Result<Movie> {
        let link = field(record, fields::LINK);
        let title = field(record, fields::TITLE);
        let rating_code = field(record, fields::CONTENT_RATING);
        let genre_name = field(record, fields::GENRE);

        let (Some(link), Some(title), Some(rating_code), Some(genre_name)) =
            (link, title, rating_code, genre_name)
        else {
            return Err(CatalogError::invalid("missing required fields"));
        };

        let rating = self
            .ratings
            .lookup(rating_code)
            .map_err(|_| CatalogError::invalid(format!("invalid rating code: {}", rating_code)))?;

        let directors = self.resolve_directors(field(record, fields::DIRECTORS))?;

        let genre = Genre::from_str(genre_name)?;

        let details = MovieDetails::new(link, title, rating)?
            .with_directors(directors)
            .with_release_date(parse_optional(record, fields::RELEASE_DATE, parse_date))
            .with_streaming_date(parse_optional(record, fields::STREAMING_DATE, parse_date))
            .with_length(parse_optional(record, fields::RUNTIME, |s| s.parse().ok()))
            .with_company(field(record, fields::COMPANY).map(str::to_string))
            .with_score(parse_optional(record, fields::AUDIENCE_RATING, |s| s.parse().ok()))
            .with_vote_count(parse_optional(record, fields::AUDIENCE_COUNT, |s| s.parse().ok()));

        Ok(Movie::new(genre, details))
    }

    /// Split a comma separated list of names and canonicalize each one,
    /// keeping the original order
    fn resolve_directors(&mut self, names: Option<&str>) -> Result<Vec<Arc<Person>>> {
        let Some(names) = names else {
            return Ok(Vec::new());
        };
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| self.persons.get_or_create(name))
            .collect()
    }
}

/// A trimmed, non-blank field value
fn field<'a>(record: &'a RawRecord, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Parse an optional field, treating a parse failure like a missing value
fn parse_optional<T>(record: &RawRecord, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = field(record, key)?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!("Ignoring unparsable {} value '{}'", key, raw);
    }
    parsed
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
