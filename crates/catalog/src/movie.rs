//! Movies and their genres.
//!
//! Every movie carries the same set of fields ([`MovieDetails`]). The genre
//! is a closed set, modeled as the [`Movie`] enum. Three genres add a
//! predicate of their own; those live on the wrapper types [`Comedy`],
//! [`Horror`] and [`Romance`], so they are only reachable after matching
//! on the right variant.

use crate::error::{CatalogError, Result};
use crate::person::Person;
use crate::rating::Rating;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// Base address for `source_link`
pub const ROTTEN_TOMATOES_URL: &str = "https://www.rottentomatoes.com/";

/// Minimum number of votes for a score to count
pub const RELEVANT_VOTE_COUNT: u64 = 100;

// =============================================================================
// Genre
// =============================================================================

/// The seven genres a movie can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    ActionAdventure,
    Comedy,
    Drama,
    Horror,
    Romance,
    ScienceFictionFantasy,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::ActionAdventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::ScienceFictionFantasy,
        Genre::Western,
    ];

    /// Genre name as it appears in the source data
    pub fn label(&self) -> &'static str {
        match self {
            Genre::ActionAdventure => "ACTION & ADVENTURE",
            Genre::Comedy => "COMEDY",
            Genre::Drama => "DRAMA",
            Genre::Horror => "HORROR",
            Genre::Romance => "ROMANCE",
            Genre::ScienceFictionFantasy => "SCIENCE FICTION & FANTASY",
            Genre::Western => "WESTERN",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Genre::ActionAdventure => "Action & Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::ScienceFictionFantasy => "Science Fiction & Fantasy",
            Genre::Western => "Western",
        }
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Case-insensitive exact match against [`Genre::label`]
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_uppercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label() == wanted)
            .ok_or_else(|| CatalogError::invalid(format!("unknown genre: {}", s)))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Shared movie fields
// =============================================================================

/// Fields and predicates shared by every genre
#[derive(Debug, Clone)]
pub struct MovieDetails {
    source_link: String,
    title: String,
    rating: Arc<Rating>,
    directors: Vec<Arc<Person>>,
    release_date: Option<NaiveDate>,
    streaming_date: Option<NaiveDate>,
    length: Option<u32>,
    company: Option<String>,
    score: Option<u32>,
    vote_count: Option<u64>,
}

impl MovieDetails {
    /// Build the mandatory part of a movie.
    ///
    /// Optional fields start out absent and are filled in with the
    /// `with_*` methods.
    pub fn new(
        source_link: impl Into<String>,
        title: impl Into<String>,
        rating: Arc<Rating>,
    ) -> Result<Self> {
        let source_link = source_link.into();
        let title = title.into();
        if source_link.trim().is_empty() || title.trim().is_empty() {
            return Err(CatalogError::invalid("source link and title cannot be empty"));
        }

        Ok(Self {
            source_link,
            title,
            rating,
            directors: Vec::new(),
            release_date: None,
            streaming_date: None,
            length: None,
            company: None,
            score: None,
            vote_count: None,
        })
    }

    pub fn with_directors(mut self, directors: Vec<Arc<Person>>) -> Self {
        self.directors = directors;
        self
    }

    pub fn with_release_date(mut self, date: Option<NaiveDate>) -> Self {
        self.release_date = date;
        self
    }

    pub fn with_streaming_date(mut self, date: Option<NaiveDate>) -> Self {
        self.streaming_date = date;
        self
    }

    pub fn with_length(mut self, minutes: Option<u32>) -> Self {
        self.length = minutes;
        self
    }

    pub fn with_company(mut self, company: Option<String>) -> Self {
        self.company = company;
        self
    }

    pub fn with_score(mut self, score: Option<u32>) -> Self {
        self.score = score;
        self
    }

    pub fn with_vote_count(mut self, votes: Option<u64>) -> Self {
        self.vote_count = votes;
        self
    }

    pub fn source_link(&self) -> &str {
        &self.source_link
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> &Arc<Rating> {
        &self.rating
    }

    /// Directors in source order. The slice is read-only; the movie keeps
    /// its own list.
    pub fn directors(&self) -> &[Arc<Person>] {
        &self.directors
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    pub fn streaming_date(&self) -> Option<NaiveDate> {
        self.streaming_date
    }

    /// Runtime in minutes
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Audience score, 0-100
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Number of audience votes behind [`score`](Self::score)
    pub fn vote_count(&self) -> Option<u64> {
        self.vote_count
    }

    /// Full web address of the movie page
    pub fn url(&self) -> String {
        format!("{}{}", ROTTEN_TOMATOES_URL, self.source_link)
    }

    /// A score counts when it is backed by at least 100 votes
    pub fn has_relevant_score(&self) -> bool {
        self.score.is_some()
            && self
                .vote_count
                .is_some_and(|votes| votes >= RELEVANT_VOTE_COUNT)
    }

    /// At least 20 years old with a relevant score above 80
    pub fn is_classic(&self) -> bool {
        self.is_classic_in(Local::now().year())
    }

    /// [`is_classic`](Self::is_classic) evaluated as if the current year
    /// were `current_year`
    pub fn is_classic_in(&self, current_year: i32) -> bool {
        if !self.has_relevant_score() || self.score.is_none_or(|score| score <= 80) {
            return false;
        }
        self.release_date
            .is_some_and(|date| current_year - date.year() >= 20)
    }

    /// Shorter than half an hour
    pub fn is_short(&self) -> bool {
        self.length.is_some_and(|minutes| minutes < 30)
    }
}

// =============================================================================
// Genre-specific wrappers
// =============================================================================

/// A comedy
#[derive(Debug, Clone)]
pub struct Comedy(MovieDetails);

impl Comedy {
    /// Relevant score below 40
    pub fn is_slapstick(&self) -> bool {
        self.0.has_relevant_score() && self.0.score.is_some_and(|score| score < 40)
    }
}

/// A horror movie
#[derive(Debug, Clone)]
pub struct Horror(MovieDetails);

impl Horror {
    /// Rated above PG
    pub fn is_scary(&self) -> bool {
        self.0.rating.is_above("PG")
    }
}

/// A romance
#[derive(Debug, Clone)]
pub struct Romance(MovieDetails);

impl Romance {
    /// Between 70 and 100 minutes, both inclusive
    pub fn is_cosy(&self) -> bool {
        self.0
            .length
            .is_some_and(|minutes| (70..=100).contains(&minutes))
    }
}

macro_rules! deref_to_details {
    ($($ty:ty),*) => {
        $(
            impl Deref for $ty {
                type Target = MovieDetails;

                fn deref(&self) -> &MovieDetails {
                    &self.0
                }
            }
        )*
    };
}

deref_to_details!(Comedy, Horror, Romance);

// =============================================================================
// Movie
// =============================================================================

/// A movie of one of the seven genres
#[derive(Debug, Clone)]
pub enum Movie {
    ActionAdventure(MovieDetails),
    Comedy(Comedy),
    Drama(MovieDetails),
    Horror(Horror),
    Romance(Romance),
    ScienceFictionFantasy(MovieDetails),
    Western(MovieDetails),
}

impl Movie {
    /// Wrap `details` in the variant for `genre`
    pub fn new(genre: Genre, details: MovieDetails) -> Self {
        match genre {
            Genre::ActionAdventure => Movie::ActionAdventure(details),
            Genre::Comedy => Movie::Comedy(Comedy(details)),
            Genre::Drama => Movie::Drama(details),
            Genre::Horror => Movie::Horror(Horror(details)),
            Genre::Romance => Movie::Romance(Romance(details)),
            Genre::ScienceFictionFantasy => Movie::ScienceFictionFantasy(details),
            Genre::Western => Movie::Western(details),
        }
    }

    pub fn genre(&self) -> Genre {
        match self {
            Movie::ActionAdventure(_) => Genre::ActionAdventure,
            Movie::Comedy(_) => Genre::Comedy,
            Movie::Drama(_) => Genre::Drama,
            Movie::Horror(_) => Genre::Horror,
            Movie::Romance(_) => Genre::Romance,
            Movie::ScienceFictionFantasy(_) => Genre::ScienceFictionFantasy,
            Movie::Western(_) => Genre::Western,
        }
    }

    pub fn details(&self) -> &MovieDetails {
        match self {
            Movie::ActionAdventure(details)
            | Movie::Drama(details)
            | Movie::ScienceFictionFantasy(details)
            | Movie::Western(details) => details,
            Movie::Comedy(comedy) => &comedy.0,
            Movie::Horror(horror) => &horror.0,
            Movie::Romance(romance) => &romance.0,
        }
    }

    pub fn as_comedy(&self) -> Option<&Comedy> {
        match self {
            Movie::Comedy(comedy) => Some(comedy),
            _ => None,
        }
    }

    pub fn as_horror(&self) -> Option<&Horror> {
        match self {
            Movie::Horror(horror) => Some(horror),
            _ => None,
        }
    }

    pub fn as_romance(&self) -> Option<&Romance> {
        match self {
            Movie::Romance(romance) => Some(romance),
            _ => None,
        }
    }
}

impl Deref for Movie {
    type Target = MovieDetails;

    fn deref(&self) -> &MovieDetails {
        self.details()
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.rating())
    }
}
