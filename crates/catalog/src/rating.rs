//! Content ratings (NR, G, PG, ...) and their registry.
//!
//! Ratings are canonical: a registry hands out one `Arc<Rating>` per code.
//! They compare along the fixed scale NR < G < PG < PG-13 < R < NC-17.
//! Codes outside that scale fall back to plain string comparison, which
//! is not guaranteed to be a lawful total order once custom codes are mixed
//! with standard ones. For that reason `Rating` implements `PartialOrd`
//! but not `Ord`.

use crate::error::{CatalogError, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The standard scale, lowest first
pub const STANDARD_ORDER: [&str; 6] = ["NR", "G", "PG", "PG-13", "R", "NC-17"];

const STANDARD_DESCRIPTIONS: [(&str, &str); 6] = [
    ("NR", "Not Rated"),
    ("G", "General Audiences"),
    ("PG", "Parental Guidance Suggested"),
    ("PG-13", "Parents Strongly Cautioned"),
    ("R", "Restricted"),
    ("NC-17", "Adults Only"),
];

/// Map alternative spellings onto the code stored in the registry.
///
/// Source data uses both "NC-17" and "NC17".
fn canonical_code(code: &str) -> &str {
    match code {
        "NC17" => "NC-17",
        other => other,
    }
}

/// A content rating
#[derive(Debug, Clone)]
pub struct Rating {
    code: String,
    description: String,
}

impl Rating {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Position on the standard scale, `None` for custom codes
    pub fn rank(&self) -> Option<usize> {
        rank_of(&self.code)
    }

    /// Whether this rating sorts strictly above the rating with `code`,
    /// using the same rules as the comparison operators
    pub fn is_above(&self, code: &str) -> bool {
        let code = canonical_code(code);
        self.code != code && !code_less_than(&self.code, code)
    }
}

fn rank_of(code: &str) -> Option<usize> {
    STANDARD_ORDER.iter().position(|&c| c == code)
}

fn code_less_than(a: &str, b: &str) -> bool {
    match (rank_of(a), rank_of(b)) {
        (Some(a), Some(b)) => a < b,
        // Outside the standard scale: lexicographic fallback
        _ => a < b,
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Rating {}

impl Hash for Rating {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if code_less_than(&self.code, &other.code) {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Greater)
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rating({})", self.code)
    }
}

/// Append-only registry of ratings keyed by code
#[derive(Debug)]
pub struct RatingRegistry {
    ratings: HashMap<String, Arc<Rating>>,
}

impl RatingRegistry {
    /// A registry holding the six standard ratings
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (code, description) in STANDARD_DESCRIPTIONS {
            registry.insert(code, description);
        }
        registry
    }

    /// A registry without any ratings, mostly useful in tests
    pub fn empty() -> Self {
        Self {
            ratings: HashMap::new(),
        }
    }

    /// Register a new rating.
    ///
    /// Fails with `InvalidArgument` if the code or description is blank and
    /// with `DuplicateKey` if the code is already registered.
    pub fn define(&mut self, code: &str, description: &str) -> Result<Arc<Rating>> {
        let code = code.trim();
        let description = description.trim();
        if code.is_empty() || description.is_empty() {
            return Err(CatalogError::invalid(
                "rating code and description cannot be empty",
            ));
        }
        let code = canonical_code(code);
        if self.ratings.contains_key(code) {
            return Err(CatalogError::DuplicateKey {
                entity: "Rating",
                key: code.to_string(),
            });
        }
        Ok(self.insert(code, description))
    }

    /// The canonical instance for `code`, or `NotFound`
    pub fn lookup(&self, code: &str) -> Result<Arc<Rating>> {
        let code = canonical_code(code.trim());
        self.ratings
            .get(code)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Rating",
                key: code.to_string(),
            })
    }

    /// Number of registered ratings
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    fn insert(&mut self, code: &str, description: &str) -> Arc<Rating> {
        let rating = Arc::new(Rating {
            code: code.to_string(),
            description: description.to_string(),
        });
        self.ratings.insert(code.to_string(), Arc::clone(&rating));
        rating
    }
}

impl Default for RatingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
