//! People (directors) and the registry that canonicalizes them.
//!
//! A person is identified by the trimmed, lower-cased form of their full
//! name. The registry guarantees one shared instance per identity, so
//! every movie directed by "Carl Reiner" points at the same `Arc<Person>`.

use crate::error::{CatalogError, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A person known to the catalog
#[derive(Debug, Clone)]
pub struct Person {
    full_name: String,
    normalized_key: String,
}

impl Person {
    /// Display form of the name, trimmed
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Identity key: trimmed and lower-cased
    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_key == other.normalized_key
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_key.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({})", self.full_name)
    }
}

/// Trim a name and derive its key, rejecting blank input
fn normalize(name: &str) -> Result<(&str, String)> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid("full name cannot be empty"));
    }
    Ok((trimmed, trimmed.to_lowercase()))
}

/// Append-only registry of persons, keyed by normalized name
#[derive(Debug, Default)]
pub struct PersonRegistry {
    persons: HashMap<String, Arc<Person>>,
}

impl PersonRegistry {
    /// Creates a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person.
    ///
    /// Fails with `InvalidArgument` for a blank name and with
    /// `DuplicateKey` when the normalized name is already registered.
    pub fn create(&mut self, name: &str) -> Result<Arc<Person>> {
        let (full_name, key) = normalize(name)?;
        if let Some(existing) = self.persons.get(&key) {
            return Err(CatalogError::DuplicateKey {
                entity: "Person",
                key: existing.full_name.clone(),
            });
        }
        Ok(self.insert(full_name, key))
    }

    /// Return the registered person with this name, creating it if needed.
    ///
    /// The first spelling seen wins: `get_or_create("JANE DOE")` after
    /// `create("Jane Doe")` returns the "Jane Doe" instance.
    pub fn get_or_create(&mut self, name: &str) -> Result<Arc<Person>> {
        let (full_name, key) = normalize(name)?;
        if let Some(existing) = self.persons.get(&key) {
            return Ok(Arc::clone(existing));
        }
        Ok(self.insert(full_name, key))
    }

    /// Lookup without creating
    pub fn get(&self, name: &str) -> Option<&Arc<Person>> {
        self.persons.get(&name.trim().to_lowercase())
    }

    /// Number of distinct persons
    pub fn count(&self) -> usize {
        self.persons.len()
    }

    /// Iterate over all registered persons (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Person>> {
        self.persons.values()
    }

    fn insert(&mut self, full_name: &str, key: String) -> Arc<Person> {
        let person = Arc::new(Person {
            full_name: full_name.to_string(),
            normalized_key: key.clone(),
        });
        self.persons.insert(key, Arc::clone(&person));
        person
    }
}
