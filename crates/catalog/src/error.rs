//! Error types for the catalog crate.
//!
//! The domain model reports three kinds of failure (invalid argument,
//! duplicate key, missing entry). The loader adds the file-level ones.

use thiserror::Error;

/// Errors raised by the registries, the movie factory and the catalog loader
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Empty or missing required value, malformed code, unknown genre
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A person or rating with the same identity is already registered
    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },

    /// Lookup of something that was never registered
    #[error("{entity} '{key}' does not exist")]
    NotFound { entity: &'static str, key: String },

    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader could not make sense of the input
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl CatalogError {
    /// Shorthand for building an [`CatalogError::InvalidArgument`]
    pub fn invalid(reason: impl Into<String>) -> Self {
        CatalogError::InvalidArgument(reason.into())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
