//! Error types for the survey crate.

use thiserror::Error;

/// Errors that can occur while reading or writing survey files
#[derive(Error, Debug)]
pub enum SurveyError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader or writer failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SurveyError>;
