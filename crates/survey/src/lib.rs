//! # Survey Crate
//!
//! Loading and analysing a semicolon separated survey export.
//!
//! ## Main Components
//!
//! - **types**: `SurveyRecord`, one raw submission
//! - **parser**: read the export into records
//! - **stats**: the analyses offered by the survey menu
//! - **export**: save the filtered rows
//! - **error**: error types for the crate
//!
//! ## Example Usage
//!
//! ```ignore
//! use survey::{parser, stats};
//!
//! let records = parser::load_survey(Path::new("bord.csv"))?;
//! let colors = stats::color_stats(&records);
//! println!("most common color: {:?}", colors.most_common);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod stats;
pub mod export;

pub use error::{Result, SurveyError};
pub use parser::{load_survey, parse_survey};
pub use types::SurveyRecord;
