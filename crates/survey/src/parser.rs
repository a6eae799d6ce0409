//! Parser for survey exports.
//!
//! The export is semicolon separated with a header row. Rows may be
//! shorter than the header; they are kept as-is and the analyses decide
//! what to do with missing columns.

use crate::error::{Result, SurveyError};
use crate::types::SurveyRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Field separator used by the survey export
pub const DELIMITER: u8 = b';';

/// Parse a survey export from disk
pub fn load_survey(path: &Path) -> Result<Vec<SurveyRecord>> {
    if !path.exists() {
        return Err(SurveyError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    let records = parse_survey(file)?;
    tracing::info!("Loaded {} survey records from {:?}", records.len(), path);
    Ok(records)
}

/// Parse a survey export from any reader, skipping the header row
pub fn parse_survey<R: Read>(reader: R) -> Result<Vec<SurveyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.is_empty() {
            continue; // Skip empty lines
        }
        records.push(record.iter().collect());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_survey() {
        let data = "id;startdate;datestamp;random;place;color;word\n\
                    1;2025-10-01 09:00;2025-10-01 09:05;4,2;Gent;red;quiz\n\
                    \n\
                    2;2025-10-02 10:00\n";

        let records = parse_survey(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].color(), Some("red"));
        assert_eq!(records[1].len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_survey(Path::new("no/such/survey.csv")).unwrap_err();
        assert!(matches!(err, SurveyError::FileNotFound { .. }));
    }
}
