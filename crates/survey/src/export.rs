//! Saving the filtered survey rows.
//!
//! Rows are kept when the number column parses and the q-word starts with
//! a q. Output lines are `id;number;color;q-word`, without a header.

use crate::error::Result;
use crate::parser::DELIMITER;
use crate::types::SurveyRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The exported columns of one kept row
pub fn filtered_rows(records: &[SurveyRecord]) -> Vec<[&str; 4]> {
    records
        .iter()
        .filter(|r| r.parsed_number().is_some())
        .filter_map(|r| {
            let q_word = r.q_word()?;
            if !q_word.trim().to_lowercase().starts_with('q') {
                return None;
            }
            Some([r.id()?, r.number()?, r.color()?, q_word])
        })
        .collect()
}

/// Write the kept rows to `writer`
pub fn write_filtered<W: Write>(records: &[SurveyRecord], writer: W) -> Result<usize> {
    let rows = filtered_rows(records);
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(writer);
    for row in &rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

/// Save the kept rows to `path`, returning how many were written
pub fn save_filtered(records: &[SurveyRecord], path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    let saved = write_filtered(records, file)?;
    tracing::info!("Saved {} survey rows to {:?}", saved, path);
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> SurveyRecord {
        fields.iter().copied().collect()
    }

    #[test]
    fn test_write_filtered() {
        let records = vec![
            record(&["1", "a", "b", "4,5", "Gent", "red", "Quiz"]),
            record(&["2", "a", "b", "nope", "Gent", "red", "quick"]),
            record(&["3", "a", "b", "7", "Gent", "blue", "aqua"]),
            record(&["4", "a", "b", "7"]),
        ];

        let mut out = Vec::new();
        let saved = write_filtered(&records, &mut out).unwrap();

        assert_eq!(saved, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "1;4,5;red;Quiz\n");
    }
}
