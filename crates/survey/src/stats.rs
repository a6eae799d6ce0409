//! Survey analyses.
//!
//! One function per menu entry. Each is a single pass over the records and
//! returns plain data for the caller to print. Rows missing the column an
//! analysis needs are ignored by that analysis.

use crate::types::SurveyRecord;
use std::collections::{BTreeSet, HashMap};

/// Average, lowest and highest of the number column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberStats {
    pub count: usize,
    pub average: f64,
    pub lowest: f64,
    pub highest: f64,
}

/// How often each color was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStats {
    /// Upper-cased colors in order of first appearance
    pub counts: Vec<(String, usize)>,
    /// Most frequent color; the first one seen wins a tie
    pub most_common: Option<String>,
}

/// Complete vs incomplete submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participation {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
}

/// Where the letter q shows up in the q-words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QWordStats {
    pub starts_with_q: usize,
    pub contains_q: usize,
    pub without_q: usize,
}

/// Number of records
pub fn line_count(records: &[SurveyRecord]) -> usize {
    records.len()
}

/// One line of the contents listing, or `None` for a row that is too short
pub fn row_description(record: &SurveyRecord) -> Option<String> {
    if !record.is_complete_row() {
        return None;
    }
    Some(format!(
        "started on {}, sent on {}, {}, {}, {}, {}",
        record.started_at()?,
        record.submitted_at()?,
        record.number()?,
        record.place()?,
        record.color()?,
        record.q_word()?,
    ))
}

/// Distinct start dates (the part before the time), sorted
pub fn unique_dates(records: &[SurveyRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.started_at())
        .filter(|started| !started.is_empty())
        .filter_map(|started| started.split(' ').next())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Statistics over every valid number; `None` when there is none
pub fn number_stats(records: &[SurveyRecord]) -> Option<NumberStats> {
    let numbers: Vec<f64> = records.iter().filter_map(|r| r.parsed_number()).collect();
    if numbers.is_empty() {
        return None;
    }

    let sum: f64 = numbers.iter().sum();
    Some(NumberStats {
        count: numbers.len(),
        average: sum / numbers.len() as f64,
        lowest: numbers.iter().copied().fold(f64::INFINITY, f64::min),
        highest: numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}

/// Count colors case-insensitively
pub fn color_stats(records: &[SurveyRecord]) -> ColorStats {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for color in records.iter().filter_map(|r| r.color()).map(str::trim) {
        if color.is_empty() {
            continue;
        }
        let color = color.to_uppercase();
        match positions.get(&color) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(color.clone(), counts.len());
                counts.push((color, 1));
            }
        }
    }

    let mut most_common: Option<&(String, usize)> = None;
    for entry in &counts {
        if most_common.is_none_or(|best| entry.1 > best.1) {
            most_common = Some(entry);
        }
    }
    let most_common = most_common.map(|(color, _)| color.clone());

    ColorStats { counts, most_common }
}

/// Distinct places, title-cased and sorted
pub fn unique_places(records: &[SurveyRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.place())
        .map(str::trim)
        .filter(|place| !place.is_empty())
        .map(title_case)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A submission is complete when its submission timestamp is filled in
pub fn participation(records: &[SurveyRecord]) -> Participation {
    let total = records.len();
    let complete = records
        .iter()
        .filter(|r| r.submitted_at().is_some_and(|s| !s.trim().is_empty()))
        .count();

    Participation {
        total,
        complete,
        incomplete: total - complete,
    }
}

/// Ids missing between the lowest and highest numeric id.
///
/// Returns `None` when no row has a numeric id.
pub fn missing_ids(records: &[SurveyRecord]) -> Option<Vec<u64>> {
    let ids: BTreeSet<u64> = records
        .iter()
        .filter_map(|r| r.id())
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|id| id.parse().ok())
        .collect();

    let first = *ids.first()?;
    let last = *ids.last()?;
    Some((first..=last).filter(|id| !ids.contains(id)).collect())
}

/// Classify q-words of complete rows, ignoring case
pub fn q_word_stats(records: &[SurveyRecord]) -> QWordStats {
    let mut stats = QWordStats::default();
    for word in records.iter().filter_map(|r| r.q_word()) {
        let word = word.trim().to_lowercase();
        if !word.contains('q') {
            stats.without_q += 1;
        } else if word.starts_with('q') {
            stats.starts_with_q += 1;
        } else {
            stats.contains_q += 1;
        }
    }
    stats
}

/// Upper-case the first letter of every word, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_is_letter = false;
    for c in s.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    out
}
