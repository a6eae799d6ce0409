//! Survey record type.
//!
//! A survey export has one row per submission with these columns:
//! `id;startdate;datestamp;random number;place;color;q-word`.
//! Rows can be cut short, so every column accessor returns an `Option`.

/// Column positions in the survey export
pub mod columns {
    pub const ID: usize = 0;
    pub const STARTED_AT: usize = 1;
    pub const SUBMITTED_AT: usize = 2;
    pub const NUMBER: usize = 3;
    pub const PLACE: usize = 4;
    pub const COLOR: usize = 5;
    pub const Q_WORD: usize = 6;
}

/// Number of columns in a complete row
pub const COLUMN_COUNT: usize = 7;

/// One survey submission, kept as raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    fields: Vec<String>,
}

impl SurveyRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Raw field at `index`, untrimmed
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the row has every column
    pub fn is_complete_row(&self) -> bool {
        self.fields.len() >= COLUMN_COUNT
    }

    pub fn id(&self) -> Option<&str> {
        self.field(columns::ID)
    }

    /// "<date> <time>" the survey was started
    pub fn started_at(&self) -> Option<&str> {
        self.field(columns::STARTED_AT)
    }

    /// Submission timestamp, blank when never submitted
    pub fn submitted_at(&self) -> Option<&str> {
        self.field(columns::SUBMITTED_AT)
    }

    pub fn number(&self) -> Option<&str> {
        self.field(columns::NUMBER)
    }

    pub fn place(&self) -> Option<&str> {
        self.field(columns::PLACE)
    }

    pub fn color(&self) -> Option<&str> {
        self.field(columns::COLOR)
    }

    pub fn q_word(&self) -> Option<&str> {
        self.field(columns::Q_WORD)
    }

    /// The number column as a float, accepting a decimal comma
    pub fn parsed_number(&self) -> Option<f64> {
        self.number()?.trim().replace(',', ".").parse().ok()
    }
}

impl<S: Into<String>> FromIterator<S> for SurveyRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
