//! Loading a movie catalog from a CSV export.
//!
//! The file is comma separated with a header row naming the columns listed
//! in [`crate::factory::fields`]. Every record goes through the
//! [`MovieFactory`]; records it rejects are logged, counted and skipped so
//! one bad line never aborts the load.

use crate::error::{CatalogError, Result};
use crate::factory::{MovieFactory, RawRecord};
use crate::movie::Movie;
use crate::person::PersonRegistry;
use crate::rating::RatingRegistry;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// A record that could not be turned into a movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the source file
    pub line: u64,
    pub reason: String,
}

/// The in-memory catalog: every loaded movie plus the registries they share
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    factory: MovieFactory,
    skipped: Vec<SkippedRecord>,
}

impl Catalog {
    /// Creates an empty catalog with the standard ratings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a CSV file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        info!("Loading movie catalog from {:?}", path);
        let file = File::open(path)?;
        Self::load_from_reader(file)
    }

    /// Load a catalog from any CSV source
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::load_with_factory(reader, MovieFactory::new())
    }

    /// Load a catalog reusing the registries of an existing factory
    pub fn load_with_factory<R: Read>(reader: R, factory: MovieFactory) -> Result<Self> {
        let mut catalog = Self {
            movies: Vec::new(),
            factory,
            skipped: Vec::new(),
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        for (idx, result) in csv_reader.records().enumerate() {
            // Header is line 1
            let fallback_line = idx as u64 + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map_or(fallback_line, |p| p.line());
                    catalog.skip(line, e.to_string());
                    continue;
                }
            };
            let line = record.position().map_or(fallback_line, |p| p.line());

            let raw: RawRecord = headers
                .iter()
                .zip(record.iter())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();

            match catalog.factory.create_movie(&raw) {
                Ok(movie) => catalog.movies.push(movie),
                Err(e) => catalog.skip(line, e.to_string()),
            }
        }

        if !catalog.skipped.is_empty() {
            warn!("{} movies could not be loaded", catalog.skipped.len());
        }
        info!(
            "Loaded {} movies, {} directors",
            catalog.movies.len(),
            catalog.factory.persons().count()
        );
        Ok(catalog)
    }

    fn skip(&mut self, line: u64, reason: String) {
        warn!("Skipping line {}: {}", line, reason);
        self.skipped.push(SkippedRecord { line, reason });
    }

    /// Add a movie built elsewhere
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Records rejected during the load
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn persons(&self) -> &PersonRegistry {
        self.factory.persons()
    }

    pub fn ratings(&self) -> &RatingRegistry {
        self.factory.ratings()
    }

    pub fn factory_mut(&mut self) -> &mut MovieFactory {
        &mut self.factory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "rotten_tomatoes_link,movie_title,content_rating,genre,directors,original_release_date,streaming_release_date,runtime,production_company,audience_rating,audience_count";

    #[test]
    fn test_load_skips_bad_records() {
        let data = format!(
            "{HEADER}\n\
             m/all_of_me,All of Me,PG,Comedy,Carl Reiner,1984-09-21,2016-10-30,93,HBO Video,67,14346\n\
             m/bad,Bad Genre,R,Musical,,,,,,,\n\
             m/scream,Scream,R,Horror,\"Wes Craven\",1996-12-20,2012-01-01,111,Dimension,79,20000\n"
        );

        let catalog = Catalog::load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped().len(), 1);
        assert_eq!(catalog.skipped()[0].line, 3);
        assert!(catalog.skipped()[0].reason.contains("unknown genre"));
        assert_eq!(catalog.persons().count(), 2);
    }

    #[test]
    fn test_quoted_director_lists() {
        let data = format!(
            "{HEADER}\n\
             m/x,Duo,PG,Drama,\"Joel Coen, Ethan Coen\",,,,,,\n\
             m/y,Solo,PG,Drama,Joel Coen,,,,,,\n"
        );

        let catalog = Catalog::load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.movies()[0].directors().len(), 2);
        assert_eq!(catalog.persons().count(), 2);
    }

    #[test]
    fn test_short_record_is_rejected_not_fatal() {
        let data = format!("{HEADER}\nm/x,Only a title\nm/y,Fine,G,Western,,,,,,,\n");

        let catalog = Catalog::load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped().len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "m/x,Short One,G,Comedy,,,,12,,,").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.movies()[0].is_short());
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
