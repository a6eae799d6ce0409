//! CSV export of movies that do not have a relevant score yet.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::RelevantScoreFilter;
use anyhow::{Context, Result};
use catalog::Movie;
use catalog::factory::DATE_FORMAT;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One exported line
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Genre")]
    genre: &'static str,
    #[serde(rename = "Rating")]
    rating: &'a str,
    #[serde(rename = "Directors")]
    directors: String,
    #[serde(rename = "Release Date")]
    release_date: String,
    #[serde(rename = "Length")]
    length: Option<u32>,
    #[serde(rename = "Company")]
    company: Option<&'a str>,
    #[serde(rename = "Score")]
    score: Option<u32>,
    #[serde(rename = "Votes")]
    votes: Option<u64>,
}

impl<'a> From<&'a Movie> for ExportRow<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            title: movie.title(),
            genre: movie.genre().name(),
            rating: movie.rating().code(),
            directors: movie
                .directors()
                .iter()
                .map(|p| p.full_name())
                .collect::<Vec<_>>()
                .join(", "),
            release_date: movie
                .release_date()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            length: movie.length(),
            company: movie.company(),
            score: movie.score(),
            votes: movie.vote_count(),
        }
    }
}

/// Movies without a relevant score, sorted by title ignoring case
pub fn without_relevant_score(movies: &[Movie]) -> Result<Vec<&Movie>> {
    let mut selected = FilterPipeline::new()
        .add_filter(RelevantScoreFilter::not_relevant())
        .apply(movies)?;
    selected.sort_by_cached_key(|m| m.title().to_lowercase());
    Ok(selected)
}

/// Write `movies` as CSV, header first
pub fn write_movies<W: Write>(movies: &[&Movie], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if movies.is_empty() {
        // serialize() only emits the header together with the first row
        csv_writer.write_record([
            "Title",
            "Genre",
            "Rating",
            "Directors",
            "Release Date",
            "Length",
            "Company",
            "Score",
            "Votes",
        ])?;
    }
    for movie in movies {
        csv_writer.serialize(ExportRow::from(*movie))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export every movie without a relevant score to `path`.
///
/// Returns the number of exported movies. Nothing is written when there is
/// nothing to export.
pub fn export_without_relevant_score(movies: &[Movie], path: &Path) -> Result<usize> {
    let selected = without_relevant_score(movies)?;
    if selected.is_empty() {
        return Ok(0);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    write_movies(&selected, file)
        .with_context(|| format!("Failed to write export file {}", path.display()))?;

    info!("Exported {} movies to {}", selected.len(), path.display());
    Ok(selected.len())
}
