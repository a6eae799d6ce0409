//! Interactive menu over a loaded movie catalog.

use crate::console::Console;
use analysis::{export, reports};
use anyhow::{anyhow, Result};
use catalog::Catalog;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

const RULE_WIDTH: usize = 40;

/// The entries of the movie menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieChoice {
    Count,
    PerGenre,
    PersonCount,
    HighestScoring,
    ActiveDirectors,
    ShortestLongest,
    ScaryHorror,
    ScoreDistribution,
    Export,
    Stop,
    ReleasedWindow,
}

impl FromStr for MovieChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MovieChoice::Count),
            "2" => Ok(MovieChoice::PerGenre),
            "3" => Ok(MovieChoice::PersonCount),
            "4" => Ok(MovieChoice::HighestScoring),
            "5" => Ok(MovieChoice::ActiveDirectors),
            "6" => Ok(MovieChoice::ShortestLongest),
            "7" => Ok(MovieChoice::ScaryHorror),
            "8" => Ok(MovieChoice::ScoreDistribution),
            "9" => Ok(MovieChoice::Export),
            "10" => Ok(MovieChoice::Stop),
            "11" => Ok(MovieChoice::ReleasedWindow),
            other => Err(anyhow!("Invalid choice: {}", other)),
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{}", "MOVIE ANALYSIS MENU".bold().blue())?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "1) Print number of movies")?;
    writeln!(out, "2) Print movies per genre")?;
    writeln!(out, "3) Count Person objects")?;
    writeln!(out, "4) Print highest scoring movie(s)")?;
    writeln!(out, "5) Print most active director(s)")?;
    writeln!(out, "6) Print shortest and longest movie(s)")?;
    writeln!(out, "7) Print scary horror movies")?;
    writeln!(out, "8) Print score distribution")?;
    writeln!(out, "9) Export movies without relevant score to CSV")?;
    writeln!(out, "10) Stop program")?;
    writeln!(
        out,
        "11) Print all movies between 1/4/2000 and 1/4/2005; shorter than 120 minutes"
    )?;
    writeln!(out, "{}", "=".repeat(50))?;
    Ok(())
}

/// Run the menu until the user stops or input ends
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    export_path: &Path,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        print_menu(console.out())?;
        let Some(input) = console.prompt("Enter your choice (1-11): ")? else {
            return Ok(());
        };

        match input.parse::<MovieChoice>() {
            Ok(MovieChoice::Stop) => {
                writeln!(console.out(), "Goodbye!")?;
                return Ok(());
            }
            Ok(choice) => handle(choice, catalog, export_path, console.out())?,
            Err(_) => writeln!(
                console.out(),
                "{} Invalid choice. Please enter a number between 1 and 11.",
                "⚠".yellow()
            )?,
        }
    }
}

/// Execute a single menu entry
pub fn handle<W: Write>(
    choice: MovieChoice,
    catalog: &Catalog,
    export_path: &Path,
    out: &mut W,
) -> Result<()> {
    let movies = catalog.movies();
    let rule = "-".repeat(RULE_WIDTH);

    match choice {
        MovieChoice::Count => {
            writeln!(out, "\nNumber of movies: {}", movies.len())?;
        }
        MovieChoice::PerGenre => {
            writeln!(out, "\nMovies per genre (sorted by count):")?;
            writeln!(out, "{}", rule)?;
            for (genre, count) in reports::movies_per_genre(movies) {
                writeln!(out, "{:25} : {}", genre.name(), count)?;
            }
        }
        MovieChoice::PersonCount => {
            writeln!(
                out,
                "\nNumber of Person objects created: {}",
                catalog.persons().count()
            )?;
        }
        MovieChoice::HighestScoring => match reports::highest_scoring(movies)? {
            Some(top) => {
                writeln!(out, "\nHighest score: {}%", top.score)?;
                writeln!(out, "Number of movies with this score: {}", top.movies.len())?;
                writeln!(out, "{}", rule)?;
                for movie in top.movies {
                    writeln!(
                        out,
                        "{} (Score: {}%, Votes: {})",
                        movie.title(),
                        top.score,
                        movie.vote_count().unwrap_or(0)
                    )?;
                }
            }
            None => writeln!(out, "\nNo movies with relevant scores found.")?,
        },
        MovieChoice::ActiveDirectors => match reports::most_active_directors(movies) {
            Some(active) => {
                writeln!(
                    out,
                    "\nMost active director(s) directed {} films:",
                    active.movie_count
                )?;
                writeln!(out, "{}", rule)?;
                for name in active.names {
                    writeln!(out, "{}", name)?;
                }
            }
            None => writeln!(out, "\nNo directors found.")?,
        },
        MovieChoice::ShortestLongest => match reports::shortest_and_longest(movies) {
            Some(extremes) => {
                writeln!(out, "\nSHORTEST movies ({} minutes):", extremes.shortest_length)?;
                writeln!(out, "{}", rule)?;
                for movie in extremes.shortest {
                    writeln!(out, "{} ({} min)", movie.title(), extremes.shortest_length)?;
                }
                writeln!(out, "\nLONGEST movies ({} minutes):", extremes.longest_length)?;
                writeln!(out, "{}", rule)?;
                for movie in extremes.longest {
                    writeln!(out, "{} ({} min)", movie.title(), extremes.longest_length)?;
                }
            }
            None => writeln!(out, "\nNo movies with length information found.")?,
        },
        MovieChoice::ScaryHorror => {
            let report = reports::scary_horror(movies)?;
            if report.horror_count == 0 {
                writeln!(out, "\nNo horror movies found.")?;
            } else {
                writeln!(
                    out,
                    "\nScary horror movies: {} out of {} horror movies",
                    report.scary.len(),
                    report.horror_count
                )?;
                writeln!(out, "{}", rule)?;
                for movie in report.scary {
                    writeln!(out, "{} (Rating: {})", movie.title(), movie.rating().code())?;
                }
            }
        }
        MovieChoice::ScoreDistribution => {
            writeln!(out, "\nScore distribution (0-100%):")?;
            writeln!(out, "{}", rule)?;
            for (score, count) in reports::score_distribution(movies).iter().enumerate() {
                writeln!(out, "{:3}%: {}", score, count)?;
            }
        }
        MovieChoice::Export => {
            match export::export_without_relevant_score(movies, export_path) {
                Ok(0) => writeln!(out, "\nNo movies without relevant score found.")?,
                Ok(count) => writeln!(
                    out,
                    "\n{} Exported {} movies to: {}",
                    "✓".green(),
                    count,
                    export_path.display()
                )?,
                // A failed export is reported, the menu keeps running
                Err(e) => writeln!(out, "\n{} {:#}", "Error exporting:".red(), e)?,
            }
        }
        MovieChoice::ReleasedWindow => {
            let from = NaiveDate::from_ymd_opt(2000, 4, 1)
                .ok_or_else(|| anyhow!("invalid window start"))?;
            let to = NaiveDate::from_ymd_opt(2005, 4, 1)
                .ok_or_else(|| anyhow!("invalid window end"))?;

            writeln!(
                out,
                "\n--- Movies released between 1/4/2000 and 1/4/2005 shorter than 120 minutes ---"
            )?;
            let selected = reports::released_between(movies, from, to, 120)?;
            if selected.is_empty() {
                writeln!(out, "No movies found that match these criteria.")?;
            }
            for movie in selected {
                writeln!(
                    out,
                    "- {} ({} min, {})",
                    movie.title(),
                    movie.length().unwrap_or_default(),
                    movie
                        .release_date()
                        .map(|d| d.to_string())
                        .unwrap_or_default()
                )?;
            }
        }
        MovieChoice::Stop => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REVIEWS: &str = "\
rotten_tomatoes_link,movie_title,content_rating,genre,directors,original_release_date,streaming_release_date,runtime,production_company,audience_rating,audience_count
m/all_of_me,All of Me,PG,Comedy,Carl Reiner,1984-09-21,2016-10-30,93,HBO Video,67,14346
m/ring,The Ring,PG-13,Horror,Gore Verbinski,2002-10-18,2003-03-04,115,DreamWorks,72,500000
m/obscure,Obscure,NR,Drama,Carl Reiner,,,,,,
";

    fn run_script(script: &str) -> String {
        colored::control::set_override(false);
        let catalog = Catalog::load_from_reader(REVIEWS.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());

        run(&catalog, &dir.path().join("export.csv"), &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("1".parse::<MovieChoice>().unwrap(), MovieChoice::Count);
        assert_eq!(" 11 ".parse::<MovieChoice>().unwrap(), MovieChoice::ReleasedWindow);
        assert!("12".parse::<MovieChoice>().is_err());
        assert!("stop".parse::<MovieChoice>().is_err());
    }

    #[test]
    fn test_menu_session() {
        let output = run_script("1\n3\n5\n7\n11\n10\n");

        assert!(output.contains("Number of movies: 3"));
        assert!(output.contains("Number of Person objects created: 2"));
        assert!(output.contains("Most active director(s) directed 2 films:"));
        assert!(output.contains("Scary horror movies: 1 out of 1 horror movies"));
        assert!(output.contains("- The Ring (115 min, 2002-10-18)"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_and_end_of_input() {
        let output = run_script("42\n");
        assert!(output.contains("Invalid choice"));
    }

    #[test]
    fn test_export_choice() {
        let output = run_script("9\n10\n");
        assert!(output.contains("Exported 1 movies to:"));
    }
}
