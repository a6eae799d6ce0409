//! Interactive menu over a survey export.

use crate::console::Console;
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use survey::{export, stats, SurveyError, SurveyRecord};

/// Typed at any prompt to leave the program
const STOP: &str = "stop";

/// The entries of the survey menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyChoice {
    LineCount,
    Contents,
    UniqueDates,
    NumberStats,
    ColorStats,
    Places,
    Participation,
    IdStats,
    QWordStats,
    SaveFiltered,
}

impl FromStr for SurveyChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(SurveyChoice::LineCount),
            "2" => Ok(SurveyChoice::Contents),
            "3" => Ok(SurveyChoice::UniqueDates),
            "4" => Ok(SurveyChoice::NumberStats),
            "5" => Ok(SurveyChoice::ColorStats),
            "6" => Ok(SurveyChoice::Places),
            "7" => Ok(SurveyChoice::Participation),
            "8" => Ok(SurveyChoice::IdStats),
            "9" => Ok(SurveyChoice::QWordStats),
            "10" => Ok(SurveyChoice::SaveFiltered),
            other => Err(anyhow!("Invalid choice: {}", other)),
        }
    }
}

/// Ask for a survey file until one loads.
///
/// Returns `None` when the user types STOP or input ends.
pub fn choose_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Vec<SurveyRecord>>> {
    loop {
        let Some(path) = console.prompt("Enter path to CSV file (or type STOP to exit): ")? else {
            return Ok(None);
        };
        if path.eq_ignore_ascii_case(STOP) {
            writeln!(console.out(), "Program stopped by user.")?;
            return Ok(None);
        }
        if let Some(records) = try_load(Path::new(&path), console.out())? {
            return Ok(Some(records));
        }
    }
}

/// Load `path`, reporting the outcome; `None` if it could not be read
pub fn try_load<W: Write>(path: &Path, out: &mut W) -> Result<Option<Vec<SurveyRecord>>> {
    match survey::load_survey(path) {
        Ok(records) => {
            writeln!(
                out,
                "{} File successfully loaded: {} records found.",
                "✓".green(),
                records.len()
            )?;
            Ok(Some(records))
        }
        Err(SurveyError::FileNotFound { .. }) => {
            writeln!(out, "{} File not found. Please try again.", "⚠".yellow())?;
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "{} Error reading file: {}", "⚠".yellow(), e)?;
            Ok(None)
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "========= MENU =========".bold().blue())?;
    writeln!(out, "1) Line count")?;
    writeln!(out, "2) Show contents")?;
    writeln!(out, "3) Unique dates")?;
    writeln!(out, "4) Number stats")?;
    writeln!(out, "5) Color stats")?;
    writeln!(out, "6) Places")?;
    writeln!(out, "7) Participation stats")?;
    writeln!(out, "8) ID stats")?;
    writeln!(out, "9) Q-word stats")?;
    writeln!(out, "10) Save filtered")?;
    writeln!(out, "Type STOP to exit.")?;
    Ok(())
}

/// Run the menu until the user types STOP or input ends
pub fn run<R: BufRead, W: Write>(
    records: &[SurveyRecord],
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        print_menu(console.out())?;
        let Some(input) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };
        if input.eq_ignore_ascii_case(STOP) {
            writeln!(console.out(), "Program stopped.")?;
            return Ok(());
        }

        match input.parse::<SurveyChoice>() {
            Ok(SurveyChoice::SaveFiltered) => save_filtered(records, console)?,
            Ok(choice) => handle(choice, records, console.out())?,
            Err(_) => writeln!(
                console.out(),
                "{} Invalid option. Please choose a number between 1-10 or type STOP.",
                "⚠".yellow()
            )?,
        }
    }
}

fn save_filtered<R: BufRead, W: Write>(
    records: &[SurveyRecord],
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(filename) = console.prompt("Enter name of output file (e.g. output.csv): ")? else {
        return Ok(());
    };
    let path = PathBuf::from(&filename);
    match export::save_filtered(records, &path) {
        Ok(saved) => writeln!(
            console.out(),
            "{} Saved {} valid lines to {}",
            "✓".green(),
            saved,
            filename
        )?,
        Err(e) => writeln!(console.out(), "{} Error saving file: {}", "⚠".yellow(), e)?,
    }
    Ok(())
}

/// Execute a menu entry that needs no further input
pub fn handle<W: Write>(choice: SurveyChoice, records: &[SurveyRecord], out: &mut W) -> Result<()> {
    match choice {
        SurveyChoice::LineCount => {
            writeln!(out, "There are {} lines in the file.", stats::line_count(records))?;
        }
        SurveyChoice::Contents => {
            for (i, record) in records.iter().enumerate() {
                let line = i + 1;
                match stats::row_description(record) {
                    Some(text) => writeln!(out, "Line {}, {}", line, text)?,
                    None => writeln!(
                        out,
                        "{} Line {} is incomplete and was skipped.",
                        "⚠".yellow(),
                        line
                    )?,
                }
            }
        }
        SurveyChoice::UniqueDates => {
            writeln!(
                out,
                "Unique submission dates: {}",
                stats::unique_dates(records).join(", ")
            )?;
        }
        SurveyChoice::NumberStats => match stats::number_stats(records) {
            Some(numbers) => {
                writeln!(out, "Average: {}", numbers.average)?;
                writeln!(out, "Lowest: {}", numbers.lowest)?;
                writeln!(out, "Highest: {}", numbers.highest)?;
            }
            None => writeln!(out, "{} No valid numbers found in the file.", "⚠".yellow())?,
        },
        SurveyChoice::ColorStats => {
            let colors = stats::color_stats(records);
            for (color, count) in &colors.counts {
                writeln!(out, "{}: {}", color, count)?;
            }
            if let Some(color) = colors.most_common {
                writeln!(out, "The most common color is: {}", color)?;
            }
        }
        SurveyChoice::Places => {
            writeln!(out, "Unique places: {}", stats::unique_places(records).join(", "))?;
        }
        SurveyChoice::Participation => {
            let p = stats::participation(records);
            writeln!(
                out,
                "There are {} submissions: {} complete and {} incomplete.",
                p.total, p.complete, p.incomplete
            )?;
        }
        SurveyChoice::IdStats => match stats::missing_ids(records) {
            None => writeln!(out, "{} No valid IDs found.", "⚠".yellow())?,
            Some(missing) if missing.is_empty() => {
                writeln!(out, "All IDs are consecutive and valid.")?
            }
            Some(missing) => {
                let ids: Vec<String> = missing.iter().map(u64::to_string).collect();
                writeln!(out, "Missing ID values: {}", ids.join(", "))?;
            }
        },
        SurveyChoice::QWordStats => {
            let q = stats::q_word_stats(records);
            writeln!(out, "{} words start with 'Q'", q.starts_with_q)?;
            writeln!(out, "{} words contain 'Q' but not at the start", q.contains_q)?;
            writeln!(out, "{} words contain no 'Q'", q.without_q)?;
        }
        SurveyChoice::SaveFiltered => {
            return Err(anyhow!("saving needs a file name prompt"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn records() -> Vec<SurveyRecord> {
        survey::parse_survey(
            "id;start;sent;number;place;color;word\n\
             1;2025-11-03 10:00;2025-11-03 10:05;3;gent;red;quiz\n\
             3;2025-11-04 11:00;;x;Gent;RED;tree\n\
             4;2025-11-04 12:00\n"
                .as_bytes(),
        )
        .unwrap()
    }

    fn run_script(script: &str) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run(&records(), &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("10".parse::<SurveyChoice>().unwrap(), SurveyChoice::SaveFiltered);
        assert!("0".parse::<SurveyChoice>().is_err());
    }

    #[test]
    fn test_menu_session() {
        let output = run_script("1\n2\n7\n8\n5\nStop\n");

        assert!(output.contains("There are 3 lines in the file."));
        assert!(output.contains("Line 1, started on 2025-11-03 10:00, sent on 2025-11-03 10:05, 3, gent, red, quiz"));
        assert!(output.contains("Line 3 is incomplete and was skipped."));
        assert!(output.contains("There are 3 submissions: 1 complete and 2 incomplete."));
        assert!(output.contains("Missing ID values: 2"));
        assert!(output.contains("The most common color is: RED"));
        assert!(output.ends_with("Program stopped.\n"));
    }

    #[test]
    fn test_save_filtered_prompts_for_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");
        let output = run_script(&format!("10\n{}\nSTOP\n", target.display()));

        assert!(output.contains("Saved 1 valid lines"));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "1;3;red;quiz\n");
    }

    #[test]
    fn test_choose_file_retries_until_stop() {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new("missing.csv\nSTOP\n".to_string()), Vec::new());

        let loaded = choose_file(&mut console).unwrap();
        assert!(loaded.is_none());
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("File not found. Please try again."));
        assert!(output.contains("Program stopped by user."));
    }
}
