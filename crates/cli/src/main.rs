mod console;
mod movie_menu;
mod survey_menu;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Console;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Explorer - movie catalog and survey analysis
#[derive(Parser)]
#[command(name = "explorer")]
#[command(about = "Interactive analysis of a movie review export and a survey export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a movie review CSV and open the movie menu
    Movies {
        /// Path to the movie review CSV
        #[arg(short, long, default_value = "reviews.csv")]
        file: PathBuf,

        /// Where the export entry writes its CSV
        #[arg(short, long, default_value = "export.csv")]
        export: PathBuf,
    },

    /// Load a semicolon separated survey export and open the survey menu
    Survey {
        /// Path to the survey CSV; asked for interactively when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they do not mix with the menus
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match cli.command {
        Commands::Movies { file, export } => handle_movies(file, export, &mut console)?,
        Commands::Survey { file } => handle_survey(file, &mut console)?,
    }

    Ok(())
}

/// Handle the 'movies' command
fn handle_movies<R: BufRead, W: Write>(
    file: PathBuf,
    export: PathBuf,
    console: &mut Console<R, W>,
) -> Result<()> {
    writeln!(console.out(), "Loading movies from {}...", file.display())?;
    let start = Instant::now();
    let catalog = Catalog::load_from_file(&file)
        .with_context(|| format!("Failed to load movie catalog from {}", file.display()))?;

    writeln!(
        console.out(),
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    )?;
    if !catalog.skipped().is_empty() {
        writeln!(
            console.out(),
            "{} Skipped {} invalid records",
            "⚠".yellow(),
            catalog.skipped().len()
        )?;
    }

    movie_menu::run(&catalog, &export, console)
}

/// Handle the 'survey' command
fn handle_survey<R: BufRead, W: Write>(
    file: Option<PathBuf>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let loaded = match file {
        Some(path) => survey_menu::try_load(&path, console.out())?,
        None => None,
    };
    // Fall back to asking when no file was given or it could not be read
    let records = match loaded {
        Some(records) => records,
        None => match survey_menu::choose_file(console)? {
            Some(records) => records,
            None => return Ok(()),
        },
    };

    survey_menu::run(&records, console)
}
