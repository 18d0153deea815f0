//! shiori - clean scraped web-novel chapters
//!
//! Strips aggregator advertisements from chapter text, cleans chapter
//! headers and prints novel catalogs.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shiori_clean::chapter::{clean_chapter_with, clean_header};
use shiori_core::select::select_novel;
use shiori_core::table::render_table;
use shiori_core::{AppConfig, Catalog, ShioriError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shiori",
    version,
    about = "Clean scraped web-novel chapters of aggregator advertisements"
)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove advertisements from chapter text
    Clean {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Treat the whole text as one fragment instead of going line by line
        #[arg(long)]
        whole: bool,
    },

    /// List the lines that look like advertisements
    Check {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Clean a chapter title from two header strings
    Header {
        first: String,
        second: String,
    },

    /// Print a catalog as a table
    Catalog {
        /// Catalog JSON file
        input: PathBuf,

        /// Prompt for a novel after printing
        #[arg(long)]
        select: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "shiori=debug" } else { "shiori=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ShioriError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Commands::Clean { input, whole } => {
            let text = read_input(input.as_deref())?;
            let filter = config.ad_filter()?;
            let cleaned = if whole {
                filter.remove_advertisement(&text)
            } else {
                clean_chapter_with(&filter, &text)
            };
            println!("{cleaned}");
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let filter = config.ad_filter()?;
            let mut flagged = 0usize;
            for (i, line) in text.lines().enumerate() {
                if filter.is_advertisement(line) {
                    println!("{}: {line}", i + 1);
                    flagged += 1;
                }
            }
            tracing::info!(flagged, "Checked chapter text");
        }
        Commands::Header { first, second } => {
            println!("{}", clean_header(&first, &second));
        }
        Commands::Catalog { input, select } => {
            let catalog = Catalog::load(&input)?;
            print!("{}", render_table(&catalog, config.catalog.show_index));
            if select {
                let stdin = io::stdin();
                select_novel(&catalog, stdin.lock(), io::stdout())?;
            }
        }
    }
    Ok(())
}

/// Read UTF-8 text from a file, or stdin when no path is given. Invalid
/// UTF-8 surfaces as an `InvalidData` IO error.
fn read_input(path: Option<&Path>) -> Result<String, ShioriError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text)
}
