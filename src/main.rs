//! Pagesift main entry point
//!
//! This is the command-line interface for the pagesift scraper.

use clap::Parser;
use pagesift::config::{load_config_with_hash, Config};
use pagesift::{summarize, top_words};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagesift: a single-page scraper with text analytics
///
/// Pagesift fetches one web page, saves its serialized document and text
/// content under the destination folder, downloads the referenced images,
/// and optionally reports word frequencies or an extractive summary of the
/// page text.
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(version = "1.0.0")]
#[command(about = "Scrape a web page and analyze its text", long_about = None)]
struct Cli {
    /// URL of the page to scrape
    #[arg(value_name = "URL")]
    url: String,

    /// Folder the page content is saved into
    #[arg(value_name = "DEST")]
    dest: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print the most frequent words of the page text (--top-words=N to
    /// override the configured count)
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    top_words: Option<Option<usize>>,

    /// Print an extractive summary (--summarize=K to override the configured
    /// sentence count)
    #[arg(long, value_name = "K", num_args = 0..=1, require_equals = true)]
    summarize: Option<Option<usize>>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration if one was given, otherwise use defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    // Run the scrape
    let outcome = match pagesift::scrape(&config, &cli.url, &cli.dest).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    println!("✓ Content saved in: {}", outcome.artifact.root.display());
    for entry in &outcome.images {
        println!("{}", entry);
    }

    // Optional analytics over the extracted text
    if let Some(n) = resolve_count(cli.top_words, config.analysis.top_words) {
        let ranking = top_words(&outcome.text, n)?;
        println!("\nTop words:");
        for entry in &ranking {
            println!("{}: {}", entry.word, entry.count);
        }
    }

    if let Some(k) = resolve_count(cli.summarize, config.analysis.summary_sentences) {
        let summary = summarize(&outcome.text, k)?;
        println!("\nSummary:\n{}", summary);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagesift=info,warn"),
            1 => EnvFilter::new("pagesift=debug,info"),
            2 => EnvFilter::new("pagesift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves an optional-value flag against its configured default
///
/// `--top-words` with no value means "use the configured count"; absent
/// means the analysis was not requested at all.
fn resolve_count(arg: Option<Option<usize>>, default: usize) -> Option<usize> {
    match arg {
        None => None,
        Some(None) => Some(default),
        Some(Some(n)) => Some(n),
    }
}
