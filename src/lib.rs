//! Pagesift: a single-page scraper with text analytics
//!
//! This crate fetches one web page, extracts its visible text and embedded
//! image references, persists both to a fixed flat-file layout, downloads the
//! referenced images with per-image status reporting, and offers two analytics
//! over the extracted text: stopword-filtered word frequencies and an
//! extractive summary ranked by latent-semantic salience.

pub mod analysis;
pub mod config;
pub mod persist;
pub mod scrape;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pagesift operations
#[derive(Debug, Error)]
pub enum PagesiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors that abort a page fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Failed to retrieve {url}: status code {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to retrieve {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
}

/// Errors that abort persisting a scraped page
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteHtml {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteCsv { path: PathBuf, source: csv::Error },
}

/// Errors for a single analytics request
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Requested count must be greater than zero")]
    InvalidCount,

    #[error("No sentences found in input text")]
    EmptyText,
}

/// Result type alias for pagesift operations
pub type Result<T> = std::result::Result<T, PagesiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for analytics operations
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

// Re-export commonly used types
pub use analysis::{summarize, top_words, WordCount};
pub use config::Config;
pub use persist::PersistedArtifact;
pub use scrape::{scrape, ImageDownloadReport, ImageOutcome, PageContent, ScrapeOutcome};
pub use url::resolve_image_ref;
