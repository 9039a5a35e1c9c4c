//! Scraping pipeline for a single page
//!
//! This module contains the scrape pipeline end to end:
//! - HTTP fetch of the page
//! - text and image-reference extraction from the parsed tree
//! - persistence of the serialized document and text lines
//! - per-image downloads with status reporting

mod extractor;
mod fetcher;
mod images;

pub use extractor::{extract, PageContent};
pub use fetcher::{build_http_client, fetch, FetchedDocument};
pub use images::{download_all, ImageDownloadReport, ImageOutcome};

use crate::config::Config;
use crate::persist::{persist, PersistedArtifact};
use crate::{FetchError, PagesiftError};
use std::path::Path;
use url::Url;

/// Everything a completed scrape hands back to the caller
#[derive(Debug)]
pub struct ScrapeOutcome {
    /// The extracted text, newline-joined
    pub text: String,

    /// Per-image status lines, in resolution order
    pub images: ImageDownloadReport,

    /// Paths of the persisted files
    pub artifact: PersistedArtifact,
}

/// Scrapes one page into the destination folder
///
/// Runs the full pipeline: fetch, extract, persist, then download each
/// referenced image in order. A fetch or persistence failure aborts the
/// scrape; image failures are collected in the report instead.
///
/// # Arguments
///
/// * `config` - Client configuration for the HTTP requests
/// * `url` - The page URL to scrape
/// * `dest` - Destination folder for the persisted artifacts
///
/// # Returns
///
/// * `Ok(ScrapeOutcome)` - Extracted text, image report, artifact paths
/// * `Err(PagesiftError)` - The URL was invalid or fetch/persistence failed
pub async fn scrape(
    config: &Config,
    url: &str,
    dest: &Path,
) -> Result<ScrapeOutcome, PagesiftError> {
    let page_url = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let client = build_http_client(&config.client)?;

    tracing::info!("Scraping {} into {}", page_url, dest.display());

    let document = fetch(&client, &page_url).await?;
    let content = extract(&document);
    let artifact = persist(dest, &content.html, &content.text_lines)?;
    let report = download_all(&client, &page_url, &content.image_refs, &artifact.images_dir).await;

    let saved = report.iter().filter(|outcome| outcome.is_saved()).count();
    tracing::info!(
        "Scrape complete: {} text lines, {}/{} images saved",
        content.text_lines.len(),
        saved,
        report.len()
    );

    Ok(ScrapeOutcome {
        text: content.text(),
        images: report,
        artifact,
    })
}
