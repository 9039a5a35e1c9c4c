//! HTML content extraction
//!
//! This module parses a fetched page into a content tree and derives the two
//! views the rest of the pipeline consumes: the serialized tree persisted
//! verbatim as `index.html`, and the flattened text lines written to the CSV
//! and fed to the analytics operations. Parsing is lenient; malformed markup
//! is repaired, never rejected.

use crate::scrape::fetcher::FetchedDocument;
use scraper::{Html, Selector};

/// Content extracted from a single parsed page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Serialized form of the parsed tree, persisted verbatim
    pub html: String,

    /// Trimmed, non-empty text lines in document order
    pub text_lines: Vec<String>,

    /// Verbatim `src` attribute values in encounter order, duplicates kept
    pub image_refs: Vec<String>,
}

impl PageContent {
    /// The extracted text as a single newline-joined string
    pub fn text(&self) -> String {
        self.text_lines.join("\n")
    }
}

/// Extracts text lines and image references from a fetched page
///
/// The body bytes are decoded as UTF-8 with replacement and parsed with the
/// HTML5 parsing algorithm. Text extraction walks every text node of the
/// tree in document order, splits on embedded newlines, trims each line, and
/// drops the empties. Image references are collected verbatim; resolving
/// them against the page URL is the downloader's concern.
///
/// # Arguments
///
/// * `doc` - The fetched page
///
/// # Returns
///
/// The extracted content; extraction itself cannot fail
pub fn extract(doc: &FetchedDocument) -> PageContent {
    let body = String::from_utf8_lossy(&doc.body);
    let document = Html::parse_document(&body);

    let html = document.root_element().html();
    let text_lines = extract_text_lines(&document);
    let image_refs = extract_image_refs(&document);

    tracing::debug!(
        "Extracted {} text lines and {} image refs from {}",
        text_lines.len(),
        image_refs.len(),
        doc.url
    );

    PageContent {
        html,
        text_lines,
        image_refs,
    }
}

/// Flattens the document into trimmed, non-empty text lines
fn extract_text_lines(document: &Html) -> Vec<String> {
    document
        .root_element()
        .text()
        .flat_map(|fragment| fragment.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collects the `src` attribute of every image element, verbatim
fn extract_image_refs(document: &Html) -> Vec<String> {
    let mut refs = Vec::new();

    if let Ok(img_selector) = Selector::parse("img[src]") {
        for element in document.select(&img_selector) {
            if let Some(src) = element.value().attr("src") {
                refs.push(src.to_string());
            }
        }
    }

    refs
}
