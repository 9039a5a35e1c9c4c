//! Flat-file persistence for scraped pages
//!
//! This module writes the two artifacts of a scrape under the destination
//! folder: the serialized parse as `index.html` and the extracted text lines
//! as `all_text_content.csv`. Downloaded images land in an `images/`
//! subfolder managed by the image downloader.
//!
//! Folder creation is idempotent and repeat scrapes into the same folder
//! overwrite both files. Any directory or write failure here is fatal to the
//! scrape; files already written before the failure are left in place.

use crate::PersistError;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the serialized document file
pub const HTML_FILE_NAME: &str = "index.html";

/// Name of the text-content CSV file
pub const CSV_FILE_NAME: &str = "all_text_content.csv";

/// Name of the image subfolder
pub const IMAGES_DIR_NAME: &str = "images";

/// Paths of the artifacts written for one scraped page
#[derive(Debug, Clone)]
pub struct PersistedArtifact {
    /// The destination folder
    pub root: PathBuf,

    /// Path of the serialized document
    pub html_path: PathBuf,

    /// Path of the text-content CSV
    pub csv_path: PathBuf,

    /// Folder image downloads are written into; created lazily on the
    /// first successful download, so it may not exist
    pub images_dir: PathBuf,
}

/// Writes the serialized document and text lines under the given folder
///
/// `index.html` receives the serialized tree verbatim. The CSV receives a
/// single `Content` header cell followed by exactly one record per text
/// line, in order; values get standard CSV quoting and no other transform.
///
/// # Arguments
///
/// * `root` - Destination folder, created if absent
/// * `html` - Serialized form of the parsed document
/// * `text_lines` - Extracted text lines in document order
///
/// # Returns
///
/// * `Ok(PersistedArtifact)` - Paths of the written files
/// * `Err(PersistError)` - Directory creation or a write failed
pub fn persist(
    root: &Path,
    html: &str,
    text_lines: &[String],
) -> Result<PersistedArtifact, PersistError> {
    fs::create_dir_all(root).map_err(|source| PersistError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;

    let html_path = root.join(HTML_FILE_NAME);
    fs::write(&html_path, html).map_err(|source| PersistError::WriteHtml {
        path: html_path.clone(),
        source,
    })?;

    let csv_path = root.join(CSV_FILE_NAME);
    write_text_csv(&csv_path, text_lines)?;

    tracing::info!(
        "Persisted {} and {} ({} text lines)",
        html_path.display(),
        csv_path.display(),
        text_lines.len()
    );

    Ok(PersistedArtifact {
        root: root.to_path_buf(),
        html_path,
        csv_path,
        images_dir: root.join(IMAGES_DIR_NAME),
    })
}

/// Writes the text lines as a single-column CSV with a `Content` header
fn write_text_csv(path: &Path, text_lines: &[String]) -> Result<(), PersistError> {
    let to_csv_err = |source| PersistError::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_csv_err)?;

    writer.write_record(["Content"]).map_err(to_csv_err)?;
    for line in text_lines {
        writer.write_record([line]).map_err(to_csv_err)?;
    }

    writer.flush().map_err(|source| PersistError::WriteCsv {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    Ok(())
}
