//! Image download batch
//!
//! Each image reference is resolved against the page URL and retrieved with
//! its own request; the body is streamed to `<images_dir>/<basename>`. The
//! batch is resilient by contract: one image's failure becomes a report
//! entry and never stops the remaining downloads. Unresolvable references
//! are dropped silently before the batch, so the report holds exactly one
//! entry per resolved reference, in resolution order.
//!
//! Two references sharing a final path segment overwrite each other; the
//! last write wins.

use crate::url::{file_name, resolve_image_ref};
use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Outcome of a single image download attempt
#[derive(Debug, Clone)]
pub enum ImageOutcome {
    /// The image was retrieved and written to disk
    Saved {
        /// The resolved image URL
        url: String,
        /// Where the image was written
        path: PathBuf,
    },

    /// The image could not be retrieved or written
    Failed {
        /// The resolved image URL
        url: String,
        /// Why the attempt failed
        reason: String,
    },
}

impl ImageOutcome {
    /// Whether this attempt produced a file on disk
    pub fn is_saved(&self) -> bool {
        matches!(self, ImageOutcome::Saved { .. })
    }

    /// The resolved URL this outcome is about
    pub fn url(&self) -> &str {
        match self {
            ImageOutcome::Saved { url, .. } | ImageOutcome::Failed { url, .. } => url,
        }
    }
}

impl fmt::Display for ImageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageOutcome::Saved { path, .. } => {
                write!(f, "Downloaded: {}", path.display())
            }
            ImageOutcome::Failed { url, reason } => {
                write!(f, "Failed to download image {}: {}", url, reason)
            }
        }
    }
}

/// Per-image status lines for one scrape, in resolution order
pub type ImageDownloadReport = Vec<ImageOutcome>;

/// Downloads every resolvable image reference into the images folder
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - The URL of the scraped page, for resolving relative refs
/// * `refs` - Verbatim image references in document order
/// * `images_dir` - Destination folder, created on first need
///
/// # Returns
///
/// One [`ImageOutcome`] per resolved reference, in order
pub async fn download_all(
    client: &Client,
    base: &Url,
    refs: &[String],
    images_dir: &Path,
) -> ImageDownloadReport {
    let mut report = Vec::new();

    for raw in refs {
        let Some(resolved) = resolve_image_ref(base, raw) else {
            tracing::debug!("Skipping unresolvable image ref '{}'", raw);
            continue;
        };

        let outcome = download_one(client, &resolved, images_dir).await;
        match &outcome {
            ImageOutcome::Saved { path, .. } => {
                tracing::debug!("Saved {} to {}", resolved, path.display());
            }
            ImageOutcome::Failed { reason, .. } => {
                tracing::warn!("Image {} failed: {}", resolved, reason);
            }
        }
        report.push(outcome);
    }

    report
}

/// Retrieves one image and streams it to disk
async fn download_one(client: &Client, url: &Url, images_dir: &Path) -> ImageOutcome {
    let failed = |reason: String| ImageOutcome::Failed {
        url: url.to_string(),
        reason,
    };

    let Some(name) = file_name(url) else {
        return failed("no file name in URL path".to_string());
    };

    if let Err(e) = tokio::fs::create_dir_all(images_dir).await {
        return failed(format!("cannot create image folder: {}", e));
    }

    let mut response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return failed(e.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        return failed(format!("status code {}", status.as_u16()));
    }

    let path = images_dir.join(&name);
    let mut file = match tokio::fs::File::create(&path).await {
        Ok(file) => file,
        Err(e) => return failed(format!("cannot create {}: {}", path.display(), e)),
    };

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                if let Err(e) = file.write_all(&chunk).await {
                    return failed(format!("write failed: {}", e));
                }
            }
            Ok(None) => break,
            Err(e) => return failed(e.to_string()),
        }
    }

    if let Err(e) = file.flush().await {
        return failed(format!("write failed: {}", e));
    }

    ImageOutcome::Saved {
        url: url.to_string(),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_outcome_display() {
        let outcome = ImageOutcome::Saved {
            url: "https://example.com/pic.png".to_string(),
            path: PathBuf::from("/tmp/images/pic.png"),
        };
        assert_eq!(outcome.to_string(), "Downloaded: /tmp/images/pic.png");
        assert!(outcome.is_saved());
    }

    #[test]
    fn test_failed_outcome_display() {
        let outcome = ImageOutcome::Failed {
            url: "https://example.com/pic.png".to_string(),
            reason: "status code 404".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Failed to download image https://example.com/pic.png: status code 404"
        );
        assert!(!outcome.is_saved());
    }

    #[test]
    fn test_outcome_url_accessor() {
        let outcome = ImageOutcome::Failed {
            url: "https://example.com/x.gif".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(outcome.url(), "https://example.com/x.gif");
    }

    // Download behavior against live responses is covered by the wiremock
    // integration tests in tests/scrape_tests.rs.
}
