//! HTTP fetcher implementation
//!
//! This module builds the HTTP client shared by page and image requests and
//! performs the single page retrieval that starts a scrape. There are no
//! retries: a non-success status or transport failure surfaces immediately
//! as a [`FetchError`].

use crate::config::ClientConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully retrieved page, consumed once by the extractor
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// The URL the page was requested from
    pub url: Url,

    /// HTTP status code of the response
    pub status: u16,

    /// Raw response body bytes; decoding is the extractor's concern
    pub body: Vec<u8>,
}

/// Builds an HTTP client with proper configuration
///
/// The client carries the configured user agent and bounded request and
/// connect timeouts. The original tool issued requests with no timeout at
/// all; the bounds here are a hardening deviation so a dead server cannot
/// hang a scrape indefinitely. Redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use pagesift::config::ClientConfig;
/// use pagesift::scrape::build_http_client;
///
/// let client = build_http_client(&ClientConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page with a single GET request
///
/// Succeeds only for a 200-class response. Any other status yields
/// [`FetchError::Status`]; DNS, connection, timeout, and body-read failures
/// yield [`FetchError::Transport`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedDocument)` - The retrieved page
/// * `Err(FetchError)` - The request failed
pub async fn fetch(client: &Client, url: &Url) -> Result<FetchedDocument, FetchError> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    tracing::debug!("Fetched {} ({} bytes)", url, body.len());

    Ok(FetchedDocument {
        url: url.clone(),
        status: status.as_u16(),
        body: body.to_vec(),
    })
}
