use url::Url;

/// Resolves an image reference against the page's base URL
///
/// Applies standard base+relative resolution, so an already-absolute
/// reference comes back unchanged and a relative one is joined onto the
/// base. References that cannot be turned into a fetchable URL are dropped
/// silently rather than reported as errors.
///
/// Returns None when:
/// - the reference is empty after trimming
/// - the reference cannot be parsed against the base
/// - the resolved URL is not HTTP(S) (data:, javascript:, file:, ...)
///
/// # Arguments
///
/// * `base` - The URL of the page the reference appeared on
/// * `raw` - The verbatim attribute value
///
/// # Example
///
/// ```
/// use pagesift::url::resolve_image_ref;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/a/").unwrap();
/// let resolved = resolve_image_ref(&base, "img/pic.png").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/a/img/pic.png");
/// ```
pub fn resolve_image_ref(base: &Url, raw: &str) -> Option<Url> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    match base.join(raw) {
        Ok(resolved) => {
            // Only HTTP and HTTPS URLs are fetchable
            if resolved.scheme() == "http" || resolved.scheme() == "https" {
                Some(resolved)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Extracts the final path segment of a resolved image URL
///
/// This is the name the downloaded file is saved under. Returns None when
/// the URL path ends in a slash or has no path, since there is no usable
/// file name in that case.
pub fn file_name(url: &Url) -> Option<String> {
    url.path_segments()
        .and_then(|segments| segments.last().map(str::to_string))
        .filter(|name| !name.is_empty())
}
