//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to serve pages and images and verify the full
//! fetch-extract-persist-download cycle end-to-end against real files.

use pagesift::config::Config;
use pagesift::{FetchError, PagesiftError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves an HTML page at the mock server root
async fn mount_page(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Serves fake image bytes at the given path
async fn mount_image(server: &MockServer, image_path: &str, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(bytes.to_vec())
                .insert_header("content-type", "image/png"),
        )
        .mount(server)
        .await;
}

fn read_csv_rows(dir: &TempDir) -> Vec<String> {
    let csv = std::fs::read_to_string(dir.path().join("all_text_content.csv")).unwrap();
    csv.lines().map(str::to_string).collect()
}

#[tokio::test]
async fn test_end_to_end_scrape() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        r#"<html><head><title>Demo</title></head><body>
        <p>First paragraph.</p>
        <p>Second paragraph.</p>
        <img src="img/pic.png">
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_image(&server, "/img/pic.png", b"\x89PNG fake bytes").await;

    let dest = TempDir::new().unwrap();
    let outcome = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path())
        .await
        .expect("scrape failed");

    // Persisted files
    assert!(dest.path().join("index.html").exists());
    let rows = read_csv_rows(&dest);
    assert_eq!(
        rows,
        vec!["Content", "Demo", "First paragraph.", "Second paragraph."]
    );

    // Exactly one report entry, and the image landed on disk
    assert_eq!(outcome.images.len(), 1);
    assert!(outcome.images[0].is_saved());
    let image_path = dest.path().join("images").join("pic.png");
    assert!(image_path.exists());
    assert_eq!(std::fs::read(&image_path).unwrap(), b"\x89PNG fake bytes");

    // Extracted text matches the persisted rows
    assert_eq!(outcome.text, "Demo\nFirst paragraph.\nSecond paragraph.");
}

#[tokio::test]
async fn test_non_success_status_aborts_scrape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dest = TempDir::new().unwrap();
    let result = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path()).await;

    match result {
        Err(PagesiftError::Fetch(FetchError::Status { status, .. })) => {
            assert_eq!(status, 500);
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }

    // Nothing was persisted
    assert!(!dest.path().join("index.html").exists());
    assert!(!dest.path().join("all_text_content.csv").exists());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 1 is never listening
    let dest = TempDir::new().unwrap();
    let result =
        pagesift::scrape(&Config::default(), "http://127.0.0.1:1/", dest.path()).await;

    assert!(matches!(
        result,
        Err(PagesiftError::Fetch(FetchError::Transport { .. }))
    ));
}

#[tokio::test]
async fn test_invalid_url_is_error() {
    let dest = TempDir::new().unwrap();
    let result = pagesift::scrape(&Config::default(), "not a url", dest.path()).await;

    assert!(matches!(
        result,
        Err(PagesiftError::Fetch(FetchError::InvalidUrl { .. }))
    ));
}

#[tokio::test]
async fn test_one_image_failure_does_not_abort_batch() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        r#"<html><body>
        <p>Text.</p>
        <img src="/img/missing.png">
        <img src="/img/present.png">
        </body></html>"#
            .to_string(),
    )
    .await;
    // missing.png gets wiremock's default 404; present.png is served
    mount_image(&server, "/img/present.png", b"image data").await;

    let dest = TempDir::new().unwrap();
    let outcome = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path())
        .await
        .expect("scrape failed");

    // One entry per ref, in document order
    assert_eq!(outcome.images.len(), 2);
    assert!(!outcome.images[0].is_saved());
    assert!(outcome.images[0].url().ends_with("/img/missing.png"));
    assert!(outcome.images[0].to_string().contains("404"));
    assert!(outcome.images[1].is_saved());
    assert!(dest.path().join("images").join("present.png").exists());
    assert!(!dest.path().join("images").join("missing.png").exists());
}

#[tokio::test]
async fn test_unresolvable_refs_dropped_silently() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        r#"<html><body>
        <p>Text.</p>
        <img src="">
        <img src="data:image/png;base64,AAAA">
        </body></html>"#
            .to_string(),
    )
    .await;

    let dest = TempDir::new().unwrap();
    let outcome = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path())
        .await
        .expect("scrape failed");

    // Neither ref is resolvable, so the report is empty and no images
    // folder was created
    assert!(outcome.images.is_empty());
    assert!(!dest.path().join("images").exists());
}

#[tokio::test]
async fn test_rescrape_overwrites_deterministically() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "<html><body><p>Stable content.</p></body></html>".to_string(),
    )
    .await;

    let dest = TempDir::new().unwrap();
    let url = format!("{}/", server.uri());

    pagesift::scrape(&Config::default(), &url, dest.path())
        .await
        .expect("first scrape failed");
    let html_first = std::fs::read_to_string(dest.path().join("index.html")).unwrap();
    let csv_first = read_csv_rows(&dest);

    pagesift::scrape(&Config::default(), &url, dest.path())
        .await
        .expect("second scrape failed");
    let html_second = std::fs::read_to_string(dest.path().join("index.html")).unwrap();
    let csv_second = read_csv_rows(&dest);

    assert_eq!(html_first, html_second);
    assert_eq!(csv_first, csv_second);
    assert_eq!(csv_second, vec!["Content", "Stable content."]);
}

#[tokio::test]
async fn test_basename_collision_last_write_wins() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        r#"<html><body>
        <img src="/a/pic.png">
        <img src="/b/pic.png">
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_image(&server, "/a/pic.png", b"first").await;
    mount_image(&server, "/b/pic.png", b"second").await;

    let dest = TempDir::new().unwrap();
    let outcome = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path())
        .await
        .expect("scrape failed");

    assert_eq!(outcome.images.len(), 2);
    assert!(outcome.images.iter().all(|o| o.is_saved()));

    // Both refs share the basename; the later download overwrote the earlier
    let bytes = std::fs::read(dest.path().join("images").join("pic.png")).unwrap();
    assert_eq!(bytes, b"second");
}

#[tokio::test]
async fn test_analytics_over_scraped_text() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        r#"<html><body>
        <p>Rust compilers optimize machine code aggressively.</p>
        <p>Rust code compiles to fast machine code.</p>
        </body></html>"#
            .to_string(),
    )
    .await;

    let dest = TempDir::new().unwrap();
    let outcome = pagesift::scrape(&Config::default(), &format!("{}/", server.uri()), dest.path())
        .await
        .expect("scrape failed");

    let top = pagesift::top_words(&outcome.text, 2).unwrap();
    assert_eq!(top[0].word, "code");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].word, "rust");
    assert_eq!(top[1].count, 2);

    let summary = pagesift::summarize(&outcome.text, 1).unwrap();
    assert!(!summary.is_empty());
}
