//! Integration tests for the scrape endpoints.
//!
//! The scraper is backed by canned page fetchers so no network I/O happens.

mod common;

use axum::http::StatusCode;
use common::{assert_status_json, build_test_app_with_fetcher, post_json, FailingFetcher, StaticFetcher};
use serde_json::json;

const PAGE: &str = r##"
<html>
<head>
<title>Fallback Title</title>
<meta property="og:title" content="Acme Launcher">
<meta name="description" content="Launch things faster.">
<meta name="theme-color" content="#FF8800">
<meta property="og:image" content="https://cdn.acme.test/hero.png">
</head>
<body>
<img src="/static/screenshot-one.png">
<img src="https://cdn.acme.test/favicon.ico">
</body>
</html>
"##;

// ---------------------------------------------------------------------------
// POST /api/scrape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scrape_returns_metadata_and_screenshots() {
    let app = build_test_app_with_fetcher(StaticFetcher(PAGE.to_string()));
    let response = post_json(app, "/api/scrape", json!({ "url": "https://acme.test/app" })).await;

    let body = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["url"], "https://acme.test/app");
    assert_eq!(data["title"], "Acme Launcher");
    assert_eq!(data["description"], "Launch things faster.");
    assert_eq!(data["themeColor"], "#FF8800");

    let screenshots = data["screenshots"].as_array().unwrap();
    assert!(!screenshots.is_empty());
    // og:image is taken first; relative <img> sources are made absolute.
    assert_eq!(screenshots[0], "https://cdn.acme.test/hero.png");
    assert!(screenshots
        .iter()
        .any(|s| s == "https://acme.test/static/screenshot-one.png"));
    // Tracking and icon assets never make it into the list.
    assert!(!screenshots.iter().any(|s| s.as_str().unwrap().contains("favicon")));
}

#[tokio::test]
async fn scrape_rejects_invalid_url() {
    let app = build_test_app_with_fetcher(StaticFetcher(PAGE.to_string()));
    let response = post_json(app, "/api/scrape", json!({ "url": "not a url" })).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn scrape_surfaces_fetch_failure_as_bad_request() {
    let app = build_test_app_with_fetcher(FailingFetcher);
    let response = post_json(app, "/api/scrape", json!({ "url": "https://down.test" })).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
}

// ---------------------------------------------------------------------------
// POST /api/scrape-multiple
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scrape_multiple_returns_assets_in_input_order() {
    let app = build_test_app_with_fetcher(StaticFetcher(PAGE.to_string()));
    let response = post_json(
        app,
        "/api/scrape-multiple",
        json!({ "urls": ["https://one.test", "https://two.test"] }),
    )
    .await;

    let body = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(body["success"], true);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["url"], "https://one.test");
    assert_eq!(data[1]["url"], "https://two.test");
}

#[tokio::test]
async fn scrape_multiple_rejects_empty_list() {
    let app = build_test_app_with_fetcher(StaticFetcher(PAGE.to_string()));
    let response = post_json(app, "/api/scrape-multiple", json!({ "urls": [] })).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn scrape_multiple_rejects_more_than_ten_urls() {
    let urls: Vec<String> = (0..11).map(|i| format!("https://site{i}.test")).collect();

    let app = build_test_app_with_fetcher(StaticFetcher(PAGE.to_string()));
    let response = post_json(app, "/api/scrape-multiple", json!({ "urls": urls })).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn scrape_multiple_fails_when_every_url_fails() {
    // Every fetch fails, so every asset degrades to a failure entry with no
    // screenshots and the batch as a whole is rejected.
    let app = build_test_app_with_fetcher(FailingFetcher);
    let response = post_json(
        app,
        "/api/scrape-multiple",
        json!({ "urls": ["not a url", "also not a url"] }),
    )
    .await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
}
