use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use promoforge_api::config::ServerConfig;
use promoforge_api::router::build_app_router;
use promoforge_api::state::AppState;
use promoforge_scrape::{PageFetcher, ScrapeError, SiteScraper};
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// A page fetcher that serves a fixed HTML body for every URL.
pub struct StaticFetcher(pub String);

#[async_trait::async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
        Ok(self.0.clone())
    }
}

/// A page fetcher that fails every request with an HTTP status.
pub struct FailingFetcher;

#[async_trait::async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
        Err(ScrapeError::Fetch {
            status: 503,
            reason: "Service Unavailable".to_string(),
        })
    }
}

/// Build the full application router with all middleware layers, using the
/// default HTTP scraper and no remote service credentials.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. All remote clients are left
/// unconfigured; endpoints that need one answer with a configuration error,
/// which is exactly the behaviour the tests assert.
pub fn build_test_app() -> Router {
    build_test_app_with_scraper(SiteScraper::new())
}

/// Build the application router with a specific scraper, so tests can
/// substitute a canned [`PageFetcher`] instead of performing network I/O.
pub fn build_test_app_with_scraper(scraper: SiteScraper) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config.clone()),
        scraper,
        shotstack: None,
        elevenlabs: None,
        storage: None,
    };

    build_app_router(state, &config)
}

/// Build the router with a scraper backed by the given fetcher.
pub fn build_test_app_with_fetcher(fetcher: impl PageFetcher + 'static) -> Router {
    build_test_app_with_scraper(SiteScraper::with_fetcher(Arc::new(fetcher)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "Response body was not valid JSON: {e}: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Assert the response has the expected status and return the parsed body.
pub async fn assert_status_json(response: Response<Body>, expected: StatusCode) -> Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "Unexpected status, body: {json}");
    json
}
