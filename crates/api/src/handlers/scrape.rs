//! Handlers for the scrape endpoints.
//!
//! Routes:
//! - `POST /api/scrape`           — scrape one URL
//! - `POST /api/scrape-multiple`  — scrape up to 10 URLs concurrently

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use promoforge_scrape::scrape_all;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::ScrapeResponse;
use crate::state::AppState;

/// Request body for `POST /api/scrape`.
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// POST /api/scrape
///
/// Scrapes one URL and returns its metadata and screenshots. Fetch and
/// URL errors surface to the caller as 400s; nothing degrades here.
pub async fn scrape(
    State(state): State<AppState>,
    Json(input): Json<ScrapeRequest>,
) -> AppResult<impl IntoResponse> {
    let asset = state.scraper.scrape(&input.url).await?;
    Ok(Json(ScrapeResponse::new(asset)))
}

/// Request body for `POST /api/scrape-multiple`.
#[derive(Debug, Deserialize)]
pub struct ScrapeMultipleRequest {
    pub urls: Vec<String>,
}

/// POST /api/scrape-multiple
///
/// Scrapes up to 10 URLs concurrently. Individual failures degrade to
/// placeholders and are filtered out; the call fails only when no URL
/// yields any screenshot.
pub async fn scrape_multiple(
    State(state): State<AppState>,
    Json(input): Json<ScrapeMultipleRequest>,
) -> AppResult<impl IntoResponse> {
    let assets = scrape_all(&state.scraper, &input.urls).await?;
    Ok(Json(ScrapeResponse::new(assets)))
}
