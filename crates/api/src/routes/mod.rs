pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scrape               scrape one URL (POST)
/// /scrape-multiple      scrape up to 10 URLs (POST)
/// /render               submit a render (POST)
/// /render/status/{id}   render status by id (GET)
/// /generate-audio       synthesize + upload voiceover (POST), voice catalog (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/scrape", post(handlers::scrape::scrape))
        .route("/scrape-multiple", post(handlers::scrape::scrape_multiple))
        .route("/render", post(handlers::render::submit_render))
        .route("/render/status/{id}", get(handlers::render::render_status))
        .route(
            "/generate-audio",
            post(handlers::audio::generate_audio).get(handlers::audio::list_voices),
        )
}
