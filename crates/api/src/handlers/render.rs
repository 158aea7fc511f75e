//! Handlers for render submission and status polling.
//!
//! Routes:
//! - `POST /api/render`              — validate and submit a render
//! - `GET  /api/render/status/{id}`  — query render status by id

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use promoforge_core::timeline::{validate_render_payload, RenderPayload};

use crate::error::{AppError, AppResult};
use crate::response::ShotstackResponse;
use crate::state::AppState;

/// POST /api/render
///
/// Validates every clip asset client-side (TTS text length and voice,
/// audio URL shape), then forwards the document to Shotstack. A remote
/// rejection passes the remote body and status through; an invalid
/// payload is never sent upstream.
pub async fn submit_render(
    State(state): State<AppState>,
    Json(payload): Json<RenderPayload>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        track_count = payload.timeline.tracks.len(),
        background = ?payload.timeline.background,
        "Received render request",
    );

    validate_render_payload(&payload).map_err(AppError::Core)?;

    let client = state.shotstack()?;
    let body = client.submit(&payload).await?;

    Ok(Json(ShotstackResponse::new(body)))
}

/// GET /api/render/status/{id}
///
/// One poll tick: queries Shotstack for the render's status and passes
/// the remote body through. The fixed-interval polling loop lives with
/// the caller; each request here is a single status query.
pub async fn render_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Render ID is required".to_string()));
    }

    let client = state.shotstack()?;
    let body = client.status(&id).await?;

    Ok(Json(ShotstackResponse::new(body)))
}
