use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use promoforge_core::error::CoreError;
use promoforge_elevenlabs::TtsError;
use promoforge_scrape::ScrapeError;
use promoforge_shotstack::ShotstackError;
use promoforge_storage::StorageError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and service-client errors and implements
/// [`IntoResponse`] to produce the JSON error envelopes the endpoints
/// promise: scrape endpoints answer `{success:false, error}`, the
/// render and audio endpoints answer `{ok:false, error, ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A scraping error (invalid URL, fetch failure, empty batch).
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    /// A domain-level error from `promoforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the Shotstack render client.
    #[error(transparent)]
    Shotstack(#[from] ShotstackError),

    /// An error from the ElevenLabs TTS client.
    #[error(transparent)]
    Tts(#[from] TtsError),

    /// An error from the blob storage client.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Request body failed schema validation; carries per-field details.
    #[error("Validation failed")]
    Schema(ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A required credential is missing; the call was never attempted.
    #[error("{0}")]
    Configuration(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- Scrape endpoints: {success:false, error} ---
            AppError::Scrape(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": e.to_string() }),
            ),

            // --- Core errors ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "ok": false, "error": msg }),
                ),
                CoreError::Configuration(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": msg }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "ok": false, "error": "Internal server error" }),
                    )
                }
            },

            // --- Shotstack: pass the remote body and status through ---
            AppError::Shotstack(ShotstackError::Api {
                status,
                body,
                message,
            }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({
                    "ok": false,
                    "errorFromShotstack": body,
                    "error": message,
                }),
            ),
            AppError::Shotstack(e) => {
                tracing::error!(error = %e, "Shotstack request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": e.to_string() }),
                )
            }

            // --- TTS / storage ---
            AppError::Tts(TtsError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": msg }),
            ),
            AppError::Tts(e) => {
                tracing::error!(error = %e, "Speech generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": format!("Failed to generate speech: {e}") }),
                )
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Audio upload failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": format!("Failed to upload audio: {e}") }),
                )
            }

            // --- Schema validation: surface per-field details ---
            AppError::Schema(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "ok": false,
                    "error": "Validation failed",
                    "details": validation_details(errors),
                }),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": msg }),
            ),
            AppError::Configuration(msg) => {
                tracing::error!(error = %msg, "Missing configuration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": msg }),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten [`ValidationErrors`] into an array of `{field, code, message}`
/// entries for the error envelope.
fn validation_details(errors: &ValidationErrors) -> Vec<serde_json::Value> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                json!({
                    "field": field,
                    "code": e.code,
                    "message": e.message,
                })
            })
        })
        .collect()
}
