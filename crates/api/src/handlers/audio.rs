//! Handlers for voiceover preview audio.
//!
//! Routes:
//! - `POST /api/generate-audio` — synthesize speech and upload it
//! - `GET  /api/generate-audio` — list the available preset voices

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use promoforge_elevenlabs::client::DEFAULT_MODEL_ID;
use promoforge_elevenlabs::{find_voice, validate_text, TtsRequest, VOICES};
use promoforge_storage::unique_filename;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{AudioMetadata, AudioResponse, VoicesResponse};
use crate::state::AppState;

/// Request body for `POST /api/generate-audio`.
///
/// Optional tuning parameters default to the provider-recommended
/// values when omitted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[validate(length(min = 1, message = "Voice ID is required"))]
    pub voice_id: String,
    pub model_id: Option<String>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub stability: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub similarity_boost: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub style: Option<f64>,
    pub use_speaker_boost: Option<bool>,
    #[validate(range(min = 0, max = 4))]
    pub optimize_streaming_latency: Option<u8>,
}

/// POST /api/generate-audio
///
/// Synthesizes the text with the selected preset voice, uploads the
/// audio to blob storage, and returns the public URL. Schema, text
/// length, and voice existence are all checked before any remote call.
pub async fn generate_audio(
    State(state): State<AppState>,
    Json(input): Json<GenerateAudioRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::Schema)?;
    validate_text(&input.text).map_err(AppError::Tts)?;

    let Some(voice) = find_voice(&input.voice_id) else {
        return Err(AppError::BadRequest(format!(
            "Invalid voice ID: {}",
            input.voice_id
        )));
    };

    let tts = state.elevenlabs()?;
    let storage = state.storage()?;

    tracing::info!(
        voice = voice.name,
        text_length = input.text.chars().count(),
        "Audio generation request",
    );

    let mut request = TtsRequest::new(&input.voice_id, &input.text);
    if let Some(model_id) = &input.model_id {
        request.model_id = model_id.clone();
    }
    if let Some(stability) = input.stability {
        request.stability = stability;
    }
    if let Some(similarity_boost) = input.similarity_boost {
        request.similarity_boost = similarity_boost;
    }
    if let Some(style) = input.style {
        request.style = style;
    }
    if let Some(use_speaker_boost) = input.use_speaker_boost {
        request.use_speaker_boost = use_speaker_boost;
    }
    if let Some(latency) = input.optimize_streaming_latency {
        request.optimize_streaming_latency = latency;
    }

    let audio = tts.synthesize(&request).await?;
    let size_bytes = audio.len();

    let filename = unique_filename("voiceover");
    let audio_url = storage.put_audio(audio, &filename).await?;

    tracing::info!(url = %audio_url, size_bytes, "Audio generation complete");

    Ok(Json(AudioResponse {
        ok: true,
        audio_url,
        metadata: AudioMetadata {
            voice: voice.name,
            text_length: input.text.chars().count(),
            size_bytes,
            model_id: input
                .model_id
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        },
    }))
}

/// GET /api/generate-audio
///
/// Returns the preset voice catalog. No credentials required.
pub async fn list_voices() -> AppResult<impl IntoResponse> {
    Ok(Json(VoicesResponse {
        ok: true,
        voices: VOICES.to_vec(),
    }))
}
