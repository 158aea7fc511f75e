//! Shared response envelope types for API handlers.
//!
//! The scrape endpoints answer `{success:true, data}`; the render and
//! audio endpoints answer `{ok:true, ...}`. Using these types instead
//! of ad-hoc `serde_json::json!` keeps the envelopes consistent and
//! type-checked.

use serde::Serialize;

/// `{success:true, data: T}` envelope used by the scrape endpoints.
#[derive(Debug, Serialize)]
pub struct ScrapeResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ScrapeResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ok:true, shotstack: <remote body>}` envelope used by the render
/// endpoints; the remote response is passed through unchanged.
#[derive(Debug, Serialize)]
pub struct ShotstackResponse {
    pub ok: bool,
    pub shotstack: serde_json::Value,
}

impl ShotstackResponse {
    pub fn new(shotstack: serde_json::Value) -> Self {
        Self {
            ok: true,
            shotstack,
        }
    }
}

/// `{ok:true, audioUrl, metadata}` envelope for generated audio.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResponse {
    pub ok: bool,
    pub audio_url: String,
    pub metadata: AudioMetadata,
}

/// Generation metadata echoed back with the audio URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMetadata {
    pub voice: &'static str,
    pub text_length: usize,
    pub size_bytes: usize,
    pub model_id: String,
}

/// `{ok:true, voices}` envelope for the voice catalog.
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub ok: bool,
    pub voices: Vec<promoforge_elevenlabs::Voice>,
}
