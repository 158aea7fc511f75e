//! HTTP client for the ElevenLabs text-to-speech API.

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde::Serialize;

use crate::voices::{find_voice, MAX_TTS_TEXT_LENGTH};

/// Default model for speech generation.
pub const DEFAULT_MODEL_ID: &str = "eleven_turbo_v2_5";

/// One speech-generation request.
#[derive(Debug, Clone)]
pub struct TtsRequest {
    /// Provider voice id; must exist in the built-in voice table.
    pub voice_id: String,
    pub text: String,
    pub model_id: String,
    /// Voice stability, 0.0..=1.0.
    pub stability: f64,
    /// Similarity boost, 0.0..=1.0.
    pub similarity_boost: f64,
    /// Style exaggeration, 0.0..=1.0.
    pub style: f64,
    pub use_speaker_boost: bool,
    /// Latency/quality trade-off, 0..=4 (higher is faster).
    pub optimize_streaming_latency: u8,
}

impl TtsRequest {
    /// Request with the provider-recommended defaults.
    pub fn new(voice_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
            optimize_streaming_latency: 0,
        }
    }
}

/// Wire body for the text-to-speech endpoint.
#[derive(Serialize)]
struct TtsBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    style: f64,
    use_speaker_boost: bool,
}

/// Errors from the text-to-speech layer.
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// The request was rejected before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// ElevenLabs returned a non-2xx status code.
    #[error("ElevenLabs API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Reading the streamed audio body failed partway through.
    #[error("Audio stream error: {0}")]
    Stream(String),
}

/// HTTP client for the ElevenLabs API.
pub struct ElevenLabsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsClient {
    /// Production API base.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.elevenlabs.io/v1";

    /// Create a client with the production base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Create a client with an explicit base URL (used by tests).
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Generate speech audio (MP3) for a request.
    ///
    /// Validates the voice against the built-in table and the text
    /// length against [`MAX_TTS_TEXT_LENGTH`] before any network call.
    /// The streamed response is concatenated into one buffer; a chunk
    /// read error or a non-2xx status fails the whole call, never
    /// returning a partial buffer.
    pub async fn synthesize(&self, request: &TtsRequest) -> Result<Bytes, TtsError> {
        validate_text(&request.text)?;
        if find_voice(&request.voice_id).is_none() {
            return Err(TtsError::Validation(format!(
                "Invalid voice ID: {}",
                request.voice_id
            )));
        }

        tracing::info!(
            voice_id = %request.voice_id,
            text_length = request.text.chars().count(),
            model_id = %request.model_id,
            "Generating speech",
        );

        let body = TtsBody {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: VoiceSettings {
                stability: request.stability,
                similarity_boost: request.similarity_boost,
                style: request.style,
                use_speaker_boost: request.use_speaker_boost,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/text-to-speech/{}",
                self.base_url, request.voice_id
            ))
            .query(&[(
                "optimize_streaming_latency",
                request.optimize_streaming_latency.to_string(),
            )])
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TtsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let mut stream = response.bytes_stream();
        let mut audio = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| TtsError::Stream(e.to_string()))?;
            audio.extend_from_slice(&chunk);
        }

        tracing::info!(size_bytes = audio.len(), "Speech generated");
        Ok(audio.freeze())
    }
}

/// Validate text for synthesis: non-empty after trimming and at most
/// [`MAX_TTS_TEXT_LENGTH`] characters.
pub fn validate_text(text: &str) -> Result<(), TtsError> {
    if text.trim().is_empty() {
        return Err(TtsError::Validation("TTS text cannot be empty".to_string()));
    }
    let len = text.chars().count();
    if len > MAX_TTS_TEXT_LENGTH {
        return Err(TtsError::Validation(format!(
            "Text exceeds {MAX_TTS_TEXT_LENGTH} character limit (current: {len} characters)"
        )));
    }
    Ok(())
}
