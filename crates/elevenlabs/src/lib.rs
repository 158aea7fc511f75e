//! ElevenLabs text-to-speech client library.
//!
//! Provides the preset voice catalog, request validation, and a
//! [`reqwest`]-backed client that streams synthesized audio into a
//! single buffer for the voiceover preview path.

pub mod client;
pub mod voices;

pub use client::{validate_text, ElevenLabsClient, TtsError, TtsRequest};
pub use voices::{find_voice, Voice, MAX_TTS_TEXT_LENGTH, VOICES};
