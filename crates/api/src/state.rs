use std::sync::Arc;

use promoforge_elevenlabs::ElevenLabsClient;
use promoforge_scrape::SiteScraper;
use promoforge_shotstack::ShotstackClient;
use promoforge_storage::BlobStorageClient;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
///
/// The remote service clients are `Option`: a missing credential leaves
/// the handle in an explicit unconfigured state, and every call path
/// checks it before use instead of attempting the call.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Site scraper (always available, no credential required).
    pub scraper: SiteScraper,
    /// Shotstack render client, if `SHOTSTACK_API_KEY` is configured.
    pub shotstack: Option<Arc<ShotstackClient>>,
    /// ElevenLabs TTS client, if `ELEVENLABS_API_KEY` is configured.
    pub elevenlabs: Option<Arc<ElevenLabsClient>>,
    /// Blob storage client, if `BLOB_READ_WRITE_TOKEN` is configured.
    pub storage: Option<Arc<BlobStorageClient>>,
}

impl AppState {
    /// The render client, or a configuration error when the credential
    /// is missing.
    pub fn shotstack(&self) -> Result<&ShotstackClient, AppError> {
        self.shotstack.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Server configuration error: Missing Shotstack API key".to_string(),
            )
        })
    }

    /// The TTS client, or a configuration error when the credential is
    /// missing.
    pub fn elevenlabs(&self) -> Result<&ElevenLabsClient, AppError> {
        self.elevenlabs.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Server configuration error: Missing ElevenLabs API key".to_string(),
            )
        })
    }

    /// The storage client, or a configuration error when the token is
    /// missing.
    pub fn storage(&self) -> Result<&BlobStorageClient, AppError> {
        self.storage.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Server configuration error: Missing blob storage token".to_string(),
            )
        })
    }
}
