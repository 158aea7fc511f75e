//! Object storage client for generated audio.
//!
//! Thin wrapper over the Vercel Blob put-blob HTTP API: upload a byte
//! buffer under a pathname, get back a durable public URL. Failures
//! are fatal to the caller and never retried.

use bytes::Bytes;
use rand::distr::{Alphanumeric, SampleString};
use serde::Deserialize;

/// Errors from the blob storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The blob store returned a non-2xx status code.
    #[error("Blob storage error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Successful put-blob response.
#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    /// Public URL of the stored blob.
    url: String,
}

/// HTTP client for the blob store.
pub struct BlobStorageClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl BlobStorageClient {
    /// Production blob store endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://blob.vercel-storage.com";

    /// Create a client with the production endpoint.
    pub fn new(token: String) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string(), token)
    }

    /// Create a client with an explicit endpoint (used by tests).
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Upload an MP3 audio buffer under `filename` with public access.
    ///
    /// The store appends a random suffix to the pathname so repeated
    /// uploads never collide in caches. Returns the public URL.
    pub async fn put_audio(&self, audio: Bytes, filename: &str) -> Result<String, StorageError> {
        tracing::info!(
            filename,
            size_kb = audio.len() / 1024,
            "Uploading audio to blob storage",
        );

        let response = self
            .client
            .put(format!("{}/{filename}.mp3", self.base_url))
            .bearer_auth(&self.token)
            .header("x-content-type", "audio/mpeg")
            .header("x-add-random-suffix", "1")
            .body(audio)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(status = status.as_u16(), %body, "Blob upload failed");
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let blob: PutBlobResponse = response.json().await?;
        tracing::info!(url = %blob.url, "Audio uploaded");
        Ok(blob.url)
    }
}

/// Generate a unique filename: `{prefix}-{unix_millis}-{6 random chars}`.
pub fn unique_filename(prefix: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let suffix = Alphanumeric
        .sample_string(&mut rand::rng(), 6)
        .to_lowercase();
    format!("{prefix}-{timestamp}-{suffix}")
}
