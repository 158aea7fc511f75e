/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Shotstack render API credentials and endpoint.
#[derive(Debug, Clone)]
pub struct ShotstackConfig {
    /// Environment base URL, e.g. `https://api.shotstack.io/v1`.
    pub base_url: String,
    /// Key sent as the `x-api-key` header.
    pub api_key: String,
}

impl ShotstackConfig {
    /// Load from the environment, or `None` when no API key is set.
    ///
    /// `SHOTSTACK_API_ENV` selects `v1` (production) or `stage`;
    /// `SHOTSTACK_HOST` overrides the derived base URL entirely.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SHOTSTACK_API_KEY").ok()?;
        let api_env = std::env::var("SHOTSTACK_API_ENV").unwrap_or_else(|_| "v1".into());
        let base_url = std::env::var("SHOTSTACK_HOST")
            .unwrap_or_else(|_| format!("https://api.shotstack.io/{api_env}"));
        Some(Self { base_url, api_key })
    }
}

/// ElevenLabs text-to-speech credentials.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub api_key: String,
}

impl ElevenLabsConfig {
    /// Load from `ELEVENLABS_API_KEY`, or `None` when unset.
    pub fn from_env() -> Option<Self> {
        std::env::var("ELEVENLABS_API_KEY")
            .ok()
            .map(|api_key| Self { api_key })
    }
}

/// Blob storage access token.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    pub token: String,
}

impl BlobConfig {
    /// Load from `BLOB_READ_WRITE_TOKEN`, or `None` when unset.
    pub fn from_env() -> Option<Self> {
        std::env::var("BLOB_READ_WRITE_TOKEN")
            .ok()
            .map(|token| Self { token })
    }
}
