//! HTTP page fetching behind a trait seam.

use async_trait::async_trait;

use crate::ScrapeError;

/// Client identifier sent with every page fetch, so site operators can
/// see who is scraping them.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; PromoForge/1.0; +https://promoforge.app)";

/// Fetches a URL's HTML body.
///
/// The production implementation is [`HttpFetcher`]; tests substitute a
/// scripted fetcher to exercise scrape semantics without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// [`PageFetcher`] backed by a pooled [`reqwest::Client`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the descriptive [`USER_AGENT`] set as the
    /// client's default.
    pub fn new() -> Self {
        // Same failure mode as `reqwest::Client::new()`: only panics if
        // the TLS backend cannot be initialized.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("reqwest client");
        Self { client }
    }

    /// Build a fetcher reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
