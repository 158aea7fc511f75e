//! Single-URL scraping: fetch, extract, return.

use std::sync::Arc;

use promoforge_core::scrape::{extract_asset, ScrapeLimits, ScrapedAsset};

use crate::fetch::{HttpFetcher, PageFetcher};
use crate::ScrapeError;

/// Scrapes one URL into a [`ScrapedAsset`].
///
/// Cheaply cloneable; the underlying fetcher (and its connection pool)
/// is shared.
#[derive(Clone)]
pub struct SiteScraper {
    fetcher: Arc<dyn PageFetcher>,
}

impl SiteScraper {
    /// Scraper backed by a real HTTP client.
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()))
    }

    /// Scraper backed by a caller-supplied fetcher (used by tests).
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Scrape a single URL with the single-URL screenshot caps.
    ///
    /// Errors (bad URL, fetch failure) surface to the caller; only the
    /// batch path degrades them to placeholders.
    pub async fn scrape(&self, url: &str) -> Result<ScrapedAsset, ScrapeError> {
        self.scrape_with_limits(url, ScrapeLimits::SINGLE).await
    }

    /// Scrape a single URL with explicit screenshot caps.
    pub(crate) async fn scrape_with_limits(
        &self,
        url: &str,
        limits: ScrapeLimits,
    ) -> Result<ScrapedAsset, ScrapeError> {
        if url::Url::parse(url).is_err() {
            return Err(ScrapeError::InvalidUrl(url.to_string()));
        }

        tracing::debug!(%url, "Scraping URL");
        let html = self.fetcher.fetch(url).await?;
        let asset = extract_asset(&html, url, limits);

        tracing::info!(
            %url,
            title = %asset.title,
            screenshot_count = asset.screenshots.len(),
            "Scraped successfully",
        );
        Ok(asset)
    }
}

impl Default for SiteScraper {
    fn default() -> Self {
        Self::new()
    }
}
