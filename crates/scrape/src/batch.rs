//! Bounded concurrent scraping of multiple URLs.

use futures::future::join_all;
use promoforge_core::scrape::{ScrapeLimits, ScrapedAsset};

use crate::site::SiteScraper;
use crate::ScrapeError;

/// Maximum number of URLs accepted by one batch call.
pub const MAX_BATCH_URLS: usize = 10;

/// Scrape up to [`MAX_BATCH_URLS`] URLs concurrently.
///
/// Input is rejected before any network I/O if it is empty or too
/// large. Fetches run concurrently with no ordering dependency, but the
/// returned assets match input order. A URL that fails to fetch or
/// extract degrades to a placeholder asset instead of failing the
/// batch; entries with zero screenshots (i.e. the placeholders) are
/// filtered out afterwards, and the call as a whole fails only when
/// nothing survives the filter.
pub async fn scrape_all(
    scraper: &SiteScraper,
    urls: &[String],
) -> Result<Vec<ScrapedAsset>, ScrapeError> {
    if urls.is_empty() {
        return Err(ScrapeError::BatchInput("URLs array is required".to_string()));
    }
    if urls.len() > MAX_BATCH_URLS {
        return Err(ScrapeError::BatchInput(format!(
            "Maximum {MAX_BATCH_URLS} URLs allowed"
        )));
    }

    tracing::info!(count = urls.len(), "Scraping URL batch");

    let successful: Vec<ScrapedAsset> = scrape_each(scraper, urls)
        .await
        .into_iter()
        .filter(|asset| !asset.screenshots.is_empty())
        .collect();

    if successful.is_empty() {
        return Err(ScrapeError::AllFailed);
    }

    tracing::info!(
        scraped = successful.len(),
        requested = urls.len(),
        "Batch scrape complete",
    );
    Ok(successful)
}

/// Scrape every URL concurrently, one asset (or placeholder) per URL.
///
/// Always returns exactly `urls.len()` entries in input order,
/// regardless of individual fetch outcomes.
async fn scrape_each(scraper: &SiteScraper, urls: &[String]) -> Vec<ScrapedAsset> {
    join_all(urls.iter().map(|url| async move {
        match scraper.scrape_with_limits(url, ScrapeLimits::BATCH).await {
            Ok(asset) => asset,
            Err(e) => {
                tracing::warn!(%url, error = %e, "Scrape degraded to placeholder");
                ScrapedAsset::failed(url, &e.to_string())
            }
        }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::fetch::PageFetcher;

    /// Fetcher that succeeds for URLs containing "ok" and fails the rest.
    struct ScriptedFetcher;

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
            if url.contains("ok") {
                Ok(format!(
                    r#"<meta property="og:title" content="{url}"><img src="/product-shot.png">"#
                ))
            } else {
                Err(ScrapeError::Fetch {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                })
            }
        }
    }

    fn urls(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| format!("https://{s}.test/")).collect()
    }

    #[tokio::test]
    async fn results_match_input_order() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));
        let input = urls(&["ok-a", "ok-b", "ok-c"]);

        let assets = scrape_all(&scraper, &input).await.unwrap();
        let scraped: Vec<&str> = assets.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(scraped, vec![
            "https://ok-a.test/",
            "https://ok-b.test/",
            "https://ok-c.test/",
        ]);
    }

    #[tokio::test]
    async fn raw_stage_returns_one_entry_per_url_in_order() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));
        let input = urls(&["ok-a", "down-b", "ok-c", "down-d"]);

        let assets = scrape_each(&scraper, &input).await;
        assert_eq!(assets.len(), input.len());
        for (asset, url) in assets.iter().zip(&input) {
            assert_eq!(&asset.url, url);
        }
        assert_eq!(assets[1].title, "Failed to scrape");
        assert_eq!(assets[3].title, "Failed to scrape");
    }

    #[tokio::test]
    async fn failed_urls_are_filtered_but_do_not_fail_the_batch() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));
        let input = urls(&["ok-a", "down-b", "ok-c"]);

        let assets = scrape_all(&scraper, &input).await.unwrap();
        assert_eq!(assets.len(), 2);
        assert!(assets.iter().all(|a| !a.screenshots.is_empty()));
    }

    #[tokio::test]
    async fn batch_fails_only_when_every_url_degrades() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));
        let input = urls(&["down-a", "down-b"]);

        let err = scrape_all(&scraper, &input).await.unwrap_err();
        assert_matches!(err, ScrapeError::AllFailed);
    }

    #[tokio::test]
    async fn empty_and_oversized_batches_are_rejected_upfront() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));

        let err = scrape_all(&scraper, &[]).await.unwrap_err();
        assert_matches!(err, ScrapeError::BatchInput(_));

        let eleven = urls(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k",
        ]);
        let err = scrape_all(&scraper, &eleven).await.unwrap_err();
        assert_matches!(err, ScrapeError::BatchInput(_));
    }

    #[tokio::test]
    async fn invalid_urls_degrade_like_fetch_failures() {
        let scraper = SiteScraper::with_fetcher(Arc::new(ScriptedFetcher));
        let input = vec!["not a url".to_string(), "https://ok-a.test/".to_string()];

        let assets = scrape_all(&scraper, &input).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].url, "https://ok-a.test/");
    }
}
