//! Site scraping: fetch a page's HTML and extract marketing metadata.
//!
//! [`SiteScraper`] handles one URL; [`batch::scrape_all`] fans it out
//! over a bounded set of URLs concurrently, degrading per-URL failures
//! to placeholder assets. The HTTP layer sits behind the
//! [`fetch::PageFetcher`] trait so batch semantics are testable without
//! a network.

pub mod batch;
pub mod fetch;
pub mod site;

pub use batch::{scrape_all, MAX_BATCH_URLS};
pub use fetch::{HttpFetcher, PageFetcher};
pub use site::SiteScraper;

/// Errors from the scraping layer.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The input string is not a well-formed URL.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// The target page answered with a non-2xx status.
    #[error("Failed to fetch URL: {status} {reason}")]
    Fetch {
        /// HTTP status code returned by the page.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Batch input rejected before any network I/O.
    #[error("{0}")]
    BatchInput(String),

    /// Every URL in a batch degraded to zero screenshots.
    #[error("Failed to scrape any URLs successfully")]
    AllFailed,
}
