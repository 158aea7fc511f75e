//! Best-effort extraction of marketing metadata from raw HTML.
//!
//! Everything here is regex-based on purpose: scraped pages are
//! untrusted, frequently malformed, and only mined for a handful of
//! meta tags and `<img>` sources. Absence of a pattern match always
//! resolves to a documented default, never an error, so a broken page
//! can degrade but cannot fail a scrape.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resolve::resolve_url;

// ---------------------------------------------------------------------------
// Defaults and limits
// ---------------------------------------------------------------------------

/// Title used when neither `og:title` nor `<title>` is present.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Description used when no description meta tag is present.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Theme color used when the page's `theme-color` is absent or not a
/// strict `#RRGGBB` value.
pub const DEFAULT_THEME_COLOR: &str = "#000000";

/// Substrings that mark an `<img>` source as chrome rather than content
/// (favicons, tracking pixels, and the like).
const SKIP_SUBSTRINGS: [&str; 5] = ["favicon", "icon", "logo.svg", "pixel", "tracking"];

/// Minimum length for an `<img>` source to survive filtering.
const MIN_IMG_SRC_LEN: usize = 11;

/// Screenshot caps for one extraction pass.
///
/// The single-URL and batch paths use different caps; both variants are
/// provided as constants so the asymmetry lives in one place.
#[derive(Debug, Clone, Copy)]
pub struct ScrapeLimits {
    /// Hard cap on the returned screenshot list.
    pub max_screenshots: usize,
    /// Cap on the relaxed `<img>` pass used when filtering finds nothing.
    pub max_fallback: usize,
    /// Number of placeholder URLs appended when no image at all is found.
    pub placeholder_count: usize,
}

impl ScrapeLimits {
    /// Caps for the single-URL scrape path.
    pub const SINGLE: Self = Self {
        max_screenshots: 10,
        max_fallback: 5,
        placeholder_count: 3,
    };

    /// Caps for the batch scrape path.
    pub const BATCH: Self = Self {
        max_screenshots: 5,
        max_fallback: 3,
        placeholder_count: 1,
    };
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// Matches `<meta property="..." content="...">` (or `name=`), capturing
/// the property name and content. Compiled once, reused forever.
static META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*(?:property|name)="([^"]*)"[^>]*content="([^"]*)""#)
        .expect("valid regex")
});

/// Matches the document `<title>` element text.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("valid regex"));

/// Matches `<img ... src="...">` with either quote style.
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("valid regex"));

/// Matches a strict 6-hex-digit `#RRGGBB` color.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Scraped asset
// ---------------------------------------------------------------------------

/// Structured summary of one scraped page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedAsset {
    /// The page URL the asset was scraped from.
    pub url: String,
    /// Page title (og:title, `<title>`, or the default).
    pub title: String,
    /// Page description (og:description, description meta, or the default).
    pub description: String,
    /// Page theme color as `#RRGGBB` (default black).
    pub theme_color: String,
    /// Absolute screenshot URLs in priority order.
    pub screenshots: Vec<String>,
}

impl ScrapedAsset {
    /// Degraded placeholder for a URL that could not be scraped.
    ///
    /// Carries the original URL and the failure message but no
    /// screenshots, so batch post-filtering drops it.
    pub fn failed(url: &str, error: &str) -> Self {
        Self {
            url: url.to_string(),
            title: "Failed to scrape".to_string(),
            description: format!("Error: {error}"),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            screenshots: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract a [`ScrapedAsset`] from raw HTML.
///
/// Pure function: `page_url` is only used for relative URL resolution
/// and is copied into the result. Never fails; every missing pattern
/// resolves to its documented default, and the screenshot list is
/// guaranteed non-empty (placeholders are appended as a last resort).
pub fn extract_asset(html: &str, page_url: &str, limits: ScrapeLimits) -> ScrapedAsset {
    ScrapedAsset {
        url: page_url.to_string(),
        title: extract_title(html),
        description: extract_description(html),
        theme_color: extract_theme_color(html),
        screenshots: extract_screenshots(html, page_url, limits),
    }
}

/// First `content` value of a meta tag whose `property` or `name`
/// equals `name` (ASCII case-insensitive). Empty string when absent.
fn extract_meta(html: &str, name: &str) -> String {
    META_RE
        .captures_iter(html)
        .find(|c| c[1].eq_ignore_ascii_case(name))
        .map(|c| c[2].to_string())
        .unwrap_or_default()
}

/// Page title: `og:title`, else `<title>` text, else [`DEFAULT_TITLE`].
pub fn extract_title(html: &str) -> String {
    let og_title = extract_meta(html, "og:title");
    if !og_title.is_empty() {
        return og_title;
    }

    TITLE_RE
        .captures(html)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Page description: `og:description`, else the generic `description`
/// meta, else [`DEFAULT_DESCRIPTION`].
pub fn extract_description(html: &str) -> String {
    let og_description = extract_meta(html, "og:description");
    if !og_description.is_empty() {
        return og_description;
    }

    let description = extract_meta(html, "description");
    if description.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        description
    }
}

/// `theme-color` meta value iff it is a strict `#RRGGBB` color
/// (case-insensitive match, returned unchanged), else the default.
pub fn extract_theme_color(html: &str) -> String {
    let theme_color = extract_meta(html, "theme-color");
    if HEX_COLOR_RE.is_match(&theme_color) {
        theme_color
    } else {
        DEFAULT_THEME_COLOR.to_string()
    }
}

/// Screenshot URLs in priority order, deduplicated by resolved absolute
/// URL and capped at `limits.max_screenshots`:
///
/// 1. `og:image`
/// 2. `twitter:image` (if distinct)
/// 3. filtered `<img src>` values in document order
/// 4. unfiltered `<img src>` values (only when 3 finds nothing), capped
///    at `limits.max_fallback`
/// 5. deterministic placeholders (only when still empty)
pub fn extract_screenshots(html: &str, page_url: &str, limits: ScrapeLimits) -> Vec<String> {
    let mut screenshots: Vec<String> = Vec::new();

    let mut push_unique = |screenshots: &mut Vec<String>, raw: &str| {
        let absolute = resolve_url(raw, page_url);
        if !screenshots.contains(&absolute) {
            screenshots.push(absolute);
        }
    };

    let og_image = extract_meta(html, "og:image");
    if !og_image.is_empty() {
        push_unique(&mut screenshots, &og_image);
    }

    let twitter_image = extract_meta(html, "twitter:image");
    if !twitter_image.is_empty() {
        push_unique(&mut screenshots, &twitter_image);
    }

    for captures in IMG_RE.captures_iter(html) {
        if screenshots.len() >= limits.max_screenshots {
            break;
        }
        let src = &captures[1];
        if is_content_image(src) {
            push_unique(&mut screenshots, src);
        }
    }

    // Filtering can be too aggressive on image-poor pages; relax it
    // before resorting to placeholders.
    if screenshots.is_empty() {
        for captures in IMG_RE.captures_iter(html) {
            if screenshots.len() >= limits.max_fallback {
                break;
            }
            push_unique(&mut screenshots, &captures[1]);
        }
    }

    if screenshots.is_empty() {
        screenshots.extend(placeholder_screenshots(limits));
    }

    screenshots.truncate(limits.max_screenshots);
    screenshots
}

/// Whether an `<img>` source looks like page content rather than
/// chrome (icons, logos, tracking pixels, tiny inline sources).
fn is_content_image(src: &str) -> bool {
    if src.len() < MIN_IMG_SRC_LEN {
        return false;
    }
    if src.ends_with(".svg") {
        return false;
    }
    !SKIP_SUBSTRINGS.iter().any(|skip| src.contains(skip))
}

/// Deterministic placeholder screenshot URLs, so downstream consumers
/// can rely on a non-empty list even for imageless pages.
fn placeholder_screenshots(limits: ScrapeLimits) -> Vec<String> {
    const SINGLE: [&str; 3] = [
        "https://via.placeholder.com/800x600/4F46E5/FFFFFF?text=Screenshot+1",
        "https://via.placeholder.com/800x600/7C3AED/FFFFFF?text=Screenshot+2",
        "https://via.placeholder.com/800x600/DC2626/FFFFFF?text=Screenshot+3",
    ];
    const BATCH: &str = "https://via.placeholder.com/800x600/4F46E5/FFFFFF?text=App+Screenshot";

    if limits.placeholder_count == 1 {
        vec![BATCH.to_string()]
    } else {
        SINGLE
            .iter()
            .take(limits.placeholder_count)
            .map(|s| s.to_string())
            .collect()
    }
}
