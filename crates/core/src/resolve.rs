//! Resolution of URLs found in markup against the page they came from.
//!
//! Markup routinely contains absolute, protocol-relative, root-relative,
//! and path-relative URLs. [`resolve_url`] normalizes all four forms to
//! an absolute URL so screenshot lists can be deduplicated and handed to
//! the renderer directly.

use url::Url;

/// Resolve a possibly-relative URL string against the page's own URL.
///
/// Rules, in order:
/// - already absolute (`http://` / `https://`) -- returned unchanged;
/// - protocol-relative (`//host/path`) -- the base page's scheme is
///   prepended;
/// - root-relative (`/path`) -- the base scheme and host are prepended;
/// - anything else -- standard relative resolution against the base.
///
/// Malformed input never fails the caller: if resolution is impossible
/// the original string is returned unchanged.
pub fn resolve_url(raw: &str, base: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    let Ok(base_url) = Url::parse(base) else {
        return raw.to_string();
    };

    if raw.starts_with("//") {
        return format!("{}:{raw}", base_url.scheme());
    }

    if raw.starts_with('/') {
        let Some(host) = base_url.host_str() else {
            return raw.to_string();
        };
        let port = base_url
            .port()
            .map(|p| format!(":{p}"))
            .unwrap_or_default();
        return format!("{}://{host}{port}{raw}", base_url.scheme());
    }

    match base_url.join(raw) {
        Ok(joined) => joined.to_string(),
        Err(_) => raw.to_string(),
    }
}
