//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs. The client is served
//! by the same server it talks to, so the base defaults to the page origin.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - `[api].base` from the client config when it is set
/// - otherwise the page origin like "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = config().api.base.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    page_origin()
}

/// Origin of the current page, empty outside a browser.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/user_files");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Percent-encode one path segment, leaving the same characters unescaped as
/// JavaScript's `encodeURIComponent` (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
pub fn encode_uri_component(segment: &str) -> String {
    urlencoding::encode(segment)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Resolve a server-provided reference against `base`.
///
/// Absolute `http(s)` references are returned untouched; anything else is
/// treated as a path on `base`.
pub fn join_url(base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    if reference.starts_with('/') {
        format!("{}{}", base, reference)
    } else {
        format!("{}/{}", base, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Q3 plan.pdf"), "Q3%20plan.pdf");
        assert_eq!(encode_uri_component("a/b?c&d"), "a%2Fb%3Fc%26d");
        assert_eq!(encode_uri_component("it's (final)!*~.pptx"), "it's%20(final)!*~.pptx");
        assert_eq!(encode_uri_component("résumé.pdf"), "r%C3%A9sum%C3%A9.pdf");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://docs.example.com", "/static/outputs/a.pdf"),
            "https://docs.example.com/static/outputs/a.pdf"
        );
        assert_eq!(join_url("", "/query"), "/query");
        assert_eq!(join_url("http://h", "x.pdf"), "http://h/x.pdf");
        assert_eq!(
            join_url("http://h", "https://cdn.example.com/a.mp3"),
            "https://cdn.example.com/a.mp3"
        );
    }
}
