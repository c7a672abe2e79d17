use url::Url;

/// Resolves an href reference against a base URL and normalizes the result
///
/// Resolution follows standard RFC 3986 joining rules: absolute references
/// pass through, relative references are joined to the base's scheme, host,
/// and path. The query and fragment are stripped, so two hrefs that differ
/// only there normalize to the same URL — the string form of the result is
/// the deduplication key for the whole crawl.
///
/// Returns `None` when the reference is unusable: it cannot be joined, or
/// the result has no host (`mailto:`, `javascript:`, `tel:`, data URIs).
/// That is a filter outcome, not an error; callers discard it silently.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkscout::url::resolve_href;
///
/// let base = Url::parse("https://example.com/home").unwrap();
/// let resolved = resolve_href(&base, "/about?utm=1#top").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/about");
///
/// assert!(resolve_href(&base, "javascript:void(0)").is_none());
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let mut url = base.join(href).ok()?;
    url.set_fragment(None);

    // Cannot-be-a-base URLs (mailto:, javascript:, data:) have no host and
    // reject set_query; check before touching the query component.
    if url.host_str().map_or(true, |h| h.is_empty()) {
        return None;
    }
    url.set_query(None);

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/home").unwrap()
    }

    #[test]
    fn test_relative_href_joined_to_base() {
        let result = resolve_href(&base(), "/about").unwrap();
        assert_eq!(result.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_relative_sibling_path() {
        let result = resolve_href(&base(), "about").unwrap();
        assert_eq!(result.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let result = resolve_href(&base(), "https://other.com/x").unwrap();
        assert_eq!(result.as_str(), "https://other.com/x");
    }

    #[test]
    fn test_query_stripped() {
        let result = resolve_href(&base(), "/page?session=abc&x=1").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_stripped() {
        let result = resolve_href(&base(), "/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_query_and_fragment_variants_collapse() {
        let a = resolve_href(&base(), "/p?x=1").unwrap();
        let b = resolve_href(&base(), "/p#top").unwrap();
        let c = resolve_href(&base(), "/p").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_javascript_href_invalid() {
        assert!(resolve_href(&base(), "javascript:void(0)").is_none());
    }

    #[test]
    fn test_mailto_href_invalid() {
        assert!(resolve_href(&base(), "mailto:a@example.com").is_none());
    }

    #[test]
    fn test_tel_href_invalid() {
        assert!(resolve_href(&base(), "tel:+15551234567").is_none());
    }

    #[test]
    fn test_data_uri_invalid() {
        assert!(resolve_href(&base(), "data:text/plain,hello").is_none());
    }

    #[test]
    fn test_protocol_relative_href() {
        let result = resolve_href(&base(), "//cdn.example.com/lib.js").unwrap();
        assert_eq!(result.as_str(), "https://cdn.example.com/lib.js");
    }

    #[test]
    fn test_empty_href_resolves_to_base() {
        // An empty href joins back to the base page; deduplication keeps it
        // from being fetched again.
        let result = resolve_href(&base(), "").unwrap();
        assert_eq!(result.as_str(), "https://example.com/home");
    }
}
