use url::Url;

/// Whether a URL belongs to the crawled site or points to another site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Same site as the seed; eligible for further traversal
    Internal,
    /// Another site; recorded but never traversed
    External,
}

/// Classifies a normalized URL against the seed's domain
///
/// A URL is `Internal` iff its host contains `site_domain` as a substring.
/// This containment check is deliberately loose: `notexample.com` matches
/// domain `example.com`, and any subdomain matches. It reproduces the
/// behavior the rest of the crawl is specified against; a stricter
/// "equals or is a subdomain" rule would change which pages get traversed.
pub fn classify(url: &Url, site_domain: &str) -> LinkClass {
    match url.host_str() {
        Some(host) if host.contains(site_domain) => LinkClass::Internal,
        _ => LinkClass::External,
    }
}
