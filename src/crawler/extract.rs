//! Hyperlink extraction
//!
//! Pulls raw href values out of a page body. Parsing stays synchronous: the
//! scraper DOM is not `Send`, so it must never live across an await point in
//! the worker loop.

use scraper::{Html, Selector};

/// Extracts every non-empty `<a href>` value from an HTML body
///
/// Values are returned raw; resolution and validation happen later in the
/// filtering pipeline. Broken markup is handled leniently by the HTML5
/// parser and never fails.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if !href.is_empty() {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hrefs() {
        let html = r#"<html><body>
            <a href="/one">One</a>
            <a href="https://other.com/two">Two</a>
        </body></html>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/one", "https://other.com/two"]);
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a href="/real">Real</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/real"]);
    }

    #[test]
    fn test_skips_empty_href() {
        let html = r#"<a href="">Empty</a><a href="/x">X</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/x"]);
    }

    #[test]
    fn test_non_anchor_urls_ignored() {
        let html = r#"<img src="/pic.png"><link rel="stylesheet" href="/style.css"><script src="/app.js"></script>"#;
        // link[href] is not an anchor; only a[href] counts.
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_broken_markup_is_tolerated() {
        let html = r#"<html><body><a href="/ok">unclosed <div><a href="/also-ok""#;
        let hrefs = extract_hrefs(html);
        assert!(hrefs.contains(&"/ok".to_string()));
    }

    #[test]
    fn test_duplicate_hrefs_kept() {
        // Deduplication belongs to the registry, not the extractor.
        let html = r#"<a href="/p">a</a><a href="/p">b</a>"#;
        assert_eq!(extract_hrefs(html).len(), 2);
    }
}
