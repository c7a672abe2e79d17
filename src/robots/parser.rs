//! Robots.txt policy evaluator
//!
//! A deliberately minimal line-by-line evaluator: the first `User-agent:`
//! line opens the section, and every `Disallow:` directive from there to the
//! end of the document contributes a path prefix. The scan does not stop at
//! the next user-agent section, so disallow rules written for other agents
//! are also collected; that overreach is part of the contract the crawl is
//! specified against and is kept on purpose.

/// Disallow rules derived from a robots.txt document
///
/// Immutable once parsed. Absence of a document (unreachable host, non-2xx
/// status) is modeled as `Option::None` by callers and means "no
/// restriction".
#[derive(Debug, Clone, Default)]
pub struct RobotsPolicy {
    disallow: Vec<String>,
}

impl RobotsPolicy {
    /// Parses robots.txt content into a set of disallowed path prefixes
    ///
    /// Matching is case-sensitive and literal: a line must start with
    /// `User-agent: ` to open the section and `Disallow: ` to contribute a
    /// prefix. Directive values are trimmed; empty values are ignored (an
    /// empty `Disallow:` conventionally means allow-all). Malformed lines
    /// are skipped, never an error.
    pub fn parse(content: &str) -> Self {
        let mut disallow = Vec::new();
        let mut in_section = false;

        for line in content.lines() {
            let line = line.trim_end();
            if !in_section {
                if line.starts_with("User-agent: ") {
                    in_section = true;
                }
                continue;
            }
            if let Some(value) = line.strip_prefix("Disallow: ") {
                let prefix = value.trim();
                if !prefix.is_empty() {
                    disallow.push(prefix.to_string());
                }
            }
        }

        Self { disallow }
    }

    /// Decides whether a URL path may be fetched
    ///
    /// A path is disallowed iff it starts with any collected prefix
    /// (case-sensitive prefix match, no wildcard expansion).
    pub fn allows(&self, path: &str) -> bool {
        !self.disallow.iter().any(|prefix| path.starts_with(prefix))
    }

    /// The collected disallow prefixes, in document order
    pub fn disallowed_prefixes(&self) -> &[String] {
        &self.disallow
    }
}

/// Evaluates a possibly-absent policy for a path
///
/// An absent document always allows: a missing or unreachable robots.txt
/// means "no restriction".
pub fn is_allowed(policy: Option<&RobotsPolicy>, path: &str) -> bool {
    match policy {
        Some(policy) => policy.allows(path),
        None => true,
    }
}
