//! Result reporting and persistence
//!
//! Prints the aggregate summary and, when requested, writes the final URL
//! sets to `{domain}_internal.txt` and `{domain}_external.txt`. Set
//! iteration order is whatever the hash sets yield; the files are not
//! reproducible across runs and consumers must not depend on line order.

use crate::crawler::CrawlReport;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Prints the completion summary lines
pub fn print_summary(report: &CrawlReport) {
    println!("[+] Total Internal links: {}", report.internal.len());
    println!("[+] Total External links: {}", report.external.len());
    println!("[+] Total URLs: {}", report.total_urls());
    println!("[+] Total crawled URLs: {}", report.visited_count);
}

/// Persists both URL sets as newline-delimited text files
///
/// Files are written into `dir` and named after the crawled domain.
/// Returns the two paths written (internal first).
pub fn save_results(report: &CrawlReport, domain: &str, dir: &Path) -> io::Result<(PathBuf, PathBuf)> {
    let internal_path = dir.join(format!("{}_internal.txt", domain));
    let external_path = dir.join(format!("{}_external.txt", domain));

    write_url_set(&internal_path, &report.internal)?;
    write_url_set(&external_path, &report.external)?;

    Ok((internal_path, external_path))
}

fn write_url_set(path: &Path, urls: &HashSet<String>) -> io::Result<()> {
    let mut body = String::new();
    for url in urls {
        body.push_str(url.trim());
        body.push('\n');
    }
    fs::write(path, body)
}
