//! Linkscout command-line entry point

use anyhow::Context;
use clap::{Parser, ValueEnum};
use linkscout::config::CrawlConfig;
use linkscout::crawler::crawl;
use linkscout::output::{print_summary, save_results};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const BANNER: &str = r"
=============================================
  linkscout :: bounded site link crawler
=============================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SaveChoice {
    Yes,
    No,
}

/// Linkscout: map a site's internal and external links
///
/// Crawls outward from a seed URL up to a URL budget and depth limit,
/// classifying every discovered link as internal or external to the seed's
/// domain while respecting robots.txt.
#[derive(Parser, Debug)]
#[command(name = "linkscout")]
#[command(version = "1.0.0")]
#[command(about = "A bounded, concurrent site link crawler", long_about = None)]
struct Cli {
    /// The URL to extract links from
    url: String,

    /// Number of max URLs to crawl
    #[arg(short = 'm', long, default_value_t = 30)]
    max_urls: usize,

    /// Max depth to crawl
    #[arg(short = 'd', long, default_value_t = 3)]
    max_depth: u32,

    /// Number of worker tasks to use
    #[arg(short = 't', long, default_value_t = 4)]
    threads: usize,

    /// Save results to files
    #[arg(short = 's', long, value_enum, default_value_t = SaveChoice::No)]
    save: SaveChoice,

    /// Custom User-Agent to use for requests
    #[arg(short = 'a', long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();
    println!("{}", BANNER);

    let cli = Cli::parse();

    // Every outcome, including a bad seed, is reported and exits 0; the
    // crawl itself has no fatal error path.
    if let Err(e) = run(cli).await {
        eprintln!("[!] {:#}", e);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CrawlConfig::new(
        &cli.url,
        cli.max_urls,
        cli.max_depth,
        cli.threads,
        cli.save == SaveChoice::Yes,
        cli.user_agent,
    )?;
    let site_domain = config.site_domain.clone();
    let save_results_requested = config.save_results;

    let report = crawl(config).await?;

    if save_results_requested {
        let (internal_path, external_path) =
            save_results(&report, &site_domain, Path::new("."))
                .context("failed to save result files")?;
        tracing::info!(
            "Saved results to {} and {}",
            internal_path.display(),
            external_path.display()
        );
    }

    print_summary(&report);
    println!("[+] Crawling completed in {:.2?}", report.elapsed);

    Ok(())
}

/// Initializes the tracing subscriber
///
/// Diagnostics default to warnings only so they stay out of the way of the
/// progress lines; RUST_LOG overrides as usual.
fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkscout=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
