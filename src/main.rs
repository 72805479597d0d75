//! # Naver News Crawl
//!
//! Crawls Naver news-search results for a keyword query over an inclusive
//! date range, extracts the body text and metadata of every linked article,
//! and writes the collection to a single JSON file.
//!
//! ## Usage
//!
//! ```sh
//! naver_news_crawl -q 반도체 --start-date 2024.07.15 --end-date 2024.08.15
//! ```
//!
//! ## Architecture
//!
//! The crawl is a per-date loop over pagination chains:
//! 1. **Fetch**: GET one search page (JSON), with bounded fixed-delay retry
//! 2. **Parse**: pull the article URL out of each raw result fragment
//! 3. **Dispatch**: extract new URLs concurrently (`--num-workers` at a time)
//! 4. **Advance**: follow `nextUrl` until it is empty, then move to the next
//!    date
//!
//! URLs are deduplicated across the whole run; a URL is dispatched for
//! extraction at most once. Per-article failures are logged and skipped,
//! never fatal. Ctrl-C terminates the process immediately (no handler is
//! installed), so an interrupted run writes no output file.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod crawler;
mod extract;
mod links;
mod models;
mod output;
mod search;

use cli::Cli;
use crawler::{Crawler, date_range};
use extract::ArticleExtractor;
use search::{HttpSearchClient, RetryFetch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("naver_news_crawl starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let dates = date_range(&args.start_date, &args.end_date)?;
    info!(
        start = %args.start_date,
        end = %args.end_date,
        days = dates.len(),
        query = ?args.query,
        "Crawl range resolved"
    );

    let http = reqwest::Client::new();
    let fetcher = RetryFetch::new(
        HttpSearchClient::new(http.clone()),
        args.max_trials,
        Duration::from_secs(args.retry_delay_secs),
    );
    let extractor = ArticleExtractor::new(http);

    let mut crawler = Crawler::new(
        fetcher,
        extractor,
        args.search_endpoint.clone(),
        args.num_workers,
    );
    let articles = crawler.crawl(&args.query, &dates).await;

    info!(
        articles = articles.len(),
        urls_seen = crawler.seen_urls().len(),
        "Crawl complete"
    );

    output::write_articles(&args.output_path, &articles).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
