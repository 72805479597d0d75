//! Command-line interface definitions.
//!
//! All knobs of a crawl live here: output path, query terms, the inclusive
//! date range, worker-pool size, and the page-fetch retry budget.

use crate::search::NAVER_SEARCH_ENDPOINT;
use clap::Parser;

/// Command-line arguments for the crawler.
///
/// # Examples
///
/// ```sh
/// # Defaults: query 반도체, 2024.07.15 through 2024.08.15, news.json
/// naver_news_crawl
///
/// # Two OR-joined terms over a single day, 20 workers
/// naver_news_crawl -q dram -q hbm \
///     --start-date 2024.01.01 --end-date 2024.01.01 --num-workers 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON file the crawl writes
    #[arg(short, long, default_value = "news.json")]
    pub output_path: String,

    /// Query term; repeat the flag for multiple terms (joined with OR)
    #[arg(short, long, default_value = "반도체")]
    pub query: Vec<String>,

    /// First day of the crawl, inclusive (YYYY.MM.DD)
    #[arg(long, default_value = "2024.07.15")]
    pub start_date: String,

    /// Last day of the crawl, inclusive (YYYY.MM.DD)
    #[arg(long, default_value = "2024.08.15")]
    pub end_date: String,

    /// Number of concurrent article extractions per page batch
    #[arg(short, long, default_value_t = 10)]
    pub num_workers: usize,

    /// Total attempts per search page before giving up on that date
    #[arg(long, default_value_t = 5)]
    pub max_trials: usize,

    /// Seconds to wait between search-page attempts
    #[arg(long, default_value_t = 5)]
    pub retry_delay_secs: u64,

    /// Search API endpoint (override for testing against a stub)
    #[arg(long, default_value = NAVER_SEARCH_ENDPOINT, hide = true)]
    pub search_endpoint: String,
}
