//! The crawl driver.
//!
//! Iterates the requested date range; for each date, walks that date's
//! pagination chain (fetch page → parse result links → dispatch new URLs for
//! extraction) until the page's `nextUrl` is empty, then advances to the
//! next date. The only run-scoped state is the dedup set of every article
//! URL already dispatched; pagination state is date-scoped and starts fresh
//! per date.
//!
//! Fault isolation:
//! - a page fetch that exhausts its retries ends that date's chain, the run
//!   continues with the next date
//! - a malformed result entry aborts the current page's entry list and ends
//!   that date's chain
//! - a failed extraction only drops that one article; its URL still enters
//!   the dedup set and is never retried within the run

use crate::extract::ArticleExtractor;
use crate::links::extract_article_url;
use crate::models::ExtractedArticle;
use crate::search::{FetchSearchPage, initial_page_url};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};

/// Expand an inclusive `YYYY.MM.DD` date range into individual days.
///
/// An end date before the start date yields an empty range.
///
/// # Errors
///
/// Returns an error if either bound fails to parse.
pub fn date_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    let start = NaiveDate::parse_from_str(start, "%Y.%m.%d")?;
    let end = NaiveDate::parse_from_str(end, "%Y.%m.%d")?;

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day);
        day = day.succ_opt().ok_or("date range end overflows the calendar")?;
    }
    Ok(dates)
}

/// Drives the crawl: pagination, deduplication, and extraction dispatch.
///
/// Generic over the search-page fetcher so tests can script page sequences.
/// All driver state is mutated sequentially; extraction is the only
/// concurrent part and the driver waits for a whole batch before touching
/// the dedup set.
pub struct Crawler<F> {
    fetcher: F,
    extractor: ArticleExtractor,
    search_endpoint: String,
    num_workers: usize,
    seen_urls: HashSet<String>,
}

impl<F> Crawler<F>
where
    F: FetchSearchPage,
{
    pub fn new(
        fetcher: F,
        extractor: ArticleExtractor,
        search_endpoint: String,
        num_workers: usize,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            search_endpoint,
            num_workers: num_workers.max(1),
            seen_urls: HashSet::new(),
        }
    }

    /// Every article URL dispatched for extraction so far, including ones
    /// whose extraction failed.
    pub fn seen_urls(&self) -> &HashSet<String> {
        &self.seen_urls
    }

    /// Crawl every date in `dates` and return the collected articles.
    ///
    /// Always completes: per-date and per-article failures are logged and
    /// contained, never surfaced as a run-level error.
    #[instrument(level = "info", skip_all, fields(dates = dates.len(), num_workers = self.num_workers))]
    pub async fn crawl(
        &mut self,
        query: &[String],
        dates: &[NaiveDate],
    ) -> Vec<ExtractedArticle> {
        let mut crawled: Vec<ExtractedArticle> = Vec::new();

        for &date in dates {
            let mut next_url = initial_page_url(&self.search_endpoint, query, date);
            let mut pages = 0usize;

            while !next_url.is_empty() {
                let page = match self.fetcher.fetch_page(&next_url).await {
                    Ok(page) => page,
                    Err(e) => {
                        warn!(%date, error = %e, "Page fetch gave up; ending this date's pagination");
                        break;
                    }
                };
                pages += 1;

                let candidates = match collect_candidate_urls(&page.contents) {
                    Ok(urls) => urls,
                    Err(e) => {
                        error!(%date, error = %e, "Malformed result entry; abandoning page");
                        break;
                    }
                };

                // New URLs only; within-page duplicates collapse too, so a
                // URL is dispatched at most once per run
                let mut batch: Vec<String> = Vec::new();
                for url in &candidates {
                    if !self.seen_urls.contains(url) && !batch.contains(url) {
                        batch.push(url.clone());
                    }
                }

                debug!(
                    %date,
                    page = pages,
                    entries = page.contents.len(),
                    new_urls = batch.len(),
                    "Dispatching page batch"
                );

                let extractor = self.extractor.clone();
                let results: Vec<Option<ExtractedArticle>> = stream::iter(batch.clone())
                    .map(|url| {
                        let extractor = extractor.clone();
                        async move {
                            match extractor.extract(&url).await {
                                Ok(article) => Some(article),
                                Err(e) => {
                                    warn!(%url, error = %e, "Extraction failed; skipping article");
                                    None
                                }
                            }
                        }
                    })
                    .buffer_unordered(self.num_workers)
                    .collect()
                    .await;

                let before = crawled.len();
                crawled.extend(results.into_iter().flatten());

                // Failed URLs enter the set too and are never retried this run
                self.seen_urls.extend(candidates);

                info!(
                    %date,
                    page = pages,
                    dispatched = batch.len(),
                    extracted = crawled.len() - before,
                    "Page batch complete"
                );

                next_url = page.next_url;
            }

            info!(%date, pages, total_articles = crawled.len(), "Date complete");
        }

        crawled
    }
}

/// Parse every result entry of a page into its article URL.
///
/// The first malformed entry aborts the whole page's entry list.
fn collect_candidate_urls(contents: &[String]) -> Result<Vec<String>, Box<dyn Error>> {
    let mut urls = Vec::with_capacity(contents.len());
    for fragment in contents {
        urls.push(extract_article_url(fragment)?);
    }
    Ok(urls)
}
