//! Search-page fetching with bounded fixed-delay retry.
//!
//! One pagination step is one HTTP GET against the news-search API, decoded
//! as JSON into a [`SearchPage`]. The module uses a trait-based design:
//!
//! - [`FetchSearchPage`]: core trait for fetching one page
//! - [`HttpSearchClient`]: `reqwest`-backed implementation
//! - [`RetryFetch`]: decorator that adds retry logic to any
//!   `FetchSearchPage` implementation
//!
//! # Retry Strategy
//!
//! A fixed delay between attempts, up to `max_trials` total attempts.
//! Exhausting the attempts surfaces the last error to the caller, which ends
//! that date's pagination chain without failing the run.

use crate::models::SearchPage;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{instrument, warn};

/// Default endpoint of the Naver news-search API.
pub const NAVER_SEARCH_ENDPOINT: &str = "https://s.search.naver.com/p/newssearch/search.naver";

/// Build the first page URL of a pagination chain for one date.
///
/// The query terms are OR-joined and percent-encoded; the date filter uses
/// the same day for both ends of the range, rendered as `YYYYMMDD`. The
/// remaining parameters pin the search scope to the news tab.
pub fn initial_page_url(endpoint: &str, query: &[String], date: NaiveDate) -> String {
    let encoded_query = urlencoding::encode(&query.join(" OR ")).into_owned();
    let date_str = date.format("%Y%m%d");
    format!(
        "{endpoint}?query={encoded_query}&sort=0related=0&\
         nso=so%3Ar%2Cp%3Afrom{date_str}to{date_str},a:all&where=news_tab_api"
    )
}

/// Trait for fetching one search-result page.
///
/// Implementors take a fully built page URL and return the decoded page.
/// The abstraction exists so retry logic can wrap any fetcher and so tests
/// can script page sequences without a network.
pub trait FetchSearchPage {
    /// Fetch and decode the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, Box<dyn Error>>;
}

/// `reqwest`-backed search-page fetcher.
///
/// A non-2xx status is treated the same as a transport failure, so the retry
/// decorator sees both classes uniformly.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl FetchSearchPage for HttpSearchClient {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, Box<dyn Error>> {
        let page = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchPage>()
            .await?;
        Ok(page)
    }
}

/// Decorator that adds fixed-delay retry to any [`FetchSearchPage`].
///
/// `max_trials` counts total attempts, not retries after the first: with
/// `max_trials = 3` the wrapped fetcher is called at most three times, with
/// `delay` slept between consecutive attempts.
pub struct RetryFetch<T> {
    inner: T,
    max_trials: usize,
    delay: Duration,
}

impl<T> RetryFetch<T>
where
    T: FetchSearchPage,
{
    pub fn new(inner: T, max_trials: usize, delay: Duration) -> Self {
        // A zero trial budget would never issue a request
        let max_trials = max_trials.max(1);
        Self {
            inner,
            max_trials,
            delay,
        }
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_trials", &self.max_trials)
            .field("delay", &self.delay)
            .finish()
    }
}

impl<T> FetchSearchPage for RetryFetch<T>
where
    T: FetchSearchPage,
{
    #[instrument(level = "debug", skip_all)]
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, Box<dyn Error>> {
        let total_t0 = Instant::now();

        for attempt in 1..=self.max_trials {
            match self.inner.fetch_page(url).await {
                Ok(page) => return Ok(page),
                Err(e) => {
                    if attempt == self.max_trials {
                        warn!(
                            attempt,
                            max_trials = self.max_trials,
                            elapsed_ms_total = total_t0.elapsed().as_millis() as u64,
                            error = %e,
                            "search page fetch exhausted trials"
                        );
                        return Err(e);
                    }
                    warn!(
                        attempt,
                        max_trials = self.max_trials,
                        delay_ms = self.delay.as_millis() as u64,
                        error = %e,
                        "search page fetch failed; waiting before retry"
                    );
                    sleep(self.delay).await;
                }
            }
        }
        unreachable!("loop returns on the final attempt")
    }
}
