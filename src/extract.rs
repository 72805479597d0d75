//! Article body and metadata extraction.
//!
//! Fetches one article page and runs a readability pass (`dom_smoothie`) over
//! it to pull out the body text and whatever metadata the page declares.
//!
//! One bad article must never abort a crawl, so every failure mode (network
//! error, non-2xx status, extractor rejection, empty body) is an explicit
//! `Err` carrying the reason. The driver logs it and moves to the next URL.

use crate::models::ExtractedArticle;
use dom_smoothie::{Config, Readability};
use std::error::Error;
use tracing::{debug, instrument};

/// Fetches article pages and extracts their body text and metadata.
///
/// Wraps a shared `reqwest::Client`, so clones are cheap and safe to hand to
/// concurrent extraction tasks.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    http: reqwest::Client,
}

impl ArticleExtractor {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch `url` and extract its article content.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport failure, non-2xx status, readability
    /// rejection, or when the extracted body text is empty.
    #[instrument(level = "debug", skip_all, fields(%url))]
    pub async fn extract(&self, url: &str) -> Result<ExtractedArticle, Box<dyn Error>> {
        let html = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let article = extract_from_html(&html, url)?;
        debug!(bytes = article.text.len(), title = %article.title, "Extracted article");
        Ok(article)
    }
}

/// Run the readability pass over already-fetched HTML.
///
/// Split out from the fetch so it can be exercised without a network.
pub fn extract_from_html(html: &str, url: &str) -> Result<ExtractedArticle, Box<dyn Error>> {
    let cfg = Config {
        max_elements_to_parse: 9000,
        ..Default::default()
    };

    let mut readability = Readability::new(html, Some(url), Some(cfg))?;
    let article = readability.parse()?;

    let text = article.text_content.trim().to_string();
    if text.is_empty() {
        return Err(format!("no body text extracted from {url}").into());
    }

    Ok(ExtractedArticle {
        url: url.to_string(),
        title: article.title.to_string(),
        author: article.byline.map(|v| v.to_string()),
        date: article.published_time.map(|v| v.to_string()),
        sitename: article.site_name.map(|v| v.to_string()),
        description: article.excerpt.map(|v| v.to_string()),
        language: article.lang.map(|v| v.to_string()),
        text,
    })
}
