//! Result-entry link parsing.
//!
//! Each entry in a search page's `contents` array is a raw HTML fragment for
//! one result. The article URL lives on the title anchor, `a.news_tit`. The
//! markup shape is assumed fixed: a fragment without that anchor (or with a
//! href that is not an absolute URL) is a malformed entry and is reported as
//! an error rather than silently skipped.

use scraper::{Html, Selector};
use std::error::Error;
use url::Url;

/// Extract the article URL from one raw search-result fragment.
///
/// Locates the `a.news_tit` anchor and returns its `href` target. The href
/// must be an absolute URL.
///
/// # Errors
///
/// Returns an error if the anchor is missing, carries no `href`, or the href
/// does not parse as an absolute URL.
pub fn extract_article_url(fragment: &str) -> Result<String, Box<dyn Error>> {
    let document = Html::parse_fragment(fragment);
    let anchor_selector = Selector::parse("a.news_tit")?;

    let anchor = document
        .select(&anchor_selector)
        .next()
        .ok_or("result entry has no a.news_tit anchor")?;

    let href = anchor
        .value()
        .attr("href")
        .ok_or("news_tit anchor has no href attribute")?;

    let url = Url::parse(href)?;
    Ok(url.to_string())
}
