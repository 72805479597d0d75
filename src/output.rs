//! JSON output for the crawled articles.
//!
//! The whole run produces a single file: a JSON array of every successfully
//! extracted article, written once at the end. `serde_json` emits non-ASCII
//! text as-is, so Korean article bodies survive the round trip untouched.

use crate::models::ExtractedArticle;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write the collected articles to `path` as one JSON array.
///
/// Creates the parent directory if it does not exist yet.
#[instrument(level = "info", skip_all, fields(%path, count = articles.len()))]
pub async fn write_articles(
    path: &str,
    articles: &[ExtractedArticle],
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(articles)?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, json).await?;
    info!(%path, count = articles.len(), "Wrote crawled articles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article(url: &str, text: &str) -> ExtractedArticle {
        ExtractedArticle {
            url: url.to_string(),
            title: "제목".to_string(),
            author: None,
            date: None,
            sitename: None,
            description: None,
            language: Some("ko".to_string()),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_write_articles_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("naver_news_crawl_out_{}.json", std::process::id()));
        let path_str = path.to_str().unwrap();

        let articles = vec![
            sample_article("https://news.example.com/a", "반도체 시장 동향"),
            sample_article("https://news.example.com/b", "두 번째 기사"),
        ];

        write_articles(path_str, &articles).await.unwrap();

        let written = tokio::fs::read_to_string(path_str).await.unwrap();
        // Non-ASCII text is written verbatim, not \u-escaped
        assert!(written.contains("반도체 시장 동향"));

        let back: Vec<ExtractedArticle> = serde_json::from_str(&written).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].url, "https://news.example.com/b");

        let _ = tokio::fs::remove_file(path_str).await;
    }

    #[tokio::test]
    async fn test_write_articles_creates_parent_dir() {
        let dir = std::env::temp_dir()
            .join(format!("naver_news_crawl_dir_{}", std::process::id()));
        let path = dir.join("nested").join("news.json");
        let path_str = path.to_str().unwrap();

        write_articles(path_str, &[]).await.unwrap();

        let written = tokio::fs::read_to_string(path_str).await.unwrap();
        assert_eq!(written, "[]");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
