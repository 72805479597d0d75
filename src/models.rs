//! Data models for search pages and extracted articles.
//!
//! Two shapes matter here:
//! - [`SearchPage`]: one page of the Naver news-search API response
//! - [`ExtractedArticle`]: the body text and metadata pulled out of one
//!   article page, the unit of the final JSON output
//!
//! The search API uses camelCase field names (`nextUrl`); serde renames keep
//! the Rust side snake_case.

use serde::{Deserialize, Serialize};

/// One page of search results from the news-search API.
///
/// Each entry in `contents` is a raw HTML fragment for a single search
/// result. `next_url` points at the next page of the same pagination chain;
/// an empty string means the chain is exhausted.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Raw HTML fragments, one per search result.
    pub contents: Vec<String>,
    /// URL of the next result page, or `""` when there is none.
    #[serde(rename = "nextUrl")]
    pub next_url: String,
}

/// Body text and metadata extracted from one article page.
///
/// The field set mirrors what the readability extractor reports: everything
/// except `url` and `text` is best-effort and may be absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractedArticle {
    /// The article URL the record was extracted from.
    pub url: String,
    /// Article headline.
    pub title: String,
    /// Byline, when the page declares one.
    pub author: Option<String>,
    /// Publication date/time as reported by the page metadata.
    pub date: Option<String>,
    /// Site name from page metadata.
    pub sitename: Option<String>,
    /// Short description or excerpt.
    pub description: Option<String>,
    /// Declared page language.
    pub language: Option<String>,
    /// The extracted body text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_deserialization() {
        let json = r#"{
            "contents": ["<div>one</div>", "<div>two</div>"],
            "nextUrl": "https://s.search.example/page2"
        }"#;

        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.contents.len(), 2);
        assert_eq!(page.next_url, "https://s.search.example/page2");
    }

    #[test]
    fn test_search_page_empty_next_url() {
        let json = r#"{"contents": [], "nextUrl": ""}"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert!(page.contents.is_empty());
        assert!(page.next_url.is_empty());
    }

    #[test]
    fn test_search_page_rejects_missing_next_url() {
        let json = r#"{"contents": []}"#;
        let page: Result<SearchPage, _> = serde_json::from_str(json);
        assert!(page.is_err());
    }

    #[test]
    fn test_extracted_article_serialization_keeps_non_ascii() {
        let article = ExtractedArticle {
            url: "https://news.example.com/a".to_string(),
            title: "반도체 수출 동향".to_string(),
            author: Some("홍길동".to_string()),
            date: None,
            sitename: Some("example news".to_string()),
            description: None,
            language: Some("ko".to_string()),
            text: "본문 내용".to_string(),
        };

        let json = serde_json::to_string(&article).unwrap();
        // serde_json leaves non-ASCII text unescaped
        assert!(json.contains("반도체 수출 동향"));
        assert!(json.contains("본문 내용"));
    }

    #[test]
    fn test_extracted_article_round_trip() {
        let article = ExtractedArticle {
            url: "https://news.example.com/a".to_string(),
            title: "Title".to_string(),
            author: None,
            date: Some("2024-01-01T09:00:00+09:00".to_string()),
            sitename: None,
            description: Some("desc".to_string()),
            language: None,
            text: "body".to_string(),
        };

        let json = serde_json::to_string(&article).unwrap();
        let back: ExtractedArticle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.url, article.url);
        assert_eq!(back.date.as_deref(), Some("2024-01-01T09:00:00+09:00"));
        assert_eq!(back.text, "body");
    }
}
