use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Wire shape of one post in the posts payload. Everything beyond the
/// identifying triple is optional; the backend omits fields it could not
/// crawl.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRecord {
    pub site: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default)]
    pub crawled_at: Option<String>,
}

/// Envelope of the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<PostRecord>,
}

/// Aggregate counters from the stats endpoint. The backend also reports a
/// per-category breakdown, which this client does not consume.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsResponse {
    pub total_posts: u64,
    #[serde(default)]
    pub by_site: BTreeMap<String, u64>,
}

/// Body of the crawl endpoint, returned for both outcomes; a failed crawl
/// carries `success: false` plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlResponse {
    pub success: bool,
    pub message: String,
}

/// Parses a backend timestamp. The backend emits naive ISO-8601 stamps that
/// are UTC by convention; full RFC 3339 stamps are accepted too. Anything
/// unparseable becomes `None` and the post sorts as oldest.
pub fn parse_crawled_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
