use chrono::{DateTime, Utc};

/// Site identifiers the backend crawls, in selector order.
pub(crate) const KNOWN_SITES: [&str; 4] = ["bobae", "ppomppu", "fmkorea", "dcinside"];

/// Category identifiers the backend assigns, in selector order.
pub(crate) const KNOWN_CATEGORIES: [&str; 5] =
    ["economy", "humor", "entertainment", "tech", "other"];

/// One aggregated community post as held by the controller.
///
/// Engagement counters are `None` when the backend omitted them; everywhere
/// they matter (sorting, card rendering) absent counts as zero. `crawled_at`
/// is `None` when the backend sent no timestamp or an unparseable one; such
/// posts order as oldest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub site: String,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub crawled_at: Option<DateTime<Utc>>,
}

/// Display name for a site badge; unmapped identifiers pass through raw.
pub fn site_display_name(site: &str) -> &str {
    match site {
        "bobae" => "보배드림",
        "ppomppu" => "뽐뿌",
        "fmkorea" => "fmkorea",
        "dcinside" => "디시인사이드",
        other => other,
    }
}

/// Abbreviated site name used on the exported static page.
pub(crate) fn site_short_name(site: &str) -> &str {
    match site {
        "bobae" => "보배",
        "ppomppu" => "뽐뿌",
        "fmkorea" => "에펨",
        "dcinside" => "디시",
        other => other,
    }
}

/// Display name for a category; unmapped identifiers pass through raw.
pub fn category_display_name(category: &str) -> &str {
    match category {
        "economy" => "경제/금융",
        "humor" => "유머",
        "entertainment" => "연예/스포츠",
        "tech" => "기술/IT",
        "other" => "기타",
        unmapped => unmapped,
    }
}
