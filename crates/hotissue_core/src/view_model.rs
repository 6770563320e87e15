use crate::filter::{CategoryFilter, SiteFilter, SortKey};
use crate::post::{category_display_name, site_display_name, Post};
use crate::state::{AppState, InputMode, NoticeKind};

/// Display label used when a post carries no author.
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// One post projected into display-ready card fields. Counter strings are
/// pre-abbreviated and present only when the underlying count is > 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardView {
    pub site: String,
    pub site_label: String,
    pub category_label: Option<String>,
    pub title: String,
    pub url: String,
    pub author: String,
    pub views: Option<String>,
    pub likes: Option<String>,
    pub comments: Option<String>,
}

/// A notice projected for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub text: String,
}

/// Deterministic projection of [`AppState`] for rendering. Contains only the
/// visible slice of the derived view plus the header/footer display fields;
/// the renderer never reads the state directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub cards: Vec<PostCardView>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_more: bool,
    pub selected: usize,
    pub site_label: String,
    pub category_label: String,
    pub sort_label: &'static str,
    pub search: String,
    pub input_mode: InputMode,
    pub loading: bool,
    pub notice: Option<NoticeView>,
    pub stats_total: Option<u64>,
    pub stats_by_site: Vec<(String, u64)>,
    pub last_updated: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState) -> Self {
        let filter = state.filter();
        let cards = state.filtered()[..state.visible_len()]
            .iter()
            .map(card_view)
            .collect();

        Self {
            cards,
            filtered_count: state.filtered().len(),
            total_count: state.posts().len(),
            has_more: state.has_more(),
            selected: state.selected(),
            site_label: match &filter.site {
                SiteFilter::All => "all".to_string(),
                SiteFilter::Site(id) => site_display_name(id).to_string(),
            },
            category_label: match &filter.category {
                CategoryFilter::All => "all".to_string(),
                CategoryFilter::Category(id) => category_display_name(id).to_string(),
            },
            sort_label: match filter.sort {
                SortKey::Latest => "latest",
                SortKey::Views => "most viewed",
                SortKey::Likes => "most liked",
            },
            search: filter.search.clone(),
            input_mode: state.input_mode(),
            loading: state.is_loading(),
            notice: state.notice().map(|notice| NoticeView {
                kind: notice.kind,
                text: sanitize_text(&notice.text),
            }),
            stats_total: state.stats().map(|stats| stats.total_posts),
            stats_by_site: state
                .stats()
                .map(|stats| {
                    stats
                        .by_site
                        .iter()
                        .map(|(site, count)| (site_display_name(site).to_string(), *count))
                        .collect()
                })
                .unwrap_or_default(),
            last_updated: state.last_updated().map(str::to_string),
            dirty: state.dirty(),
        }
    }
}

fn card_view(post: &Post) -> PostCardView {
    PostCardView {
        site: post.site.clone(),
        site_label: site_display_name(&post.site).to_string(),
        category_label: post
            .category
            .as_deref()
            .map(|category| category_display_name(category).to_string()),
        title: sanitize_text(&post.title),
        url: sanitize_text(&post.url),
        author: post
            .author
            .as_deref()
            .map(sanitize_text)
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
        views: shown_count(post.views),
        likes: shown_count(post.likes),
        comments: shown_count(post.comments),
    }
}

/// A counter is shown only when present and greater than zero.
fn shown_count(count: Option<u64>) -> Option<String> {
    count.filter(|count| *count > 0).map(format_count)
}

/// Large-number abbreviation: one decimal place plus M above a million, one
/// decimal place plus K above a thousand, plain digits below.
pub(crate) fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Thousands grouping for the exported static page and the stats panel.
pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Strips control characters from backend-supplied text so a hostile title
/// cannot inject terminal control sequences into the display.
pub(crate) fn sanitize_text(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}
