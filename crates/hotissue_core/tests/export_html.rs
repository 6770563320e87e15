use std::collections::BTreeMap;
use std::sync::Once;

use hotissue_core::{build_static_page, escape_html, Post, StatsSummary};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn post(site: &str, title: &str, url: &str) -> Post {
    Post {
        site: site.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        category: None,
        author: None,
        views: None,
        likes: None,
        comments: None,
        crawled_at: None,
    }
}

#[test]
fn escape_covers_all_five_metacharacters() {
    init_logging();
    assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn script_tags_in_titles_never_reach_the_page_raw() {
    init_logging();
    let posts = vec![post(
        "bobae",
        "<script>alert('x')</script>",
        "https://example.com/1",
    )];

    let page = build_static_page(&posts, None, None);

    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn urls_are_escaped_in_attribute_position() {
    init_logging();
    let posts = vec![post(
        "bobae",
        "link breakout",
        "https://example.com/?a=1&b=\"><script>",
    )];

    let page = build_static_page(&posts, None, None);

    assert!(!page.contains("b=\"><script>"));
    assert!(page.contains("href=\"https://example.com/?a=1&amp;b=&quot;&gt;&lt;script&gt;\""));
}

#[test]
fn counters_use_comma_grouping_and_hide_zeroes() {
    init_logging();
    let mut fixture = post("bobae", "busy", "https://example.com/1");
    fixture.views = Some(1_234_567);
    fixture.likes = Some(0);

    let page = build_static_page(&[fixture], None, None);

    assert!(page.contains("👀 1,234,567"));
    assert!(!page.contains("❤️"));
    assert!(!page.contains("💬"));
}

#[test]
fn badges_use_the_short_site_names() {
    init_logging();
    let posts = vec![
        post("bobae", "a", "https://example.com/1"),
        post("fmkorea", "b", "https://example.com/2"),
    ];

    let page = build_static_page(&posts, None, None);

    assert!(page.contains(">보배</span>"));
    assert!(page.contains(">에펨</span>"));
    assert!(page.contains("class=\"site-badge bobae\""));
}

#[test]
fn header_counts_posts_and_footer_stamps_the_update() {
    init_logging();
    let posts = vec![
        post("bobae", "a", "https://example.com/1"),
        post("bobae", "b", "https://example.com/2"),
    ];

    let page = build_static_page(&posts, None, Some("2025-07-01 12:00"));
    assert!(page.contains("총 2개의 인기 게시물"));
    assert!(page.contains("마지막 업데이트: 2025-07-01 12:00"));

    let page = build_static_page(&[], None, None);
    assert!(page.contains("총 0개의 인기 게시물"));
    assert!(page.contains("마지막 업데이트: N/A"));
}

#[test]
fn stats_line_lists_per_site_counts_when_available() {
    init_logging();
    let stats = StatsSummary {
        total_posts: 1_203,
        by_site: BTreeMap::from([("bobae".to_string(), 1_200), ("fmkorea".to_string(), 3)]),
    };

    let page = build_static_page(&[], Some(&stats), None);
    assert!(page.contains("보배 1,200 · 에펨 3"));

    let page = build_static_page(&[], None, None);
    assert!(!page.contains("·"));
}

#[test]
fn anonymous_posts_get_the_korean_fallback_label() {
    init_logging();
    let mut named = post("bobae", "named", "https://example.com/1");
    named.author = Some("writer".to_string());
    let unnamed = post("bobae", "unnamed", "https://example.com/2");

    let page = build_static_page(&[named, unnamed], None, None);

    assert!(page.contains("👤 writer"));
    assert!(page.contains("👤 익명"));
}
