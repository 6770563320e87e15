use std::sync::Once;

use hotissue_core::{update, AppState, Msg, Post, PostCardView, ANONYMOUS_AUTHOR};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn card_for(post: Post) -> PostCardView {
    let (state, _) = update(
        AppState::new(),
        Msg::PostsLoaded {
            result: Ok(vec![post]),
            fetched_at: "2025-07-01 12:00".to_string(),
        },
    );
    state.view().cards.remove(0)
}

fn post(site: &str, title: &str) -> Post {
    Post {
        site: site.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{site}"),
        category: None,
        author: None,
        views: None,
        likes: None,
        comments: None,
        crawled_at: None,
    }
}

#[test]
fn counters_are_abbreviated_for_display() {
    init_logging();
    let mut fixture = post("bobae", "busy thread");
    fixture.views = Some(2_300_000);
    fixture.likes = Some(1_500);
    fixture.comments = Some(999);

    let card = card_for(fixture);

    assert_eq!(card.views.as_deref(), Some("2.3M"));
    assert_eq!(card.likes.as_deref(), Some("1.5K"));
    assert_eq!(card.comments.as_deref(), Some("999"));
}

#[test]
fn a_thousand_exactly_is_abbreviated() {
    init_logging();
    let mut fixture = post("bobae", "round number");
    fixture.views = Some(1_000);

    assert_eq!(card_for(fixture).views.as_deref(), Some("1.0K"));
}

#[test]
fn zero_and_missing_counters_are_hidden() {
    init_logging();
    let mut fixture = post("bobae", "quiet thread");
    fixture.views = Some(0);

    let card = card_for(fixture);

    assert_eq!(card.views, None);
    assert_eq!(card.likes, None);
    assert_eq!(card.comments, None);
}

#[test]
fn missing_author_falls_back_to_anonymous() {
    init_logging();
    let card = card_for(post("bobae", "no byline"));
    assert_eq!(card.author, ANONYMOUS_AUTHOR);
}

#[test]
fn site_badge_uses_the_display_table() {
    init_logging();
    assert_eq!(card_for(post("bobae", "a")).site_label, "보배드림");
    assert_eq!(card_for(post("dcinside", "b")).site_label, "디시인사이드");

    // Unknown identifiers pass through so new sites degrade gracefully.
    assert_eq!(card_for(post("reddit", "c")).site_label, "reddit");
}

#[test]
fn category_label_maps_known_identifiers() {
    init_logging();
    let mut fixture = post("bobae", "market wrap");
    fixture.category = Some("economy".to_string());

    assert_eq!(card_for(fixture).category_label.as_deref(), Some("경제/금융"));
    assert_eq!(card_for(post("bobae", "untagged")).category_label, None);
}

#[test]
fn control_characters_are_stripped_from_display_text() {
    init_logging();
    let mut fixture = post("bobae", "bad\u{1b}[2Jtitle");
    fixture.author = Some("eve\u{7}".to_string());

    let card = card_for(fixture);

    assert_eq!(card.title, "bad[2Jtitle");
    assert_eq!(card.author, "eve");
}
