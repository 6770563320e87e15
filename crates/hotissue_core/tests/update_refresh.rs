use std::sync::Once;

use hotissue_core::{
    update, AppState, CrawlOutcome, Effect, LoadError, Msg, NoticeKind, POSTS_FETCH_LIMIT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

#[test]
fn refresh_triggers_a_crawl() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RefreshRequested);

    assert!(state.view().loading);
    assert_eq!(effects, vec![Effect::TriggerCrawl]);
}

#[test]
fn refresh_is_ignored_while_a_load_is_in_flight() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::Started);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::RefreshRequested);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn successful_crawl_reloads_posts_and_stats() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefreshRequested);

    let outcome = CrawlOutcome {
        success: true,
        message: "크롤링 완료: 57개 수집".to_string(),
    };
    let (state, effects) = update(state, Msg::CrawlFinished(Ok(outcome)));
    let view = state.view();

    // The reload is still in flight, so loading stays up.
    assert!(view.loading);
    let notice = view.notice.expect("crawl completion should raise a notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.text, "크롤링 완료: 57개 수집");
    assert_eq!(
        effects,
        vec![
            Effect::LoadPosts {
                limit: POSTS_FETCH_LIMIT,
            },
            Effect::LoadStats,
        ]
    );
}

#[test]
fn logical_crawl_failure_surfaces_the_backend_message() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefreshRequested);

    let outcome = CrawlOutcome {
        success: false,
        message: "크롤링 실패".to_string(),
    };
    let (state, effects) = update(state, Msg::CrawlFinished(Ok(outcome)));
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    let notice = view.notice.expect("crawl failure should raise a notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "크롤링 실패");
}

#[test]
fn transport_crawl_failure_uses_a_generic_message() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefreshRequested);

    let (state, effects) = update(
        state,
        Msg::CrawlFinished(Err(LoadError::new("timed out"))),
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    let notice = view.notice.expect("crawl failure should raise a notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Failed to refresh data");
}

#[test]
fn refresh_is_allowed_again_after_the_cycle_completes() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::RefreshRequested);
    let outcome = CrawlOutcome {
        success: true,
        message: "done".to_string(),
    };
    let (state, _) = update(state, Msg::CrawlFinished(Ok(outcome)));
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            result: Ok(Vec::new()),
            fetched_at: "2025-07-01 12:00".to_string(),
        },
    );
    assert!(!state.view().loading);

    let (_state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::TriggerCrawl]);
}
