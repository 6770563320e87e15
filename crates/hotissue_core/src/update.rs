use crate::export::build_static_page;
use crate::state::POSTS_FETCH_LIMIT;
use crate::{AppState, Effect, Msg, NoticeKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.set_loading(true);
            vec![
                Effect::LoadPosts {
                    limit: POSTS_FETCH_LIMIT,
                },
                Effect::LoadStats,
            ]
        }
        Msg::PostsLoaded { result, fetched_at } => {
            state.set_loading(false);
            match result {
                Ok(posts) => state.replace_posts(posts, fetched_at),
                // Transport details are already logged; the user sees a
                // generic failure and keeps the previous snapshot.
                Err(_) => state.raise_notice(NoticeKind::Error, "Failed to load posts".into()),
            }
            Vec::new()
        }
        Msg::StatsLoaded(result) => {
            // A stats failure never interrupts browsing; the sidebar just
            // keeps its previous numbers.
            if let Ok(stats) = result {
                state.set_stats(stats);
            }
            Vec::new()
        }
        Msg::RefreshRequested => {
            if state.is_loading() {
                return (state, Vec::new());
            }
            state.set_loading(true);
            vec![Effect::TriggerCrawl]
        }
        Msg::CrawlFinished(result) => match result {
            Ok(outcome) if outcome.success => {
                state.raise_notice(NoticeKind::Info, outcome.message);
                vec![
                    Effect::LoadPosts {
                        limit: POSTS_FETCH_LIMIT,
                    },
                    Effect::LoadStats,
                ]
            }
            Ok(outcome) => {
                state.set_loading(false);
                state.raise_notice(NoticeKind::Error, outcome.message);
                Vec::new()
            }
            Err(_) => {
                state.set_loading(false);
                state.raise_notice(NoticeKind::Error, "Failed to refresh data".into());
                Vec::new()
            }
        },
        Msg::SiteFilterCycled => {
            state.cycle_site();
            Vec::new()
        }
        Msg::CategoryFilterCycled => {
            state.cycle_category();
            Vec::new()
        }
        Msg::SortCycled => {
            state.cycle_sort();
            Vec::new()
        }
        Msg::SearchStarted => {
            state.enter_search();
            Vec::new()
        }
        Msg::SearchCharTyped(ch) => {
            state.push_search_char(ch);
            Vec::new()
        }
        Msg::SearchBackspaced => {
            state.pop_search_char();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            state.leave_search(true);
            Vec::new()
        }
        Msg::SearchCancelled => {
            state.leave_search(false);
            Vec::new()
        }
        Msg::SelectionMoved(direction) => {
            state.move_selection(direction);
            Vec::new()
        }
        Msg::LoadMoreRequested => {
            state.advance_page();
            Vec::new()
        }
        Msg::OpenSelected => match state.selected_url() {
            Some(url) => vec![Effect::OpenUrl { url }],
            None => Vec::new(),
        },
        Msg::ExportRequested => {
            let html = build_static_page(state.filtered(), state.stats(), state.last_updated());
            vec![Effect::WriteExport { html }]
        }
        Msg::ExportFinished(result) => {
            match result {
                Ok(path) => state.raise_notice(
                    NoticeKind::Info,
                    format!("Static page written to {path}"),
                ),
                Err(_) => {
                    state.raise_notice(NoticeKind::Error, "Failed to write static page".into());
                }
            }
            Vec::new()
        }
        Msg::EscapePressed => {
            if !state.dismiss_notice() {
                state.request_quit();
            }
            Vec::new()
        }
        Msg::QuitRequested => {
            state.request_quit();
            Vec::new()
        }
        Msg::Tick => {
            state.tick_notice();
            Vec::new()
        }
    };

    (state, effects)
}
