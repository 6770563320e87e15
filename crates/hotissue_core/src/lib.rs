//! Hot-issue core: pure state machine and view-model helpers.
mod effect;
mod export;
mod filter;
mod msg;
mod post;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use export::{build_static_page, escape_html};
pub use filter::{filter_and_sort, CategoryFilter, FilterState, SiteFilter, SortKey};
pub use msg::{CrawlOutcome, LoadError, Msg, SelectionMove};
pub use post::{category_display_name, site_display_name, Post};
pub use state::{
    AppState, InputMode, NoticeKind, StatsSummary, NOTICE_TICKS, PAGE_SIZE, POSTS_FETCH_LIMIT,
};
pub use update::update;
pub use view_model::{format_with_commas, AppViewModel, NoticeView, PostCardView, ANONYMOUS_AUTHOR};
