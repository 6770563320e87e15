use std::collections::BTreeMap;

use crate::filter::{filter_and_sort, FilterState};
use crate::msg::SelectionMove;
use crate::post::Post;
use crate::view_model::AppViewModel;

/// Number of cards added to the visible slice per load-more.
pub const PAGE_SIZE: usize = 20;

/// Upper bound requested from the posts endpoint; pagination beyond it is
/// entirely client-side over this batch.
pub const POSTS_FETCH_LIMIT: u32 = 100;

/// Ticks a notice stays on screen before it ages out.
pub const NOTICE_TICKS: u8 = 20;

/// Keyboard interpretation mode for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Severity of a status-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) text: String,
    pub(crate) ttl: u8,
}

/// Aggregate counters reported by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSummary {
    pub total_posts: u64,
    pub by_site: BTreeMap<String, u64>,
}

/// The controller state: one owned snapshot of posts, the derived view, the
/// pagination cursor, and the display fields. All mutation goes through the
/// named entry points called from `update`; the shell only reads projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    posts: Vec<Post>,
    filtered: Vec<Post>,
    filter: FilterState,
    page: usize,
    selected: usize,
    input_mode: InputMode,
    loading: bool,
    notice: Option<Notice>,
    stats: Option<StatsSummary>,
    last_updated: Option<String>,
    quit: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            filtered: Vec::new(),
            filter: FilterState::default(),
            page: 1,
            selected: 0,
            input_mode: InputMode::default(),
            loading: false,
            notice: None,
            stats: None,
            last_updated: None,
            quit: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self)
    }

    /// Returns the dirty flag and clears it; the shell gates rendering on it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recomputes the derived view from the snapshot and the current filter,
    /// and resets the pagination cursor and selection to the top.
    fn rederive(&mut self) {
        self.filtered = filter_and_sort(&self.posts, &self.filter);
        self.page = 1;
        self.selected = 0;
        self.mark_dirty();
    }

    pub(crate) fn visible_len(&self) -> usize {
        (self.page * PAGE_SIZE).min(self.filtered.len())
    }

    pub(crate) fn has_more(&self) -> bool {
        self.page * PAGE_SIZE < self.filtered.len()
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.mark_dirty();
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the snapshot wholesale and recomputes the derived view.
    pub(crate) fn replace_posts(&mut self, posts: Vec<Post>, fetched_at: String) {
        self.posts = posts;
        self.last_updated = Some(fetched_at);
        self.rederive();
    }

    pub(crate) fn set_stats(&mut self, stats: StatsSummary) {
        self.stats = Some(stats);
        self.mark_dirty();
    }

    pub(crate) fn cycle_site(&mut self) {
        self.filter.site = self.filter.site.cycled();
        self.rederive();
    }

    pub(crate) fn cycle_category(&mut self) {
        self.filter.category = self.filter.category.cycled();
        self.rederive();
    }

    pub(crate) fn cycle_sort(&mut self) {
        self.filter.sort = self.filter.sort.cycled();
        self.rederive();
    }

    pub(crate) fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.mark_dirty();
    }

    /// Leaves search-input mode; `keep` retains the search text, otherwise
    /// it is cleared. The view is recomputed either way.
    pub(crate) fn leave_search(&mut self, keep: bool) {
        self.input_mode = InputMode::Normal;
        if !keep {
            self.filter.search.clear();
        }
        self.rederive();
    }

    pub(crate) fn push_search_char(&mut self, ch: char) {
        self.filter.search.push(ch);
        self.rederive();
    }

    pub(crate) fn pop_search_char(&mut self) {
        self.filter.search.pop();
        self.rederive();
    }

    /// Extends the visible slice by one page. Returns false (and changes
    /// nothing) when the whole derived view is already visible.
    pub(crate) fn advance_page(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        self.mark_dirty();
        true
    }

    /// Moves the selection within the visible slice, clamped at both ends.
    pub(crate) fn move_selection(&mut self, direction: SelectionMove) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = match direction {
            SelectionMove::Up => self.selected.saturating_sub(1),
            SelectionMove::Down => (self.selected + 1).min(len - 1),
            SelectionMove::Top => 0,
            SelectionMove::Bottom => len - 1,
        };
        if next != self.selected {
            self.selected = next;
            self.mark_dirty();
        }
    }

    /// URL of the selected post, if the visible slice is non-empty.
    pub(crate) fn selected_url(&self) -> Option<String> {
        self.filtered
            .get(self.selected)
            .filter(|_| self.selected < self.visible_len())
            .map(|post| post.url.clone())
    }

    pub(crate) fn raise_notice(&mut self, kind: NoticeKind, text: String) {
        self.notice = Some(Notice {
            kind,
            text,
            ttl: NOTICE_TICKS,
        });
        self.mark_dirty();
    }

    /// Dismisses the notice; returns whether one was showing.
    pub(crate) fn dismiss_notice(&mut self) -> bool {
        if self.notice.take().is_some() {
            self.mark_dirty();
            return true;
        }
        false
    }

    /// Ages the notice by one tick, clearing it when the ttl runs out.
    pub(crate) fn tick_notice(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.ttl = notice.ttl.saturating_sub(1);
            if notice.ttl == 0 {
                self.notice = None;
            }
            self.mark_dirty();
        }
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit = true;
    }

    pub(crate) fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub(crate) fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    pub(crate) fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    pub(crate) fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub(crate) fn dirty(&self) -> bool {
        self.dirty
    }
}
