use crate::post::Post;
use crate::state::StatsSummary;

/// Plain displayable failure payload carried by completion messages. The
/// effect layer maps transport errors into this before they reach the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome reported by the backend's crawl endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub success: bool,
    pub message: String,
}

/// Direction of a list-selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Up,
    Down,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App started; triggers the initial posts and stats load.
    Started,
    /// Posts request resolved. `fetched_at` is the shell-stamped local time,
    /// recorded as the last-updated display value on success.
    PostsLoaded {
        result: Result<Vec<Post>, LoadError>,
        fetched_at: String,
    },
    /// Stats request resolved. Failures are log-only; the update is a no-op.
    StatsLoaded(Result<StatsSummary, LoadError>),
    /// User asked for a crawl-and-reload. Ignored while a load is in flight.
    RefreshRequested,
    /// Crawl endpoint resolved (the backend reports success in the body).
    CrawlFinished(Result<CrawlOutcome, LoadError>),
    /// User cycled the site selector.
    SiteFilterCycled,
    /// User cycled the category selector.
    CategoryFilterCycled,
    /// User cycled the sort order.
    SortCycled,
    /// User entered search-input mode.
    SearchStarted,
    /// User typed a character into the search box (filters live).
    SearchCharTyped(char),
    /// User deleted the last search character (filters live).
    SearchBackspaced,
    /// User confirmed the search text and left input mode.
    SearchSubmitted,
    /// User abandoned the search; clears the text and leaves input mode.
    SearchCancelled,
    /// User moved the list selection.
    SelectionMoved(SelectionMove),
    /// User asked for the next page of the derived view.
    LoadMoreRequested,
    /// User asked to open the selected post in the browser.
    OpenSelected,
    /// User asked for a static HTML export of the derived view.
    ExportRequested,
    /// Export write resolved; `Ok` carries the written path for display.
    ExportFinished(Result<String, LoadError>),
    /// Esc in normal mode: dismisses the notice, or quits when there is none.
    EscapePressed,
    /// User asked to quit.
    QuitRequested,
    /// UI tick; ages out the current notice.
    Tick,
}
