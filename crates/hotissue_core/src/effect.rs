#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch up to `limit` posts from the backend.
    LoadPosts { limit: u32 },
    /// Fetch the aggregate counters from the backend.
    LoadStats,
    /// Ask the backend to run a crawl now.
    TriggerCrawl,
    /// Write the rendered static page to the export directory.
    WriteExport { html: String },
    /// Open a post URL in the system browser.
    OpenUrl { url: String },
}
