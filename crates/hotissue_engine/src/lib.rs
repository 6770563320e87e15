//! Hot-issue engine: backend API access and effect execution.
mod api;
mod export;
mod types;
mod worker;

pub use api::{ApiClient, ApiError, ApiSettings, HttpApiClient};
pub use export::{ensure_export_dir, ExportError, StaticPageWriter, EXPORT_FILENAME};
pub use types::{parse_crawled_at, CrawlResponse, PostRecord, PostsResponse, StatsResponse};
pub use worker::{ApiCommand, ApiEvent, ApiHandle};
