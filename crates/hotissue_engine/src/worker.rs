use std::sync::{mpsc, Arc};
use std::thread;

use crate::api::{ApiClient, ApiError, ApiSettings, HttpApiClient};
use crate::types::{CrawlResponse, PostRecord, StatsResponse};

/// Requests the shell submits to the IO worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCommand {
    FetchPosts { limit: u32 },
    FetchStats,
    TriggerCrawl,
}

/// Completed IO results delivered back over the event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    PostsFetched(Result<Vec<PostRecord>, ApiError>),
    StatsFetched(Result<StatsResponse, ApiError>),
    CrawlCompleted(Result<CrawlResponse, ApiError>),
}

/// Owns the IO worker thread. Commands go in over a channel, completed
/// events come back over another; the shell polls with `try_recv` so the
/// render loop never blocks on the network.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: mpsc::Receiver<ApiEvent>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> Self {
        Self::with_client(Arc::new(HttpApiClient::new(settings)))
    }

    /// Spawns the worker around any client implementation. Commands run
    /// concurrently on the runtime, so a slow crawl never delays a posts
    /// fetch.
    pub fn with_client(client: Arc<dyn ApiClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, command: ApiCommand) {
        let _ = self.cmd_tx.send(command);
    }

    /// Clone of the command sender, for submitters that must outlive a move
    /// of the handle itself (the receiver half is not shareable).
    pub fn commands(&self) -> mpsc::Sender<ApiCommand> {
        self.cmd_tx.clone()
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_command(client: &dyn ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchPosts { limit } => ApiEvent::PostsFetched(client.fetch_posts(limit).await),
        ApiCommand::FetchStats => ApiEvent::StatsFetched(client.fetch_stats().await),
        ApiCommand::TriggerCrawl => ApiEvent::CrawlCompleted(client.trigger_crawl().await),
    }
}
