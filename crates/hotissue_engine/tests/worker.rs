use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use hotissue_engine::{
    ApiClient, ApiCommand, ApiError, ApiEvent, ApiHandle, CrawlResponse, PostRecord, StatsResponse,
};

struct StubClient;

#[async_trait::async_trait]
impl ApiClient for StubClient {
    async fn fetch_posts(&self, limit: u32) -> Result<Vec<PostRecord>, ApiError> {
        Ok(vec![PostRecord {
            site: "bobae".to_string(),
            title: format!("limit {limit}"),
            url: "https://example.com/1".to_string(),
            category: None,
            author: None,
            views: None,
            likes: None,
            comments: None,
            crawled_at: None,
        }])
    }

    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        Err(ApiError::Timeout)
    }

    async fn trigger_crawl(&self) -> Result<CrawlResponse, ApiError> {
        Ok(CrawlResponse {
            success: true,
            message: "ok".to_string(),
        })
    }
}

fn wait_for_event(handle: &ApiHandle) -> ApiEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no event before the deadline");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn commands_round_trip_through_the_worker() {
    let handle = ApiHandle::with_client(Arc::new(StubClient));

    handle.submit(ApiCommand::FetchPosts { limit: 7 });
    match wait_for_event(&handle) {
        ApiEvent::PostsFetched(Ok(posts)) => {
            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0].title, "limit 7");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn errors_travel_back_as_events() {
    let handle = ApiHandle::with_client(Arc::new(StubClient));

    handle.submit(ApiCommand::FetchStats);
    match wait_for_event(&handle) {
        ApiEvent::StatsFetched(Err(err)) => assert_eq!(err, ApiError::Timeout),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn try_recv_never_blocks_while_idle() {
    let handle = ApiHandle::with_client(Arc::new(StubClient));
    assert!(handle.try_recv().is_none());
}
