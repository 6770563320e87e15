use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::types::{CrawlResponse, PostRecord, PostsResponse, StatsResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Read-and-trigger surface of the aggregation backend.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn fetch_posts(&self, limit: u32) -> Result<Vec<PostRecord>, ApiError>;
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError>;
    async fn trigger_crawl(&self) -> Result<CrawlResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    settings: ApiSettings,
}

impl HttpApiClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl ApiClient for HttpApiClient {
    async fn fetch_posts(&self, limit: u32) -> Result<Vec<PostRecord>, ApiError> {
        let response = self
            .get_json::<PostsResponse>(&format!("/api/posts?limit={limit}"))
            .await?;
        Ok(response.posts)
    }

    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        self.get_json("/api/stats").await
    }

    /// Unlike the read endpoints, a failed crawl still answers with a JSON
    /// body carrying the backend's own failure message, under an error
    /// status. The body wins whenever it decodes; the status error is the
    /// fallback for bodies that are not the expected shape.
    async fn trigger_crawl(&self) -> Result<CrawlResponse, ApiError> {
        let url = self.endpoint("/api/crawl")?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        match serde_json::from_slice::<CrawlResponse>(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(ApiError::HttpStatus(status.as_u16())),
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
