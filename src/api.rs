//! HTTP transport for the pipeline control service.
//!
//! The `Transport` trait carries exactly the seven operations of the control
//! API. Production code goes through `HttpTransport`; tests substitute
//! scripted fakes to simulate slow, failing, or out-of-order responses.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::model::{ContentItem, StatsSummary, SystemStatus};

/// Failures talking to the control service. The service sends no structured
/// error bodies, so callers treat every variant uniformly; the split only
/// exists for internal logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_status(&self) -> Result<SystemStatus, ApiError>;
    async fn fetch_content(&self) -> Result<Vec<ContentItem>, ApiError>;
    async fn fetch_stats(&self) -> Result<StatsSummary, ApiError>;
    async fn generate_content(&self, count: u32, theme: &str) -> Result<(), ApiError>;
    async fn upload_queue(&self) -> Result<(), ApiError>;
    async fn upload_item(&self, id: &str) -> Result<(), ApiError>;
    async fn retry_item(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("clipdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        // Success needs no body; any payload the service sends is ignored.
        Ok(())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_status(&self) -> Result<SystemStatus, ApiError> {
        self.get_json("/api/status").await
    }

    async fn fetch_content(&self) -> Result<Vec<ContentItem>, ApiError> {
        self.get_json("/api/content").await
    }

    async fn fetch_stats(&self) -> Result<StatsSummary, ApiError> {
        self.get_json("/api/stats").await
    }

    async fn generate_content(&self, count: u32, theme: &str) -> Result<(), ApiError> {
        self.post(
            "/api/generate-content",
            Some(json!({ "count": count, "theme": theme })),
        )
        .await
    }

    async fn upload_queue(&self) -> Result<(), ApiError> {
        self.post("/api/upload-queue", None).await
    }

    async fn upload_item(&self, id: &str) -> Result<(), ApiError> {
        self.post(&format!("/api/upload/{id}"), None).await
    }

    async fn retry_item(&self, id: &str) -> Result<(), ApiError> {
        self.post(&format!("/api/retry/{id}"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let t = HttpTransport::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(t.url("/api/status"), "http://localhost:8000/api/status");

        let t = HttpTransport::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(t.url("/api/upload/idea_123"), "http://localhost:8000/api/upload/idea_123");
    }
}
