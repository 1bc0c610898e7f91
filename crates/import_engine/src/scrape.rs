use std::time::Duration;

use import_core::{ScrapeRequest, ScrapeResult, INVALID_RESPONSE_MESSAGE};
use panel_logging::{panel_debug, panel_warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:7001";
pub const SCRAPE_PATH: &str = "/api/scrape-url";

#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub backend_base_url: String,
    /// `None` leaves timing to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ScrapeSettings {
    pub fn with_backend(base_url: impl Into<String>) -> Self {
        Self {
            backend_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.backend_base_url.trim_end_matches('/'), SCRAPE_PATH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{}", INVALID_RESPONSE_MESSAGE)]
    InvalidResponse,
    #[error("{0}")]
    Transport(String),
    #[error("failed to build http client: {0}")]
    Client(String),
}

impl From<ScrapeError> for ScrapeResult {
    fn from(err: ScrapeError) -> Self {
        ScrapeResult::failure(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait ScrapeClient: Send + Sync {
    /// One round-trip, no retry. Returns the extracted markup.
    async fn scrape(&self, request: &ScrapeRequest) -> Result<String, ScrapeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScrapeClient {
    settings: ScrapeSettings,
    client: reqwest::Client,
}

impl ReqwestScrapeClient {
    pub fn new(settings: ScrapeSettings) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ScrapeError::Client(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ScrapeClient for ReqwestScrapeClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<String, ScrapeError> {
        let endpoint = self.settings.endpoint();
        panel_debug!("POST {} url={}", endpoint, request.url());

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| ScrapeError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.ok();
            let message = error_message(status, body.as_deref());
            panel_warn!("scrape failed status={} message={}", status.as_u16(), message);
            return Err(ScrapeError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ScrapeError::Transport(err.to_string()))?;
        extract_content(&body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

fn error_message(status: StatusCode, body: Option<&[u8]>) -> String {
    body.and_then(|bytes| serde_json::from_slice::<ErrorBody>(bytes).ok())
        .and_then(|body| body.detail)
        .and_then(|detail| detail.as_str().map(str::to_string))
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| status_text(status))
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

fn extract_content(body: &[u8]) -> Result<String, ScrapeError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ScrapeError::InvalidResponse)?;
    match value.get("content").and_then(Value::as_str) {
        Some(content) if !content.is_empty() => Ok(content.to_string()),
        _ => Err(ScrapeError::InvalidResponse),
    }
}
