use serde::Serialize;

pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";

/// Payload of one scrape call. Only built from non-blank input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    url: String,
}

impl ScrapeRequest {
    /// Trims `input`; returns `None` when nothing is left.
    pub fn from_input(input: &str) -> Option<Self> {
        let url = input.trim();
        if url.is_empty() {
            None
        } else {
            Some(Self {
                url: url.to_string(),
            })
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeResult {
    Success { content: String },
    Failure { message: String },
}

impl ScrapeResult {
    /// A success with empty content is not a success.
    pub fn success(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.is_empty() {
            Self::failure(INVALID_RESPONSE_MESSAGE)
        } else {
            Self::Success { content }
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
