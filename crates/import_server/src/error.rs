use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use import_engine::{FailureKind, FetchError, UrlError};
use serde::Serialize;

/// Error body shape the panel's scrape client understands.
#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    BadGateway(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<UrlError> for ApiError {
    fn from(err: UrlError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err.kind {
            FailureKind::InvalidUrl => ApiError::BadRequest(format!("Invalid URL: {}", err.message)),
            FailureKind::HttpStatus { code, reason } => {
                ApiError::BadGateway(format!("Failed to fetch URL: {code} {reason}"))
            }
            _ => ApiError::BadGateway(format!(
                "Request error: {}. Check that the URL is reachable.",
                err.message
            )),
        }
    }
}
