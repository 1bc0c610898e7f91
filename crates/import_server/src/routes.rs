use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use import_engine::{clean_scraped_html, decode_html, decode_html_lossy, normalize_url};
use panel_logging::{panel_info, panel_warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ScrapeUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeUrlResponse {
    pub content: String,
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/scrape-url", post(scrape_url))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// Returns the full page markup (response body) of the requested URL.
/// JS-rendered content is not executed.
async fn scrape_url(
    State(state): State<AppState>,
    Json(req): Json<ScrapeUrlRequest>,
) -> Result<Json<ScrapeUrlResponse>, ApiError> {
    let url = normalize_url(&req.url).inspect_err(|err| {
        panel_warn!("rejected scrape url {:?}: {}", req.url, err);
    })?;

    let output = state.fetcher.fetch(&url).await.map_err(|err| {
        panel_warn!("scrape of {} failed: {}", url, err);
        ApiError::from(err)
    })?;

    let content_type = output.metadata.content_type.as_deref();
    let html = match decode_html(&output.bytes, content_type) {
        Ok(decoded) => decoded.html,
        Err(err) => {
            panel_warn!("lossy decode for {}: {}", url, err);
            decode_html_lossy(&output.bytes, content_type)
        }
    };

    panel_info!(
        "scraped {} bytes={} final_url={}",
        url,
        output.metadata.byte_len,
        output.metadata.final_url
    );
    Ok(Json(ScrapeUrlResponse {
        content: clean_scraped_html(&html),
    }))
}
