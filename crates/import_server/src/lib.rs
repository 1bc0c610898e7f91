//! Backend proxy that fetches a remote page's raw markup for the import panel.
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use import_engine::{Fetcher, ReqwestFetcher};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{create_router, ScrapeUrlRequest, ScrapeUrlResponse};

/// Shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            fetcher: Arc::new(ReqwestFetcher::new(config.fetch.clone())),
        }
    }
}
