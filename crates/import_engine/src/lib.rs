//! Import engine: scrape client, file ingestion and the effect-running panel driver.
mod decode;
mod dropped;
mod fetch;
mod normalize;
mod panel;
mod scrape;
mod types;

pub use decode::{decode_html, decode_html_lossy, DecodeError, DecodedHtml};
pub use dropped::{read_dropped_file, ReadError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, BROWSER_USER_AGENT};
pub use normalize::{clean_scraped_html, normalize_url, UrlError};
pub use panel::{ImportPanel, LogNotifier, Notifier, SCRAPE_FALLBACK_MESSAGE};
pub use scrape::{
    ReqwestScrapeClient, ScrapeClient, ScrapeError, ScrapeSettings, DEFAULT_BACKEND_URL,
    SCRAPE_PATH,
};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
