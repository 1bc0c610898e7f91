use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use import_engine::FetchSettings;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 7001;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub fetch: FetchSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::from([127, 0, 0, 1]), DEFAULT_PORT),
            fetch: FetchSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `SCRAPE_TIMEOUT_SECS`, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
            ConfigError::Invalid {
                name: "HOST",
                message: err.to_string(),
            }
        })?;
        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().map_err(|err| ConfigError::Invalid {
                name: "PORT",
                message: err.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        config.addr = SocketAddr::new(ip, port);

        if let Some(secs) = lookup("SCRAPE_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|err| ConfigError::Invalid {
                name: "SCRAPE_TIMEOUT_SECS",
                message: err.to_string(),
            })?;
            config.fetch.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
