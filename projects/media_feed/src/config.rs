use std::net::SocketAddr;
use std::path::PathBuf;

use interfaces_instagram_media::index::DEFAULT_BASE_URL;
use thiserror::Error;
use utils_trace::{ParseTraceFormatError, TraceSettings};

/// Number of entries returned by `/json` when no `limit` is given.
pub const DEFAULT_LIMIT: i64 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Long-lived Graph API token (`IG_TOKEN`).
    pub access_token: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub default_limit: i64,
    pub favicon_path: PathBuf,
    pub trace: TraceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            host: "0.0.0.0".to_owned(),
            port: 8080,
            default_limit: DEFAULT_LIMIT,
            favicon_path: PathBuf::from("./favicon.png"),
            trace: TraceSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(token) = get("IG_TOKEN") {
            config.access_token = token;
        }
        if let Some(base_url) = get("IG_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: port, source })?;
        }
        if let Some(path) = get("FAVICON_PATH") {
            config.favicon_path = PathBuf::from(path);
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.trace.level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.trace.format = format
                .parse()
                .map_err(|source| ConfigError::InvalidLogFormat { source })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidAddress { addr, source })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidPort: {value}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[from]
        source: ParseTraceFormatError,
    },

    #[error("InvalidAddress: {addr}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}
