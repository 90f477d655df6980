use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got `{0}`")]
    InvalidPort(String),
    #[error("SITE_URL must be an absolute http(s) URL, got `{0}`")]
    InvalidSiteUrl(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    /// Public origin used in the sitemap, without a trailing slash.
    pub site_url: String,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let site_url = get("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSiteUrl(site_url));
        }

        Ok(Self {
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            site_url: site_url.trim_end_matches('/').to_string(),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
