use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::picture::ingest::{DEFAULT_MAX_PICTURE_BYTES, DEFAULT_READ_TIMEOUT};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
    pub max_picture_bytes: u64,
    pub picture_read_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            bind_addr: parse_env("BIND_ADDR", IpAddr::from([127, 0, 0, 1]))?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_picture_bytes: parse_env("MAX_PICTURE_BYTES", DEFAULT_MAX_PICTURE_BYTES)?,
            picture_read_timeout: Duration::from_secs(parse_env(
                "PICTURE_READ_TIMEOUT_SECS",
                DEFAULT_READ_TIMEOUT.as_secs(),
            )?),
        })
    }

    /// Request body limit for picture uploads: the picture bound plus room for
    /// the multipart framing, so an oversized file still reaches the size
    /// check and gets a precise rejection.
    pub fn upload_body_limit(&self) -> usize {
        usize::try_from(self.max_picture_bytes)
            .unwrap_or(usize::MAX)
            .saturating_add(64 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            rust_log: "info".to_string(),
            max_picture_bytes: DEFAULT_MAX_PICTURE_BYTES,
            picture_read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
