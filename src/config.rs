use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const ADDR_ENV: &str = "CUTE_BANK_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(ADDR_ENV).ok().as_deref())
    }

    /// `None` falls back to [`DEFAULT_ADDR`].
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let raw = value.unwrap_or(DEFAULT_ADDR);
        let addr = raw
            .parse()
            .with_context(|| format!("Invalid {ADDR_ENV} `{raw}`, expected host:port"))?;
        Ok(Self { addr })
    }
}
