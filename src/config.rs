//! Server configuration from environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5555";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// `DATABASE_URL`, default `sqlite://app.db`.
    pub database_url: String,
    /// `LISTEN_ADDR`, default `127.0.0.1:5555`.
    pub listen_addr: SocketAddr,
    /// `DB_MAX_CONNECTIONS`, default 5.
    pub max_connections: u32,
    /// `REQUEST_TIMEOUT_SECS`, default 30.
    pub request_timeout: Duration,
    /// `BODY_LIMIT_BYTES`, default 64 KiB.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5555)),
            max_connections: 5,
            request_timeout: Duration::from_secs(30),
            body_limit: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.database_url),
            listen_addr: parse_or(&lookup, "LISTEN_ADDR", defaults.listen_addr)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            body_limit: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
