use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid {expected}: `{value}`")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Process configuration, read from the environment (`.env` is loaded first by `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Without it the service runs on the in-memory store.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
                expected: "port number",
            })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value,
                expected: "connection count",
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        let secret = lookup("SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("SECRET"))?;

        Ok(Self {
            port,
            database_url,
            max_connections,
            secret,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
