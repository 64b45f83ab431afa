use std::env;
use std::time::Duration;
use url::Url;

use crate::errors::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_EVENT_GRID_TIMEOUT_SECS: u64 = 30;

/// Settings resolved once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub event_grid: EventGridConfig,
}

#[derive(Debug, Clone)]
pub struct EventGridConfig {
    pub endpoint: Url,
    pub access_key: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;

        let endpoint = required("EVENT_GRID_ENDPOINT")?;
        let endpoint = Url::parse(&endpoint).map_err(|err| ConfigError::Invalid {
            key: "EVENT_GRID_ENDPOINT",
            reason: err.to_string(),
        })?;
        let access_key = required("EVENT_GRID_KEY")?;

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_number("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let timeout_secs = match lookup("EVENT_GRID_TIMEOUT_SECS") {
            Some(raw) => parse_number("EVENT_GRID_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_EVENT_GRID_TIMEOUT_SECS,
        };

        Ok(AppConfig {
            bind_address,
            database_url,
            database_max_connections,
            event_grid: EventGridConfig {
                endpoint,
                access_key,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })
}
