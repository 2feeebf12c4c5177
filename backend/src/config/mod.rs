//! Central module for application-wide configuration settings.
//!
//! This module loads the server port, the authentication service location and
//! timeout, the session cookie name, the read-authorization policy and CORS
//! origins from the environment.

use std::env::VarError;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::auth::ReadPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the authentication service, without the `/api/auth` path.
    pub auth_base_url: String,
    pub auth_timeout: Duration,
    /// Cookie carrying the session token, read from requests and forwarded
    /// to the authentication service under the same name.
    pub session_cookie: String,
    pub read_policy: ReadPolicy,
    /// How many records the unfiltered attendance listing returns.
    pub recent_limit: usize,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Loads configuration through `reader`, so tests can supply variables
    /// without touching the process environment.
    pub fn from_reader<F>(reader: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let auth_timeout_ms: u64 = try_load(&reader, "AUTH_TIMEOUT_MS", "3000")?;
        let recent_limit: usize = try_load(&reader, "RECENT_LIMIT", "50")?;
        if recent_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "RECENT_LIMIT".into(),
                "must be greater than zero".into(),
            ));
        }

        let session_cookie: String = try_load(&reader, "SESSION_COOKIE_NAME", "sessionid")?;
        if session_cookie.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SESSION_COOKIE_NAME".into(),
                "must not be empty".into(),
            ));
        }

        let allowed_origins = reader("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            port: try_load(&reader, "PORT", "8080")?,
            auth_base_url: try_load(&reader, "AUTH_SERVER_URL", "http://localhost:8081")?,
            auth_timeout: Duration::from_millis(auth_timeout_ms),
            session_cookie,
            read_policy: try_load(&reader, "READ_POLICY", "claimed-role")?,
            recent_limit,
            allowed_origins,
        })
    }
}

fn try_load<F, T>(reader: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: Display,
{
    reader(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue(key.into(), e.to_string()))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
