//! Process configuration read from the environment.
//!
//! DESIGN
//! ======
//! `Config::from_lookup` takes the variable source as a closure so tests can
//! feed a map instead of mutating the process environment. `main` loads
//! `.env` through `dotenvy` before calling `Config::from_env`.

use std::net::SocketAddr;
use std::time::Duration;

/// Default bind address of the auth API. The front-end targets port 8079.
pub const DEFAULT_API_ADDR: &str = "0.0.0.0:8079";
/// Origin allowed to make credentialed cross-origin calls.
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
const DEV_JWT_SECRET: &str = "snetwork-dev-secret-change-me";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API_ADDR {0:?}")]
    InvalidAddr(String),
    #[error("invalid TOKEN_TTL_HOURS {0:?}")]
    InvalidTtl(String),
    #[error("JWT_SECRET is required when LEPTOS_ENV=PROD")]
    MissingSecret,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub app_origin: String,
    pub cookie_secure: bool,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error when `API_ADDR` or `TOKEN_TTL_HOURS` do not parse, or
    /// when `JWT_SECRET` is missing in a production build.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("API_ADDR").unwrap_or_else(|| DEFAULT_API_ADDR.to_owned());
        let api_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let token_ttl = match lookup("TOKEN_TTL_HOURS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(hours) if hours > 0 => Duration::from_secs(hours * 3600),
                _ => return Err(ConfigError::InvalidTtl(raw)),
            },
            None => Duration::from_secs(DEFAULT_TOKEN_TTL_HOURS * 3600),
        };

        let production = lookup("LEPTOS_ENV").is_some_and(|v| v.eq_ignore_ascii_case("prod"));
        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if production => return Err(ConfigError::MissingSecret),
            None => {
                tracing::warn!("JWT_SECRET not set; using the development secret");
                DEV_JWT_SECRET.to_owned()
            }
        };

        let app_origin = lookup("APP_ORIGIN")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_ORIGIN.to_owned());
        let cookie_secure = lookup("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or_else(|| app_origin.starts_with("https://"));

        Ok(Self { api_addr, jwt_secret, token_ttl, app_origin, cookie_secure })
    }
}

/// Parse an on/off style flag; anything unrecognized is `None`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
