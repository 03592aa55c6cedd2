use std::env;

use chrono::Duration;

use crate::config::{positive_secs, ConfigError};

const DEFAULT_ACTIVATION_TTL_SECS: i64 = 3 * 24 * 60 * 60;
const DEFAULT_AUTH_TTL_SECS: i64 = 24 * 60 * 60;
const DEFAULT_CLEANUP_INTERVAL_SECS: i64 = 60 * 60;
// Keeps `now + ttl` far away from chrono's range limits.
const MAX_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub activation_ttl: Duration,
    pub authentication_ttl: Duration,
    pub cleanup_interval: std::time::Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            activation_ttl: Duration::seconds(DEFAULT_ACTIVATION_TTL_SECS),
            authentication_ttl: Duration::seconds(DEFAULT_AUTH_TTL_SECS),
            cleanup_interval: std::time::Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS as u64),
        }
    }
}

impl TokenConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            activation_ttl: Duration::seconds(ttl_secs(
                "ACTIVATION_TOKEN_TTL_SECS",
                DEFAULT_ACTIVATION_TTL_SECS,
            )?),
            authentication_ttl: Duration::seconds(ttl_secs(
                "AUTH_TOKEN_TTL_SECS",
                DEFAULT_AUTH_TTL_SECS,
            )?),
            cleanup_interval: std::time::Duration::from_secs(secs_or(
                "TOKEN_CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            )? as u64),
        })
    }
}

fn secs_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Ok(raw) => positive_secs(key, &raw),
        Err(_) => Ok(default),
    }
}

fn ttl_secs(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    let secs = secs_or(key, default)?;
    if secs > MAX_TTL_SECS {
        return Err(ConfigError::Invalid {
            key,
            value: secs.to_string(),
            reason: format!("must not exceed {MAX_TTL_SECS} seconds"),
        });
    }
    Ok(secs)
}
