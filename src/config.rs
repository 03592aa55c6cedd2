// src/config.rs
use std::env;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Reads a required variable.
pub fn require(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// Reads an optional variable, falling back to `default` when unset.
pub fn parsed_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

pub fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a strictly positive number of seconds.
pub fn positive_secs(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    let secs: i64 = parse_value(key, raw)?;
    if secs <= 0 {
        return Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "must be a positive number of seconds".to_string(),
        });
    }
    Ok(secs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for PasswordHasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            other => Err(format!("unknown password hasher '{other}', expected argon2 or bcrypt")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit, never used in production.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub password_hasher: PasswordHasherKind,
    pub email_from: String,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let smtp = if env::var("SMTP_SERVER").is_err() && environment != "production" {
            SmtpConfig::Local {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parsed_or("SMTP_PORT", 1025)?,
            }
        } else {
            SmtpConfig::Relay {
                server: require("SMTP_SERVER")?,
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
            }
        };

        let db_max_connections: u32 = parsed_or("DB_MAX_CONNECTIONS", 20)?;
        let db_min_connections: u32 = parsed_or("DB_MIN_CONNECTIONS", 2)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parsed_or("PORT", 4000)?,
            database_url: require("DATABASE_URL")?,
            run_migrations: parsed_or("RUN_MIGRATIONS", true)?,
            db_max_connections,
            db_min_connections,
            password_hasher: parsed_or("PASSWORD_HASHER", PasswordHasherKind::Argon2)?,
            email_from: require("EMAIL_FROM")?,
            smtp,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
