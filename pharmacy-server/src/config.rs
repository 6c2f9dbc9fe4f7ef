//! Database configuration
//!
//! Connection parameters come from an explicit struct instead of globals.
//! `DbConfig::from_env` reads the `DB_*` variables (and `DATABASE_URL`),
//! but never supplies a default password.

use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_DATABASE: &str = "Pharmacydb";

/// Kept low, the service only ever runs one query per request.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Database connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    /// Full connection string; takes precedence over the discrete fields
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: None,
            database: DEFAULT_DATABASE.to_string(),
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "***"))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "DB_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: None,
            database: lookup("DB_NAME").unwrap_or(defaults.database),
            url: None,
            ..defaults
        }
        .with_secrets(lookup("DB_PASSWORD"), lookup("DATABASE_URL")))
    }

    /// Set password and URL; empty strings count as unset.
    pub fn with_secrets(mut self, password: Option<String>, url: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self.url = url.filter(|u| !u.is_empty());
        self
    }

    /// Connect options for sqlx.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return url.parse().map_err(ConfigError::InvalidUrl);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}
