//! Bookstack configuration.
//!
//! All configuration is driven by environment variables. `DATABASE_URL`
//! is required; the process must not start without it.

use std::env;

/// Error raised when required configuration is absent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The database location was not provided.
    #[error("environment variable DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Book service configuration.
#[derive(Debug, Clone)]
pub struct BookstackConfig {
    /// Database location. A bare file path, a `sqlite://`/`sqlite:` URL,
    /// or `:memory:`.
    pub database_url: String,
    /// Bind address for the HTTP server.
    pub listen: String,
    /// Path prefix for the book routes, without a trailing slash.
    pub route_prefix: String,
    /// Log level filter.
    pub log_level: String,
}

impl BookstackConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `DATABASE_URL` is unset or empty; everything else has a
    /// default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            listen: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_owned()),
            route_prefix: env::var("ROUTE_PREFIX")
                .unwrap_or_else(|_| "/api/livros".to_owned()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
        })
    }
}

/// Resolve a `DATABASE_URL` value to the path rusqlite should open.
///
/// Accepts `sqlite:///path`, `sqlite://path`, `sqlite:path`, a bare path,
/// and the `:memory:` sentinel (with or without a scheme).
#[must_use]
pub fn database_path(url: &str) -> &str {
    let stripped = url
        .strip_prefix("sqlite:///")
        .or_else(|| url.strip_prefix("sqlite://"))
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    if stripped.is_empty() { ":memory:" } else { stripped }
}
