//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Variables
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"      # default: sqlite://urls.db
//! export BASE_URL="http://localhost:3001"     # prefix for composed short links
//! export LISTEN="0.0.0.0:3001"                # bind address
//! export RUST_LOG="info"                      # log level
//! export LOG_FORMAT="text"                    # text or json
//! export CLICK_QUEUE_CAPACITY="10000"         # click event buffer (min: 100)
//! export DB_MAX_CONNECTIONS="5"
//! export DB_CONNECT_TIMEOUT="30"              # seconds
//! ```
//!
//! All variables have defaults; a fresh checkout runs with no
//! environment at all and creates its database file next to the binary.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefix for externally visible short links, e.g. `https://lsnp.io`.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub click_queue_capacity: usize,

    // ── Pool settings ───────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            click_queue_capacity,
            db_max_connections,
            db_connect_timeout,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a sqlite URL
    /// - `base_url` is not an http(s) URL
    /// - `click_queue_capacity` is outside `100..=1_000_000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
