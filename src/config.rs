//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_BASE_URL` - Base for relative URLs sent to `/api/classify` without a `base_url`
//! - `MAX_URLS_PER_REQUEST` - Batch limit of `/api/classify` (default: 500, 1..=10000)
//! - `MAX_LINKS_PER_SCAN` - Elements inspected per `/api/scan` (default: 5000, 1..=100000)
//! - `MAX_BODY_BYTES` - Request body limit (default: 2 MiB, min: 1024)
//!
//! Variables are expected in the process environment; `main` loads a `.env`
//! file first via `dotenvy`.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_MAX_URLS_PER_REQUEST: usize = 500;
pub const DEFAULT_MAX_LINKS_PER_SCAN: usize = 5_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL applied to relative inputs of `/api/classify` when the
    /// request carries none.
    pub default_base_url: Option<String>,
    pub max_urls_per_request: usize,
    pub max_links_per_scan: usize,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_base_url: None,
            max_urls_per_request: DEFAULT_MAX_URLS_PER_REQUEST,
            max_links_per_scan: DEFAULT_MAX_LINKS_PER_SCAN,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_base_url = env::var("DEFAULT_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let max_urls_per_request =
            parse_var("MAX_URLS_PER_REQUEST", DEFAULT_MAX_URLS_PER_REQUEST)?;
        let max_links_per_scan = parse_var("MAX_LINKS_PER_SCAN", DEFAULT_MAX_LINKS_PER_SCAN)?;
        let max_body_bytes = parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            default_base_url,
            max_urls_per_request,
            max_links_per_scan,
            max_body_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `default_base_url` is not an absolute http(s) URL
    /// - a limit is outside its allowed range
    pub fn validate(&self) -> Result<()> {
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

        if let Some(ref base) = self.default_base_url {
            let url = Url::parse(base)
                .with_context(|| format!("DEFAULT_BASE_URL is not a valid URL: '{}'", base))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "DEFAULT_BASE_URL must use http or https, got '{}'",
                    url.scheme()
                );
            }
        }

        if !(1..=10_000).contains(&self.max_urls_per_request) {
            anyhow::bail!(
                "MAX_URLS_PER_REQUEST must be between 1 and 10000, got {}",
                self.max_urls_per_request
            );
        }

        if !(1..=100_000).contains(&self.max_links_per_scan) {
            anyhow::bail!(
                "MAX_LINKS_PER_SCAN must be between 1 and 100000, got {}",
                self.max_links_per_scan
            );
        }

        if self.max_body_bytes < 1024 {
            anyhow::bail!(
                "MAX_BODY_BYTES must be at least 1024, got {}",
                self.max_body_bytes
            );
        }

        Ok(())
    }

    /// Parsed `default_base_url`. Only meaningful after [`Config::validate`].
    pub fn base_url(&self) -> Option<Url> {
        self.default_base_url
            .as_deref()
            .and_then(|base| Url::parse(base).ok())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Default base URL: {}",
            self.default_base_url.as_deref().unwrap_or("none")
        );
        tracing::info!("  Max URLs per request: {}", self.max_urls_per_request);
        tracing::info!("  Max links per scan: {}", self.max_links_per_scan);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
