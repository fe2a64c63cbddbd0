//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront needs no configuration to run
//! locally.
//!
//! - `RB_HOST` - Bind address (default: 127.0.0.1)
//! - `RB_PORT` - Listen port (default: 3000)
//! - `RB_BASE_URL` - Public URL for the storefront (default: http://localhost:3000)
//! - `GEOCODER_BASE_URL` - Reverse geocoding endpoint (default: Nominatim)
//! - `GEOCODER_USER_AGENT` - User-Agent sent to the geocoder (Nominatim requires one)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Reverse geocoding configuration
    pub geocoder: GeocoderConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Reverse geocoding (Nominatim) configuration.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the reverse geocoding service
    pub base_url: String,
    /// User-Agent header; Nominatim's usage policy requires an identifying one
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_owned(),
            user_agent: "royal-biryani-storefront/0.1 (+https://royalbiryani.co.in)".to_owned(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            geocoder: GeocoderConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `RB_HOST` or `RB_PORT` is present but
    /// unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = match std::env::var("RB_HOST") {
            Ok(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("RB_HOST".to_owned(), e.to_string())
            })?,
            Err(_) => defaults.host,
        };
        let port = match std::env::var("RB_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("RB_PORT".to_owned(), e.to_string())
            })?,
            Err(_) => defaults.port,
        };

        let geocoder = GeocoderConfig {
            base_url: get_env_or(&defaults.geocoder.base_url, "GEOCODER_BASE_URL"),
            user_agent: get_env_or(&defaults.geocoder.user_agent, "GEOCODER_USER_AGENT"),
        };

        Ok(Self {
            host,
            port,
            base_url: get_env_or(&defaults.base_url, "RB_BASE_URL"),
            geocoder,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            sentry_environment: std::env::var("SENTRY_ENVIRONMENT").ok(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or(default: &str, key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
