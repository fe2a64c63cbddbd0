//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::geocode::{Geocoder, NominatimClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The geocoder is held behind its capability
/// trait so tests can install a canned implementation.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create application state with the Nominatim geocoder.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the geocoder cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, reqwest::Error> {
        let geocoder = Arc::new(NominatimClient::new(&config.geocoder)?);
        Ok(Self::with_geocoder(config, geocoder))
    }

    /// Create application state with an explicit geocoder implementation.
    #[must_use]
    pub fn with_geocoder(config: StorefrontConfig, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, geocoder }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the reverse geocoder.
    #[must_use]
    pub fn geocoder(&self) -> &dyn Geocoder {
        self.inner.geocoder.as_ref()
    }
}
