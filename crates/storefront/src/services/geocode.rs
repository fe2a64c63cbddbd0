//! Reverse geocoding via Nominatim.
//!
//! Turns browser-reported coordinates into a short place label for the
//! location widget. The call is treated as an opaque external dependency:
//! no retry, no backoff. Responses are cached by rounded coordinates so
//! repeated lookups from the same spot do not hammer the public endpoint.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use thiserror::Error;

use crate::config::GeocoderConfig;

/// Errors from the reverse geocoding call.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoder returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Capability interface for reverse geocoding.
///
/// The location routes depend on this seam rather than on the HTTP client,
/// so tests can substitute a canned implementation.
pub trait Geocoder: Send + Sync {
    /// Resolve coordinates to a human-readable place label.
    ///
    /// An empty label is a valid result; the caller applies the coordinate
    /// fallback.
    fn reverse<'a>(
        &'a self,
        lat: f64,
        lon: f64,
    ) -> Pin<Box<dyn Future<Output = Result<String, GeocodeError>> + Send + 'a>>;
}

/// Address fields of a Nominatim `jsonv2` reverse response.
///
/// Only the fields the label composer reads; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
    pub state_district: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub county: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: NominatimAddress,
}

/// Compose a display label from a Nominatim address.
///
/// Picks the most specific locality (city, town, village, suburb, or state
/// district), the broader region (state, region, or county), and the
/// upper-cased country code, joining whichever are present with ", ".
#[must_use]
pub fn compose_label(address: &NominatimAddress) -> String {
    let locality = address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref())
        .or(address.suburb.as_deref())
        .or(address.state_district.as_deref());

    let region = address
        .state
        .as_deref()
        .or(address.region.as_deref())
        .or(address.county.as_deref());

    let country = address.country_code.as_deref().map(str::to_uppercase);

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(locality) = locality {
        parts.push(locality.to_owned());
    }
    if let Some(region) = region {
        parts.push(region.to_owned());
    }
    if let Some(country) = country
        && !country.is_empty()
    {
        parts.push(country);
    }

    parts.join(", ")
}

/// Cache TTL for resolved labels.
const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Maximum cached coordinate buckets.
const CACHE_CAPACITY: u64 = 1_000;

/// Nominatim-backed [`Geocoder`].
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    /// Labels keyed by coordinates rounded to ~100m buckets.
    cache: Cache<(i64, i64), String>,
}

impl NominatimClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        })
    }

    /// Round coordinates to three decimal places for cache bucketing.
    #[allow(clippy::cast_possible_truncation)]
    fn cache_key(lat: f64, lon: f64) -> (i64, i64) {
        ((lat * 1000.0).round() as i64, (lon * 1000.0).round() as i64)
    }

    async fn fetch_label(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "jsonv2")])
            .query(&[("lat", lat), ("lon", lon)])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body: NominatimResponse = response.json().await?;
        Ok(compose_label(&body.address))
    }
}

impl Geocoder for NominatimClient {
    fn reverse<'a>(
        &'a self,
        lat: f64,
        lon: f64,
    ) -> Pin<Box<dyn Future<Output = Result<String, GeocodeError>> + Send + 'a>> {
        Box::pin(async move {
            let key = Self::cache_key(lat, lon);
            if let Some(label) = self.cache.get(&key).await {
                return Ok(label);
            }

            let label = self.fetch_label(lat, lon).await?;
            self.cache.insert(key, label.clone()).await;
            Ok(label)
        })
    }
}
