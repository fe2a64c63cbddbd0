//! The shopper's delivery location preference.

use serde::{Deserialize, Serialize};

/// Where the shopper wants delivery, as shown in the header widget.
///
/// Persisted under its own session key, independent of the cart. Manual
/// entries carry no coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPreference {
    /// Display label, e.g. "Bengaluru, Karnataka, IN".
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl LocationPreference {
    /// A manually entered location: label only.
    #[must_use]
    pub fn manual(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            lat: None,
            lon: None,
        }
    }

    /// A geolocated position with its resolved label.
    #[must_use]
    pub fn located(label: String, lat: f64, lon: f64) -> Self {
        Self {
            label,
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// Fallback label when reverse geocoding yields nothing useful.
    #[must_use]
    pub fn coordinate_label(lat: f64, lon: f64) -> String {
        format!("{lat:.3}, {lon:.3}")
    }
}
