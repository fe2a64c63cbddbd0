//! Spice level for an order line.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`SpiceLevel`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown spice level: {0}")]
pub struct SpiceLevelError(pub String);

/// Spice level chosen per order line at checkout.
///
/// Lines rehydrated from a cart snapshot that predates the spice selection
/// default to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpiceLevel {
    Mild,
    #[default]
    Medium,
    Royal,
}

impl SpiceLevel {
    /// All levels, in menu order.
    pub const ALL: [Self; 3] = [Self::Mild, Self::Medium, Self::Royal];

    /// Stable identifier used in form values and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Royal => "Royal",
        }
    }

    /// Human-readable label for the spice select.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Royal => "Royal (Spicy)",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpiceLevel {
    type Err = SpiceLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mild" => Ok(Self::Mild),
            "Medium" => Ok(Self::Medium),
            "Royal" => Ok(Self::Royal),
            other => Err(SpiceLevelError(other.to_owned())),
        }
    }
}
