//! Indian postal code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Pincode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PincodeError {
    /// The input string is empty.
    #[error("pincode cannot be empty")]
    Empty,
    /// The input is not exactly 6 characters.
    #[error("pincode must be exactly 6 digits (got {got})")]
    WrongLength {
        /// Number of characters supplied.
        got: usize,
    },
    /// The input contains a non-digit character.
    #[error("pincode must contain only digits")]
    NonDigit,
}

/// A 6-digit Indian postal code.
///
/// ```
/// use royal_biryani_core::Pincode;
///
/// assert!(Pincode::parse("560001").is_ok());
/// assert!(Pincode::parse("1234").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    /// Number of digits in a pincode.
    pub const LENGTH: usize = 6;

    /// Parse a `Pincode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, is not exactly 6
    /// characters, or contains a non-digit.
    pub fn parse(s: &str) -> Result<Self, PincodeError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PincodeError::Empty);
        }

        if s.chars().count() != Self::LENGTH {
            return Err(PincodeError::WrongLength {
                got: s.chars().count(),
            });
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PincodeError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the pincode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
