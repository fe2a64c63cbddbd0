//! Indian mobile number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input is not exactly 10 characters.
    #[error("phone number must be exactly 10 digits (got {got})")]
    WrongLength {
        /// Number of characters supplied.
        got: usize,
    },
    /// The input contains a non-digit character.
    #[error("phone number must contain only digits")]
    NonDigit,
    /// The first digit is outside the mobile range.
    #[error("phone number must start with a digit from 6 to 9")]
    InvalidPrefix,
}

/// A 10-digit Indian mobile number.
///
/// ## Constraints
///
/// - Exactly 10 ASCII digits (surrounding whitespace is trimmed)
/// - The first digit is 6, 7, 8, or 9 (the mobile numbering range)
///
/// ## Examples
///
/// ```
/// use royal_biryani_core::Phone;
///
/// assert!(Phone::parse("9876543210").is_ok());
/// assert!(Phone::parse(" 77000 50050").is_err()); // embedded space
/// assert!(Phone::parse("12345").is_err());        // wrong length and prefix
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Number of digits in a mobile number.
    pub const LENGTH: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, is not exactly 10
    /// characters, contains a non-digit, or does not start with 6-9.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if s.chars().count() != Self::LENGTH {
            return Err(PhoneError::WrongLength {
                got: s.chars().count(),
            });
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        if !s.starts_with(['6', '7', '8', '9']) {
            return Err(PhoneError::InvalidPrefix);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
