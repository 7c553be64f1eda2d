//! EU shoe sizes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShoeSize`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// The input is not a whole number.
    #[error("shoe size must be a whole number: {0}")]
    NotANumber(String),
    /// The number is outside the range of sizes the shop stocks.
    #[error("shoe size must be between {min} and {max}")]
    OutOfRange {
        /// Smallest accepted size.
        min: u8,
        /// Largest accepted size.
        max: u8,
    },
}

/// An EU shoe size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeSize(u8);

impl ShoeSize {
    /// Smallest size accepted from user input.
    pub const MIN: u8 = 16;
    /// Largest size accepted from user input.
    pub const MAX: u8 = 50;

    /// Create a size from a known-good EU number (seed data).
    #[must_use]
    pub const fn new(eu: u8) -> Self {
        Self(eu)
    }

    /// Get the EU size number.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Parse and range-check a size from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a number or is out of range.
    pub fn parse(s: &str) -> Result<Self, SizeError> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| SizeError::NotANumber(s.to_owned()))?;

        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SizeError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        Ok(Self(value))
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShoeSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
