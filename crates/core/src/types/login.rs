//! Account login name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Login`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The input string is empty.
    #[error("login cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("login must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("login cannot contain whitespace")]
    Whitespace,
}

/// An account login name.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - No whitespace anywhere
///
/// Comparison is exact: logins are case-sensitive.
///
/// ## Examples
///
/// ```
/// use shoe_shop_core::Login;
///
/// assert!(Login::parse("manager").is_ok());
/// assert!(Login::parse("").is_err());
/// assert!(Login::parse("two words").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    /// Maximum length of a login.
    pub const MAX_LENGTH: usize = 64;

    /// Wrap a known-good login (seed data) without validation.
    #[must_use]
    pub fn from_static(s: &'static str) -> Self {
        Self(s.to_owned())
    }

    /// Parse a `Login` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters, or
    /// contains whitespace.
    pub fn parse(s: &str) -> Result<Self, LoginError> {
        if s.is_empty() {
            return Err(LoginError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(LoginError::Whitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the login as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Login` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Login {
    type Err = LoginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
