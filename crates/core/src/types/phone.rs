//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is shorter than the minimum length.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The input contains a character outside the accepted set.
    #[error("phone number contains invalid character '{found}'")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A loosely validated phone number.
///
/// The clinic accepts numbers in many regional formats, so validation is
/// intentionally permissive: at least eight characters drawn from digits,
/// spaces, and the `- + ( )` punctuation set. The value is stored exactly
/// as entered.
///
/// ## Examples
///
/// ```
/// use vetcare_core::Phone;
///
/// assert!(Phone::parse("+593 99 123 4567").is_ok());
/// assert!(Phone::parse("(02) 234-5678").is_ok());
/// assert!(Phone::parse("12345").is_err());      // too short
/// assert!(Phone::parse("call me maybe").is_err()); // letters
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum length of a phone number.
    pub const MIN_LENGTH: usize = 8;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than eight characters or
    /// contains anything other than digits, spaces, `-`, `+`, `(`, `)`.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if let Some(found) = s
            .chars()
            .find(|&c| !(c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')')))
        {
            return Err(PhoneError::InvalidCharacter { found });
        }

        if s.chars().count() < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
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

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
