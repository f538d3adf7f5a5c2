//! Rich error types for card input validation.
//!
//! The boolean checkers never fail. The `check_*` functions return these
//! errors so callers can explain exactly why a field was rejected.

use crate::cvv::CvvError;
use crate::expiry::ExpiryError;
use crate::name::NameError;
use std::fmt;

/// Report message for a card number that is not 13-19 ASCII digits.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid card number format.";
/// Report message for a well-formed card number with no recognised issuer.
pub const UNKNOWN_ISSUER_MESSAGE: &str = "Unrecognized card issuer.";
/// Report message for a rejected CVV.
pub const INVALID_CVV_MESSAGE: &str = "Invalid CVV format.";
/// Report message for a malformed or expired expiry date.
pub const INVALID_EXPIRY_MESSAGE: &str = "Invalid or expired expiry date.";
/// Report message for a rejected cardholder name.
pub const INVALID_NAME_MESSAGE: &str = "Invalid cardholder name.";

/// Errors that can occur while checking a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// The input string was empty.
    Empty,

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits (13).
        minimum: usize,
    },

    /// The card number has too many digits.
    TooLong {
        /// The actual number of characters provided.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },

    /// A non-digit character was found in the input.
    ///
    /// Separators are not accepted: only `0-9`.
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The number is well-formed but matches no known issuer.
    UnknownIssuer,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::UnknownIssuer => {
                write!(f, "unknown card issuer - check the card number prefix and length")
            }
        }
    }
}

impl std::error::Error for NumberError {}

/// The four form fields, in the order their checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// The card number.
    CardNumber,
    /// The card verification value.
    Cvv,
    /// The `MM/YY` expiry date.
    Expiry,
    /// The cardholder name.
    Name,
}

impl Field {
    /// All fields in check order.
    pub const ALL: [Field; 4] = [Self::CardNumber, Self::Cvv, Self::Expiry, Self::Name];

    /// Returns the JSON key used for this field in submissions.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::Cvv => "cvv",
            Self::Expiry => "expiry",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A failure of any one field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Card number rejected.
    Number(NumberError),
    /// CVV rejected.
    Cvv(CvvError),
    /// Expiry rejected.
    Expiry(ExpiryError),
    /// Name rejected.
    Name(NameError),
}

impl FieldError {
    /// Returns which field failed.
    pub const fn field(&self) -> Field {
        match self {
            Self::Number(_) => Field::CardNumber,
            Self::Cvv(_) => Field::Cvv,
            Self::Expiry(_) => Field::Expiry,
            Self::Name(_) => Field::Name,
        }
    }

    /// Returns the message recorded in a [`ValidationReport`](crate::ValidationReport).
    pub const fn report_message(&self) -> &'static str {
        match self {
            Self::Number(NumberError::UnknownIssuer) => UNKNOWN_ISSUER_MESSAGE,
            Self::Number(_) => INVALID_NUMBER_MESSAGE,
            Self::Cvv(_) => INVALID_CVV_MESSAGE,
            Self::Expiry(_) => INVALID_EXPIRY_MESSAGE,
            Self::Name(_) => INVALID_NAME_MESSAGE,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(e) => write!(f, "{}: {}", self.field(), e),
            Self::Cvv(e) => write!(f, "{}: {}", self.field(), e),
            Self::Expiry(e) => write!(f, "{}: {}", self.field(), e),
            Self::Name(e) => write!(f, "{}: {}", self.field(), e),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Number(e) => Some(e),
            Self::Cvv(e) => Some(e),
            Self::Expiry(e) => Some(e),
            Self::Name(e) => Some(e),
        }
    }
}

impl From<NumberError> for FieldError {
    fn from(e: NumberError) -> Self {
        Self::Number(e)
    }
}

impl From<CvvError> for FieldError {
    fn from(e: CvvError) -> Self {
        Self::Cvv(e)
    }
}

impl From<ExpiryError> for FieldError {
    fn from(e: ExpiryError) -> Self {
        Self::Expiry(e)
    }
}

impl From<NameError> for FieldError {
    fn from(e: NameError) -> Self {
        Self::Name(e)
    }
}
