//! CVV/CVC/CID validation for card input.
//!
//! This module validates Card Verification Values (CVV/CVC/CID):
//!
//! - **CVV** (Card Verification Value) - Visa
//! - **CVC** (Card Verification Code) - MasterCard
//! - **CID** (Card Identification Number) - American Express, Discover
//!
//! # Length Requirements
//!
//! - American Express: 4 digits (printed on front)
//! - All other cards, and cards whose issuer is unknown: 3 digits
//!
//! # Example
//!
//! ```
//! use card_input_validator::cvv::is_valid_cvv;
//! use card_input_validator::Issuer;
//!
//! assert!(is_valid_cvv("123", Some(Issuer::Visa)));
//! assert!(is_valid_cvv("1234", Some(Issuer::AmericanExpress)));
//!
//! // Unknown or absent issuer falls back to 3 digits
//! assert!(is_valid_cvv("123", None));
//! assert!(!is_valid_cvv("1234", Some(Issuer::Unknown)));
//! ```

use crate::Issuer;
use std::fmt;

/// Errors that can occur during CVV validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// The input is empty.
    Empty,
    /// The CVV contains non-digit characters.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },
    /// The CVV length doesn't match what the issuer prints.
    WrongLengthForIssuer {
        /// The issuer the length was checked against.
        issuer: Issuer,
        /// Actual length provided.
        length: usize,
        /// Expected length for this issuer.
        expected: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(f, "invalid character '{}' at position {}", character, position)
            }
            Self::WrongLengthForIssuer {
                issuer,
                length,
                expected,
            } => {
                write!(
                    f,
                    "{} cards require {} digit CVV, got {}",
                    issuer.name(),
                    expected,
                    length
                )
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Returns the expected CVV length for an optional issuer.
///
/// - American Express: 4 digits
/// - Anything else, including no issuer: 3 digits
#[inline]
pub const fn cvv_length_for(issuer: Option<Issuer>) -> usize {
    match issuer {
        Some(issuer) => issuer.cvv_length(),
        None => Issuer::Unknown.cvv_length(),
    }
}

/// Checks a CVV against the issuer's length rule.
///
/// # Example
///
/// ```
/// use card_input_validator::cvv::{check_cvv, CvvError};
/// use card_input_validator::Issuer;
///
/// assert!(check_cvv("1234", Some(Issuer::AmericanExpress)).is_ok());
/// assert!(matches!(
///     check_cvv("123", Some(Issuer::AmericanExpress)),
///     Err(CvvError::WrongLengthForIssuer { expected: 4, .. })
/// ));
/// ```
pub fn check_cvv(input: &str, issuer: Option<Issuer>) -> Result<(), CvvError> {
    if input.is_empty() {
        return Err(CvvError::Empty);
    }

    let mut length = 0usize;
    for (position, character) in input.chars().enumerate() {
        if !character.is_ascii_digit() {
            return Err(CvvError::InvalidCharacter {
                character,
                position,
            });
        }
        length += 1;
    }

    let expected = cvv_length_for(issuer);
    if length != expected {
        return Err(CvvError::WrongLengthForIssuer {
            issuer: issuer.unwrap_or(Issuer::Unknown),
            length,
            expected,
        });
    }

    Ok(())
}

/// Returns true iff the CVV is all digits and of the issuer's length.
#[inline]
pub fn is_valid_cvv(input: &str, issuer: Option<Issuer>) -> bool {
    input.len() == cvv_length_for(issuer) && input.bytes().all(|b| b.is_ascii_digit())
}
