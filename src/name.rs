//! Cardholder name validation.
//!
//! A name is 3 to 40 characters of letters and spaces. Nothing is trimmed,
//! and runs of spaces (leading, trailing or repeated) are allowed.

use std::fmt;

/// Minimum cardholder name length, in characters.
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum cardholder name length, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Errors that can occur during cardholder name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is empty.
    Empty,
    /// Fewer than [`MIN_NAME_LENGTH`] characters.
    TooShort {
        /// Actual length in characters.
        length: usize,
    },
    /// More than [`MAX_NAME_LENGTH`] characters.
    TooLong {
        /// Actual length in characters.
        length: usize,
    },
    /// A character that is neither a letter nor a space.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cardholder name is empty"),
            Self::TooShort { length } => write!(
                f,
                "cardholder name too short: got {} characters, minimum is {}",
                length, MIN_NAME_LENGTH
            ),
            Self::TooLong { length } => write!(
                f,
                "cardholder name too long: got {} characters, maximum is {}",
                length, MAX_NAME_LENGTH
            ),
            Self::InvalidCharacter { character, position } => write!(
                f,
                "invalid character '{}' at position {} (only letters and spaces allowed)",
                character.escape_default(),
                position
            ),
        }
    }
}

impl std::error::Error for NameError {}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == ' '
}

/// Checks a cardholder name, explaining any rejection.
///
/// Length is checked before the character set.
///
/// ```
/// use card_input_validator::name::{check_name, NameError};
///
/// assert!(check_name("John Doe").is_ok());
/// assert_eq!(check_name("Jo"), Err(NameError::TooShort { length: 2 }));
/// assert_eq!(
///     check_name("John3"),
///     Err(NameError::InvalidCharacter { character: '3', position: 4 })
/// );
/// ```
pub fn check_name(input: &str) -> Result<(), NameError> {
    let length = input.chars().count();

    if length == 0 {
        return Err(NameError::Empty);
    }
    if length < MIN_NAME_LENGTH {
        return Err(NameError::TooShort { length });
    }
    if length > MAX_NAME_LENGTH {
        return Err(NameError::TooLong { length });
    }

    match input.chars().enumerate().find(|&(_, c)| !is_name_char(c)) {
        Some((position, character)) => Err(NameError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Returns true iff the name is 3-40 letters or spaces.
#[inline]
pub fn is_valid_name(input: &str) -> bool {
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&input.chars().count())
        && input.chars().all(is_name_char)
}
