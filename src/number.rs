//! Card number format checking.
//!
//! A card number is accepted structurally when it is made only of ASCII
//! digits and has between [`MIN_CARD_DIGITS`] and [`MAX_CARD_DIGITS`] of
//! them. This is membership in the regular language `[0-9]{13,19}`; no
//! separators are stripped and no checksum is computed.

use crate::error::NumberError;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Checks a card number's format, explaining any rejection.
///
/// # Example
///
/// ```
/// use card_input_validator::number::check_number_format;
/// use card_input_validator::NumberError;
///
/// assert!(check_number_format("4111111111111111").is_ok());
/// assert_eq!(check_number_format(""), Err(NumberError::Empty));
/// assert!(matches!(
///     check_number_format("4111-1111-1111-1111"),
///     Err(NumberError::InvalidCharacter { character: '-', position: 4 })
/// ));
/// ```
pub fn check_number_format(input: &str) -> Result<(), NumberError> {
    if input.is_empty() {
        return Err(NumberError::Empty);
    }

    let mut count = 0usize;
    for (position, character) in input.chars().enumerate() {
        if !character.is_ascii_digit() {
            return Err(NumberError::InvalidCharacter {
                position,
                character,
            });
        }
        count += 1;
    }

    if count < MIN_CARD_DIGITS {
        return Err(NumberError::TooShort {
            length: count,
            minimum: MIN_CARD_DIGITS,
        });
    }
    if count > MAX_CARD_DIGITS {
        return Err(NumberError::TooLong {
            length: count,
            maximum: MAX_CARD_DIGITS,
        });
    }

    Ok(())
}

/// Returns true iff the input is 13-19 ASCII digits.
///
/// ```
/// use card_input_validator::is_valid_number_format;
///
/// assert!(is_valid_number_format("4111111111111111"));
/// assert!(!is_valid_number_format("411111111111"));
/// assert!(!is_valid_number_format("4111 1111 1111 1111"));
/// ```
#[inline]
pub fn is_valid_number_format(input: &str) -> bool {
    (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&input.len())
        && input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_length_bounds() {
        assert!(is_valid_number_format(&"4".repeat(13)));
        assert!(is_valid_number_format(&"4".repeat(16)));
        assert!(is_valid_number_format(&"4".repeat(19)));
    }

    #[test]
    fn test_rejects_out_of_range_lengths() {
        assert!(!is_valid_number_format(""));
        assert!(!is_valid_number_format(&"4".repeat(12)));
        assert!(!is_valid_number_format(&"4".repeat(20)));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!is_valid_number_format("411111111111111a"));
        assert!(!is_valid_number_format("4111 1111 1111 1111"));
        assert!(!is_valid_number_format(" 4111111111111111"));
        // Non-ASCII digits do not count
        assert!(!is_valid_number_format("٤١١١١١١١١١١١١١١١"));
    }

    #[test]
    fn test_check_errors() {
        assert_eq!(check_number_format(""), Err(NumberError::Empty));
        assert_eq!(
            check_number_format("411111111111"),
            Err(NumberError::TooShort {
                length: 12,
                minimum: MIN_CARD_DIGITS
            })
        );
        assert_eq!(
            check_number_format("41111111111111111111"),
            Err(NumberError::TooLong {
                length: 20,
                maximum: MAX_CARD_DIGITS
            })
        );
        assert_eq!(
            check_number_format("41x1"),
            Err(NumberError::InvalidCharacter {
                position: 2,
                character: 'x'
            })
        );
    }

    #[test]
    fn test_check_agrees_with_bool() {
        for input in ["", "123", "4111111111111111", "4111-1111", "1234567890123456789", "12345678901234567890"] {
            assert_eq!(check_number_format(input).is_ok(), is_valid_number_format(input));
        }
    }
}
