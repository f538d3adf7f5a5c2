//! Masking utilities for card input.
//!
//! Use these whenever raw form input could end up in a log line or on a
//! screen. A card number keeps at most its last four digits; a CVV keeps
//! nothing.

/// Masks a raw card number showing only the last 4 digits.
///
/// Non-digit characters are dropped before masking. Inputs with four digits
/// or fewer are masked completely.
///
/// Format: `****-****-****-1234`
///
/// # Example
///
/// ```
/// use card_input_validator::mask::mask_number;
///
/// assert_eq!(mask_number("4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_number("340000000000009"), "***-****-****-0009");
/// assert_eq!(mask_number("123"), "***");
/// ```
pub fn mask_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    // Group from the right so the last four always stand alone
    for i in 0..masked_count {
        if i > 0 && (masked_count - i) % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }
    result.push('-');
    result.extend(&digits[masked_count..]);

    result
}

/// Masks a CVV completely, preserving only its length.
///
/// ```
/// use card_input_validator::mask::mask_cvv;
///
/// assert_eq!(mask_cvv("1234"), "****");
/// ```
#[inline]
pub fn mask_cvv(input: &str) -> String {
    "*".repeat(input.chars().count())
}
