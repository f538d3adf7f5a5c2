//! Issuer detection using prefix and length matching.
//!
//! The leading digits of a card number (the BIN/IIN) identify the payment
//! network. Only a handful of illustrative prefixes are recognised here, and
//! a prefix only counts when the total length also fits the network.
//!
//! # Performance
//!
//! Detection is O(1) using slice pattern matching - no loops or hash lookups.

use crate::Issuer;

/// Detects the issuer of a card number.
///
/// Rules are tried in a fixed order: Visa, MasterCard, American Express,
/// Discover. A matching prefix with the wrong length does not classify, and
/// anything that matches no rule is [`Issuer::Unknown`]. The input is not
/// required to be all digits; non-digit input simply falls through.
///
/// # Example
///
/// ```
/// use card_input_validator::detect::detect_issuer;
/// use card_input_validator::Issuer;
///
/// assert_eq!(detect_issuer("4111111111111111"), Issuer::Visa);
/// assert_eq!(detect_issuer("340000000000009"), Issuer::AmericanExpress);
///
/// // Amex prefix, but 16 digits
/// assert_eq!(detect_issuer("3400000000000009"), Issuer::Unknown);
/// ```
#[inline]
pub fn detect_issuer(number: &str) -> Issuer {
    let length = number.chars().count();

    match number.as_bytes() {
        [b'4', ..] if Issuer::Visa.is_valid_length(length) => Issuer::Visa,

        [b'5', b'1'..=b'5', ..] if Issuer::MasterCard.is_valid_length(length) => {
            Issuer::MasterCard
        }

        [b'3', b'4' | b'7', ..] if Issuer::AmericanExpress.is_valid_length(length) => {
            Issuer::AmericanExpress
        }

        [b'6', b'0', b'1', b'1', ..] | [b'6', b'5', ..]
            if Issuer::Discover.is_valid_length(length) =>
        {
            Issuer::Discover
        }

        _ => Issuer::Unknown,
    }
}

/// Returns the issuer only when it is a known network.
#[inline]
pub fn detect_known_issuer(number: &str) -> Option<Issuer> {
    Some(detect_issuer(number)).filter(Issuer::is_known)
}
