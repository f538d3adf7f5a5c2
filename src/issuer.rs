//! Card issuer (payment network) type.
//!
//! The issuer is never stored on its own: it is derived from the card number
//! by [`detect_issuer`](crate::detect::detect_issuer) and carried inside a
//! [`ValidationReport`](crate::ValidationReport).

use std::fmt;

/// Payment networks recognised by the validator.
///
/// `Unknown` is a real value, not an error: a structurally valid card number
/// whose prefix/length matches none of the known networks resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Issuer {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// MasterCard - Prefix 51-55, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    #[cfg_attr(feature = "serde", serde(rename = "American Express"))]
    AmericanExpress,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// No known network matched.
    Unknown,
}

impl Issuer {
    /// All issuers, in detection priority order, followed by `Unknown`.
    pub const ALL: [Issuer; 5] = [
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Discover,
        Self::Unknown,
    ];

    /// Returns the valid card number lengths for this issuer.
    ///
    /// `Unknown` has no lengths of its own.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::MasterCard => &[16],
            Self::AmericanExpress => &[15],
            Self::Discover => &[16],
            Self::Unknown => &[],
        }
    }

    /// Returns true if the given length is valid for this issuer.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the number of CVV digits this issuer prints on its cards.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 4,
            Self::Visa | Self::MasterCard | Self::Discover | Self::Unknown => 3,
        }
    }

    /// Returns true unless this is [`Issuer::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the display label, as it appears in serialized reports.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a label or a common short alias, case-insensitively.
    ///
    /// ```
    /// use card_input_validator::Issuer;
    ///
    /// assert_eq!(Issuer::from_label("amex"), Some(Issuer::AmericanExpress));
    /// assert_eq!(Issuer::from_label("MasterCard"), Some(Issuer::MasterCard));
    /// assert_eq!(Issuer::from_label("diners"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" | "mc" => Some(Self::MasterCard),
            "american express" | "americanexpress" | "amex" => Some(Self::AmericanExpress),
            "discover" => Some(Self::Discover),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
