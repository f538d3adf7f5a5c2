//! Card expiry date validation.
//!
//! Expiry dates are accepted in one fixed lexical format, `MM/YY`: exactly
//! two digits, a literal slash and two more digits. The two-digit year is
//! always read as `2000 + YY`.
//!
//! A card is valid through the end of its expiry month, so validity depends
//! on the current date. Every time-dependent function comes in two forms: an
//! `_at` variant that takes the current date explicitly, and a convenience
//! wrapper that reads the local wall clock.
//!
//! # Example
//!
//! ```
//! use card_input_validator::expiry::{is_valid_expiry_at, parse_expiry};
//! use chrono::NaiveDate;
//!
//! let expiry = parse_expiry("12/25").unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2025);
//!
//! let jan_2024 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let jan_2026 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! assert!(is_valid_expiry_at("12/25", jan_2024));
//! assert!(!is_valid_expiry_at("12/25", jan_2026));
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate {
    /// Four-digit year (e.g., 2025). Declared first so ordering is by year.
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card had expired as of `today`.
    ///
    /// A card expires at the end of its expiry month: it is expired only
    /// when its (year, month) is strictly before today's.
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        (i32::from(self.year), u32::from(self.month)) < (today.year(), today.month())
    }

    /// Returns true if the card has expired, by the local clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(today())
    }

    /// Returns the number of whole months between `today`'s month and the
    /// expiry month.
    ///
    /// Returns 0 if already expired or expiring this month.
    pub fn months_until_expiry_at(&self, today: NaiveDate) -> u32 {
        let expiry_months = i64::from(self.year) * 12 + i64::from(self.month);
        let current_months = i64::from(today.year()) * 12 + i64::from(today.month());

        u32::try_from(expiry_months - current_months).unwrap_or(0)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input string is empty.
    Empty,
    /// Not of the form `MM/YY`.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
    /// The expiry month is already in the past.
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiry date is empty"),
            Self::InvalidFormat => write!(f, "invalid expiry format (expected MM/YY)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
            Self::Expired { month, year } => write!(f, "card expired ({:02}/{})", month, year),
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Returns the current local date.
#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an `MM/YY` expiry date without checking it against the clock.
///
/// No whitespace is trimmed and no other separator or year width is
/// accepted.
///
/// # Example
///
/// ```
/// use card_input_validator::expiry::{parse_expiry, ExpiryError};
///
/// let expiry = parse_expiry("01/30").unwrap();
/// assert_eq!((expiry.month(), expiry.year()), (1, 2030));
///
/// assert_eq!(parse_expiry("1/30"), Err(ExpiryError::InvalidFormat));
/// assert_eq!(parse_expiry("01/2030"), Err(ExpiryError::InvalidFormat));
/// assert_eq!(parse_expiry("13/30"), Err(ExpiryError::InvalidMonth(13)));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let bytes = match input.as_bytes() {
        [] => return Err(ExpiryError::Empty),
        [m1, m2, b'/', y1, y2] => [*m1, *m2, *y1, *y2],
        _ => return Err(ExpiryError::InvalidFormat),
    };

    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ExpiryError::InvalidFormat);
    }

    let month = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let yy = u16::from(bytes[2] - b'0') * 10 + u16::from(bytes[3] - b'0');

    ExpiryDate::new(month, 2000 + yy).ok_or(ExpiryError::InvalidMonth(month))
}

/// Parses an expiry date and rejects it if it is before `today`'s month.
pub fn check_expiry_at(input: &str, today: NaiveDate) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_at(today) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Like [`check_expiry_at`], using the local clock.
#[inline]
pub fn check_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    check_expiry_at(input, today())
}

/// Returns true iff the input is a well-formed `MM/YY` date not before
/// `today`'s month.
#[inline]
pub fn is_valid_expiry_at(input: &str, today: NaiveDate) -> bool {
    check_expiry_at(input, today).is_ok()
}

/// Like [`is_valid_expiry_at`], using the local clock.
#[inline]
pub fn is_valid_expiry(input: &str) -> bool {
    is_valid_expiry_at(input, today())
}
