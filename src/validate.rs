//! Main validation orchestration for card form submissions.
//!
//! This module combines the individual field checks into one
//! [`ValidationReport`]. The checks always run in the same order, and each
//! failed check contributes exactly one message:
//!
//! 1. Card number format, then issuer detection
//! 2. CVV, against the detected issuer
//! 3. Expiry date, against the current date
//! 4. Cardholder name
//!
//! A card number that is well-formed but matches no known issuer is
//! rejected: `card_number_valid` is false and `issuer` is
//! [`Issuer::Unknown`](crate::Issuer::Unknown).

use crate::cvv::{check_cvv, is_valid_cvv};
use crate::detect::detect_issuer;
use crate::error::{
    FieldError, NumberError, INVALID_CVV_MESSAGE, INVALID_EXPIRY_MESSAGE, INVALID_NAME_MESSAGE,
    INVALID_NUMBER_MESSAGE, UNKNOWN_ISSUER_MESSAGE,
};
use crate::expiry::{check_expiry_at, is_valid_expiry_at, today};
use crate::name::{check_name, is_valid_name};
use crate::number::{check_number_format, is_valid_number_format};
use crate::ValidationReport;
use chrono::NaiveDate;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Validates a card submission against the local clock.
///
/// See [`validate_at`] for the rules.
///
/// # Example
///
/// ```
/// use card_input_validator::{validate, Issuer};
///
/// let report = validate("4111111111111111", "123", "12/99", "John Doe");
/// assert!(report.overall_status);
/// assert_eq!(report.issuer, Some(Issuer::Visa));
/// assert!(report.errors.is_empty());
/// ```
#[inline]
pub fn validate(card_number: &str, cvv: &str, expiry: &str, name: &str) -> ValidationReport {
    validate_at(card_number, cvv, expiry, name, today())
}

/// Validates a card submission as of `today`.
///
/// This is a pure function of its inputs: the same strings and date always
/// produce the same report.
///
/// # Example
///
/// ```
/// use card_input_validator::{validate_at, Issuer};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let report = validate_at("4111111111111111", "123", "12/25", "John Doe", today);
/// assert!(report.overall_status);
///
/// let report = validate_at("9999999999999", "123", "12/25", "John Doe", today);
/// assert!(!report.card_number_valid);
/// assert_eq!(report.issuer, Some(Issuer::Unknown));
/// assert_eq!(report.errors, ["Unrecognized card issuer."]);
/// ```
pub fn validate_at(
    card_number: &str,
    cvv: &str,
    expiry: &str,
    name: &str,
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if is_valid_number_format(card_number) {
        let issuer = detect_issuer(card_number);
        report.issuer = Some(issuer);
        if issuer.is_known() {
            report.card_number_valid = true;
        } else {
            report.errors.push(UNKNOWN_ISSUER_MESSAGE.to_string());
        }
    } else {
        report.errors.push(INVALID_NUMBER_MESSAGE.to_string());
    }

    report.cvv_valid = is_valid_cvv(cvv, report.issuer);
    if !report.cvv_valid {
        report.errors.push(INVALID_CVV_MESSAGE.to_string());
    }

    report.expiry_valid = is_valid_expiry_at(expiry, today);
    if !report.expiry_valid {
        report.errors.push(INVALID_EXPIRY_MESSAGE.to_string());
    }

    report.name_valid = is_valid_name(name);
    if !report.name_valid {
        report.errors.push(INVALID_NAME_MESSAGE.to_string());
    }

    report.overall_status =
        report.card_number_valid && report.cvv_valid && report.expiry_valid && report.name_valid;

    report
}

/// Explains every failed check of a submission as of `today`.
///
/// Returns one [`FieldError`] per field that [`validate_at`] would reject, in
/// the same order. An empty vector means the submission passes.
///
/// ```
/// use card_input_validator::{explain_at, Field};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let errors = explain_at("4111111111111111", "12", "12/25", "Jo", today);
/// let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
/// assert_eq!(fields, [Field::Cvv, Field::Name]);
/// ```
pub fn explain_at(
    card_number: &str,
    cvv: &str,
    expiry: &str,
    name: &str,
    today: NaiveDate,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let issuer = match check_number_format(card_number) {
        Ok(()) => {
            let issuer = detect_issuer(card_number);
            if !issuer.is_known() {
                errors.push(NumberError::UnknownIssuer.into());
            }
            Some(issuer)
        }
        Err(e) => {
            errors.push(e.into());
            None
        }
    };

    if let Err(e) = check_cvv(cvv, issuer) {
        errors.push(e.into());
    }
    if let Err(e) = check_expiry_at(expiry, today) {
        errors.push(e.into());
    }
    if let Err(e) = check_name(name) {
        errors.push(e.into());
    }

    errors
}

/// One card form submission.
///
/// Deserializing fills absent keys with empty strings. The fields are wiped
/// from memory when the submission is dropped, and `Debug` never prints the
/// card number or CVV.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CardSubmission {
    /// Raw card number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_number: String,
    /// Raw CVV.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cvv: String,
    /// Raw expiry, expected as `MM/YY`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiry: String,
    /// Raw cardholder name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

impl CardSubmission {
    /// Creates a submission from the four raw fields.
    pub fn new(
        card_number: impl Into<String>,
        cvv: impl Into<String>,
        expiry: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            cvv: cvv.into(),
            expiry: expiry.into(),
            name: name.into(),
        }
    }

    /// The fixed sample used for smoke tests.
    pub fn sample() -> Self {
        Self::new("4111111111111111", "123", "12/25", "John Doe")
    }

    /// Validates this submission as of `today`.
    #[inline]
    pub fn validate_at(&self, today: NaiveDate) -> ValidationReport {
        validate_at(&self.card_number, &self.cvv, &self.expiry, &self.name, today)
    }

    /// Validates this submission against the local clock.
    #[inline]
    pub fn validate(&self) -> ValidationReport {
        self.validate_at(today())
    }

    /// Explains every failed check of this submission as of `today`.
    #[inline]
    pub fn explain_at(&self, today: NaiveDate) -> Vec<FieldError> {
        explain_at(&self.card_number, &self.cvv, &self.expiry, &self.name, today)
    }
}

impl fmt::Debug for CardSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSubmission")
            .field("card_number", &crate::mask::mask_number(&self.card_number))
            .field("cvv", &crate::mask::mask_cvv(&self.cvv))
            .field("expiry", &self.expiry)
            .field("name", &self.name)
            .finish()
    }
}
