//! The per-submission validation report.

use crate::error::Field;
use crate::Issuer;

/// Pass/fail result of validating one card submission.
///
/// Field names match the JSON returned by the web endpoint. `issuer` is
/// `None` when the card number was not well-formed enough to classify.
///
/// Reports built by [`validate_at`](crate::validate_at) always satisfy
/// [`is_consistent`](Self::is_consistent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Card number is well-formed and from a recognised issuer.
    pub card_number_valid: bool,
    /// Issuer detected from the card number.
    pub issuer: Option<Issuer>,
    /// CVV matches the issuer's length rule.
    pub cvv_valid: bool,
    /// Expiry is a well-formed `MM/YY` not in the past.
    pub expiry_valid: bool,
    /// Cardholder name is acceptable.
    pub name_valid: bool,
    /// All four field checks passed.
    pub overall_status: bool,
    /// One message per failed check, in field order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns whether the check for `field` passed.
    pub const fn field_valid(&self, field: Field) -> bool {
        match field {
            Field::CardNumber => self.card_number_valid,
            Field::Cvv => self.cvv_valid,
            Field::Expiry => self.expiry_valid,
            Field::Name => self.name_valid,
        }
    }

    /// Returns the fields whose checks failed, in check order.
    pub fn failed_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !self.field_valid(field))
            .collect()
    }

    /// Returns true if the report's invariants hold: the overall status is
    /// the conjunction of the field results, and there is exactly one error
    /// per failed field.
    pub fn is_consistent(&self) -> bool {
        let all_valid = Field::ALL.into_iter().all(|field| self.field_valid(field));
        self.overall_status == all_valid && self.errors.len() == self.failed_fields().len()
    }

    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
