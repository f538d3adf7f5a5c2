//! Batch validation of many card submissions.
//!
//! Every submission is validated independently and against the same date,
//! so results never depend on processing order. With the `parallel`
//! feature the work is spread across threads with rayon.

use crate::expiry::today;
use crate::validate::CardSubmission;
use crate::ValidationReport;
use chrono::NaiveDate;

/// Counts of passing and failing submissions in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Total submissions processed.
    pub total: usize,
    /// Submissions whose overall status is true.
    pub valid: usize,
    /// Submissions whose overall status is false.
    pub invalid: usize,
}

impl BatchSummary {
    /// Summarizes a slice of reports.
    pub fn from_reports(reports: &[ValidationReport]) -> Self {
        let valid = reports.iter().filter(|r| r.overall_status).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
        }
    }
}

/// Batch validator pinned to a single date.
///
/// # Example
///
/// ```
/// use card_input_validator::{BatchValidator, CardSubmission};
/// use chrono::NaiveDate;
///
/// let batch = BatchValidator::at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let submissions = vec![
///     CardSubmission::sample(),
///     CardSubmission::new("1234", "1", "1/1", "x"),
/// ];
///
/// let reports = batch.validate_all(&submissions);
/// assert!(reports[0].overall_status);
/// assert!(!reports[1].overall_status);
///
/// let summary = batch.summarize(&submissions);
/// assert_eq!((summary.valid, summary.invalid), (1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchValidator {
    today: NaiveDate,
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchValidator {
    /// Creates a batch validator pinned to the current local date.
    #[inline]
    pub fn new() -> Self {
        Self::at(today())
    }

    /// Creates a batch validator pinned to `today`.
    #[inline]
    pub const fn at(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Returns the date expiry checks are made against.
    #[inline]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Validates every submission, returning reports in input order.
    pub fn validate_all(&self, submissions: &[CardSubmission]) -> Vec<ValidationReport> {
        submissions
            .iter()
            .map(|s| s.validate_at(self.today))
            .collect()
    }

    /// Validates and returns only the indices of passing submissions.
    pub fn valid_indices(&self, submissions: &[CardSubmission]) -> Vec<usize> {
        submissions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.validate_at(self.today).overall_status)
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts passing and failing submissions.
    pub fn summarize(&self, submissions: &[CardSubmission]) -> BatchSummary {
        let valid = submissions
            .iter()
            .filter(|s| s.validate_at(self.today).overall_status)
            .count();
        BatchSummary {
            total: submissions.len(),
            valid,
            invalid: submissions.len() - valid,
        }
    }

    /// Validates submissions in parallel using rayon.
    ///
    /// Results are in input order, identical to [`validate_all`](Self::validate_all).
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel(&self, submissions: &[CardSubmission]) -> Vec<ValidationReport> {
        use rayon::prelude::*;
        submissions
            .par_iter()
            .map(|s| s.validate_at(self.today))
            .collect()
    }
}

/// Validates a slice of submissions as of `today` without building a
/// [`BatchValidator`].
#[inline]
pub fn validate_batch_at(submissions: &[CardSubmission], today: NaiveDate) -> Vec<ValidationReport> {
    BatchValidator::at(today).validate_all(submissions)
}
