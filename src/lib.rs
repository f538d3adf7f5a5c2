//! # card_input_validator
//!
//! Validation of payment card form input: card number, CVV, expiry date and
//! cardholder name, reported field by field with an overall status.
//!
//! ## Features
//!
//! - Card number format check (13-19 ASCII digits)
//! - Issuer detection for Visa, MasterCard, American Express and Discover
//! - Issuer-aware CVV validation
//! - `MM/YY` expiry validation against an injectable current date
//! - Cardholder name validation
//! - Masking helpers for safe logging
//! - Multiple interfaces: library, CLI, REST API
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input_validator::{validate_at, Issuer};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let report = validate_at("4111111111111111", "123", "12/25", "John Doe", today);
//!
//! assert!(report.overall_status);
//! assert_eq!(report.issuer, Some(Issuer::Visa));
//! assert!(report.errors.is_empty());
//! ```
//!
//! ## Field Checks
//!
//! Each check is also available on its own, as a boolean and as a `check_*`
//! function that explains the rejection.
//!
//! ```rust
//! use card_input_validator::{cvv, detect, name, number, Issuer};
//!
//! assert!(number::is_valid_number_format("340000000000009"));
//! assert_eq!(detect::detect_issuer("340000000000009"), Issuer::AmericanExpress);
//! assert!(cvv::is_valid_cvv("1234", Some(Issuer::AmericanExpress)));
//! assert!(!name::is_valid_name("John3"));
//! ```
//!
//! ## Supported Issuers
//!
//! | Issuer | Prefix | Length | CVV |
//! |--------|--------|--------|-----|
//! | Visa | 4 | 13, 16, 19 | 3 |
//! | MasterCard | 51-55 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 6011, 65 | 16 | 3 |
//!
//! Any other well-formed number is reported with issuer `Unknown` and
//! fails the card number check.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | JSON (de)serialization of reports and submissions (default) |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod issuer;
pub mod mask;
pub mod name;
pub mod number;
pub mod report;
pub mod validate;

// Re-export main types at crate root
pub use batch::{BatchSummary, BatchValidator};
pub use error::{Field, FieldError, NumberError};
pub use issuer::Issuer;
pub use number::{is_valid_number_format, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use report::ValidationReport;
pub use validate::{explain_at, validate, validate_at, CardSubmission};
