//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_input_validator::{
    cvv, detect, expiry, is_valid_number_format, mask, name, number, validate_at, Field, Issuer,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), range)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a date between 2000 and 2100.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn any_issuer() -> impl Strategy<Value = Option<Issuer>> {
    prop_oneof![
        Just(None),
        Just(Some(Issuer::Visa)),
        Just(Some(Issuer::MasterCard)),
        Just(Some(Issuer::AmericanExpress)),
        Just(Some(Issuer::Discover)),
        Just(Some(Issuer::Unknown)),
    ]
}

// =============================================================================
// NUMBER FORMAT PROPERTIES
// =============================================================================

proptest! {
    /// Property: the format check is exactly `^[0-9]{13,19}$`.
    #[test]
    fn number_format_matches_digit_class(s in "\\PC{0,25}") {
        let expected = (13..=19).contains(&s.chars().count()) && s.chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(is_valid_number_format(&s), expected);
    }

    /// Property: any 13-19 digit string is accepted.
    #[test]
    fn digit_strings_in_range_accepted(s in digit_string(13..=19)) {
        prop_assert!(is_valid_number_format(&s));
        prop_assert!(number::check_number_format(&s).is_ok());
    }

    /// Property: digit strings outside the range are rejected.
    #[test]
    fn digit_strings_out_of_range_rejected(s in prop_oneof![digit_string(0..=12), digit_string(20..=30)]) {
        prop_assert!(!is_valid_number_format(&s));
        prop_assert!(number::check_number_format(&s).is_err());
    }
}

// =============================================================================
// ISSUER PROPERTIES
// =============================================================================

proptest! {
    /// Property: a detected known issuer always accepts the input's length.
    #[test]
    fn known_issuer_length_is_valid(s in digit_string(0..=22)) {
        let issuer = detect::detect_issuer(&s);
        if issuer.is_known() {
            prop_assert!(issuer.is_valid_length(s.len()));
        }
    }

    /// Property: Visa is any 4-prefixed number of length 13, 16 or 19.
    #[test]
    fn visa_prefix_detection(rest in digit_string(12..=18)) {
        let number = format!("4{}", rest);
        let expected = if [13, 16, 19].contains(&number.len()) { Issuer::Visa } else { Issuer::Unknown };
        prop_assert_eq!(detect::detect_issuer(&number), expected);
    }

    /// Property: Amex is 34/37 with exactly 15 digits.
    #[test]
    fn amex_prefix_detection(second in prop_oneof![Just('4'), Just('7')], rest in digit_string(13..=13)) {
        let number = format!("3{}{}", second, rest);
        prop_assert_eq!(detect::detect_issuer(&number), Issuer::AmericanExpress);
    }

    /// Property: detection never panics on arbitrary strings.
    #[test]
    fn detect_never_panics(s in "\\PC*") {
        let _ = detect::detect_issuer(&s);
    }
}

// =============================================================================
// CVV PROPERTIES
// =============================================================================

proptest! {
    /// Property: a CVV is valid iff it is all digits with the issuer's length.
    #[test]
    fn cvv_rule(s in "[0-9a-z]{0,6}", issuer in any_issuer()) {
        let expected_len = if issuer == Some(Issuer::AmericanExpress) { 4 } else { 3 };
        let expected = s.len() == expected_len && s.chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(cvv::is_valid_cvv(&s, issuer), expected);
        prop_assert_eq!(cvv::check_cvv(&s, issuer).is_ok(), expected);
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// Property: every well-formed MM/YY parses to month and 2000+YY.
    #[test]
    fn well_formed_expiry_parses(month in 1u8..=12, yy in 0u16..=99) {
        let input = format!("{:02}/{:02}", month, yy);
        let parsed = expiry::parse_expiry(&input).unwrap();
        prop_assert_eq!(parsed.month(), month);
        prop_assert_eq!(parsed.year(), 2000 + yy);
        prop_assert_eq!(parsed.format_short(), input);
    }

    /// Property: validity is monotonic in time - once invalid, always invalid.
    #[test]
    fn expiry_monotonic(month in 1u8..=12, yy in 0u16..=99, a in any_date(), b in any_date()) {
        let input = format!("{:02}/{:02}", month, yy);
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        if expiry::is_valid_expiry_at(&input, later) {
            prop_assert!(expiry::is_valid_expiry_at(&input, earlier));
        }
    }

    /// Property: valid iff (year, month) >= today's (year, month).
    #[test]
    fn expiry_matches_month_comparison(month in 1u8..=12, yy in 0u16..=99, today in any_date()) {
        let input = format!("{:02}/{:02}", month, yy);
        let expected = (2000 + i32::from(yy), u32::from(month)) >= (today.year(), today.month());
        prop_assert_eq!(expiry::is_valid_expiry_at(&input, today), expected);
    }

    /// Property: expiry parsing never panics.
    #[test]
    fn expiry_never_panics(s in "\\PC{0,8}", today in any_date()) {
        let _ = expiry::parse_expiry(&s);
        let _ = expiry::is_valid_expiry_at(&s, today);
    }
}

// =============================================================================
// NAME PROPERTIES
// =============================================================================

proptest! {
    /// Property: letters and spaces of length 3-40 are accepted.
    #[test]
    fn letter_names_accepted(s in "[A-Za-z ]{3,40}") {
        prop_assert!(name::is_valid_name(&s));
    }

    /// Property: a digit anywhere rejects the name.
    #[test]
    fn names_with_digits_rejected(prefix in "[A-Za-z]{1,10}", digit in "[0-9]", suffix in "[A-Za-z]{1,10}") {
        let input = format!("{}{}{}", prefix, digit, suffix);
        prop_assert!(!name::is_valid_name(&input));
    }
}

// =============================================================================
// REPORT PROPERTIES
// =============================================================================

proptest! {
    /// Property: every report is internally consistent.
    #[test]
    fn reports_are_consistent(
        number in prop_oneof![digit_string(10..=20), "\\PC{0,20}"],
        cvv in "[0-9a]{0,5}",
        expiry in "[0-9/]{0,6}",
        name in "[A-Za-z0-9 ]{0,45}",
        today in any_date()
    ) {
        let report = validate_at(&number, &cvv, &expiry, &name, today);
        prop_assert!(report.is_consistent());
        prop_assert_eq!(
            report.overall_status,
            report.card_number_valid && report.cvv_valid && report.expiry_valid && report.name_valid
        );
        prop_assert_eq!(report.errors.len(), report.failed_fields().len());
    }

    /// Property: issuer is present iff the number is well-formed.
    #[test]
    fn issuer_present_iff_well_formed(number in prop_oneof![digit_string(10..=20), "\\PC{0,20}"], today in any_date()) {
        let report = validate_at(&number, "123", "12/99", "John Doe", today);
        prop_assert_eq!(report.issuer.is_some(), is_valid_number_format(&number));
        if report.card_number_valid {
            prop_assert!(report.issuer.map_or(false, |i| i.is_known()));
        } else {
            prop_assert!(report.failed_fields().contains(&Field::CardNumber));
        }
    }

    /// Property: validation is deterministic for a fixed date.
    #[test]
    fn validation_is_idempotent(
        number in digit_string(12..=20),
        cvv in "[0-9]{2,5}",
        today in any_date()
    ) {
        let first = validate_at(&number, &cvv, "06/30", "Jane Roe", today);
        let second = validate_at(&number, &cvv, "06/30", "Jane Roe", today);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: masking keeps only the last four digits.
    #[test]
    fn mask_keeps_last_four(s in digit_string(5..=19)) {
        let masked = mask::mask_number(&s);
        let visible: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(visible, s[s.len() - 4..].to_string());
        prop_assert_eq!(masked.chars().filter(|&c| c == '*').count(), s.len() - 4);
    }
}
