//! Fuzz target for full submission validation.
//!
//! Tests that validation never panics and always yields a consistent report.

#![no_main]

use arbitrary::Arbitrary;
use card_input_validator::{explain_at, validate_at};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    card_number: &'a str,
    cvv: &'a str,
    expiry: &'a str,
    name: &'a str,
    days_from_ce: u16,
}

fuzz_target!(|input: Input<'_>| {
    // 2000-01-01 plus up to ~180 years
    let Some(today) = NaiveDate::from_num_days_from_ce_opt(730_120 + i32::from(input.days_from_ce))
    else {
        return;
    };

    let report = validate_at(input.card_number, input.cvv, input.expiry, input.name, today);
    assert!(report.is_consistent());

    let explained = explain_at(input.card_number, input.cvv, input.expiry, input.name, today);
    assert_eq!(explained.len(), report.errors.len());
});
