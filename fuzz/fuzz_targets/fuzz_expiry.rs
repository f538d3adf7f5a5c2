//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use card_input_validator::expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::parse_expiry(data);
    let _ = expiry::is_valid_expiry(data);

    // If parsing succeeds, test other methods
    if let Ok(exp) = expiry::parse_expiry(data) {
        assert!((1..=12).contains(&exp.month()));
        assert!((2000..=2099).contains(&exp.year()));
        assert_eq!(exp.format_short(), data);
        let _ = exp.is_expired();
        let _ = exp.format_long();
    }
});
