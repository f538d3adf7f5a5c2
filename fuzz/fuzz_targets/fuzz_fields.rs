//! Fuzz target for the individual field checks.
//!
//! The boolean and explaining forms of each check must always agree.

#![no_main]

use card_input_validator::{cvv, detect, mask, name, number, Issuer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    assert_eq!(
        number::is_valid_number_format(data),
        number::check_number_format(data).is_ok()
    );

    let issuer = detect::detect_issuer(data);
    if issuer.is_known() {
        assert!(issuer.is_valid_length(data.chars().count()));
    }

    for issuer in [None, Some(Issuer::AmericanExpress), Some(Issuer::Visa)] {
        assert_eq!(cvv::is_valid_cvv(data, issuer), cvv::check_cvv(data, issuer).is_ok());
    }

    assert_eq!(name::is_valid_name(data), name::check_name(data).is_ok());

    let _ = mask::mask_number(data);
});
