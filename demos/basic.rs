//! Basic card form validation example.
//!
//! Run with: `cargo run --example basic`

use card_input_validator::{cvv, detect, expiry, explain_at, mask, name, validate_at, Issuer};
use chrono::NaiveDate;

fn main() {
    println!("=== Basic Card Form Validation ===\n");

    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_else(expiry::today);

    // Example 1: Validate a complete submission
    let report = validate_at("4111111111111111", "123", "12/25", "John Doe", today);
    println!("Validating: {}", mask::mask_number("4111111111111111"));
    println!("  Issuer: {}", report.issuer.map_or("-", |issuer| issuer.name()));
    println!("  Overall: {}", if report.overall_status { "PASS" } else { "FAIL" });
    println!();

    // Example 2: Issuer detection
    let numbers = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("340000000000009", "Amex"),
        ("6011000000000004", "Discover"),
        ("9999999999999", "Unrecognized prefix"),
    ];

    println!("Issuer detection:");
    for (number, description) in numbers {
        println!("  {} - {}: {}", number, description, detect::detect_issuer(number));
    }
    println!();

    // Example 3: CVV length depends on the issuer
    println!("CVV checks:");
    for (code, issuer) in [("123", Issuer::Visa), ("1234", Issuer::AmericanExpress), ("123", Issuer::AmericanExpress)] {
        match cvv::check_cvv(code, Some(issuer)) {
            Ok(()) => println!("  {} for {}: valid", code, issuer),
            Err(e) => println!("  {} for {}: {}", code, issuer, e),
        }
    }
    println!();

    // Example 4: Names
    println!("Name checks:");
    for input in ["John Doe", "Jo", "J0hn"] {
        match name::check_name(input) {
            Ok(()) => println!("  {:?}: valid", input),
            Err(e) => println!("  {:?}: {}", input, e),
        }
    }
    println!();

    // Example 5: Everything wrong at once
    let report = validate_at("abc", "12", "13/25", "J0", today);
    println!("Broken submission errors:");
    for error in &report.errors {
        println!("  {}", error);
    }
    println!("Details:");
    for error in explain_at("abc", "12", "13/25", "J0", today) {
        println!("  {}", error);
    }
}
