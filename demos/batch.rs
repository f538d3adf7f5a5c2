//! Batch processing example.
//!
//! Run with: `cargo run --example batch`
//! Parallel: `cargo run --example batch --features parallel`

use card_input_validator::{mask, BatchValidator, CardSubmission};
use chrono::NaiveDate;

fn main() {
    println!("=== Batch Card Form Validation ===\n");

    let submissions = vec![
        CardSubmission::new("4111111111111111", "123", "12/25", "John Doe"),
        CardSubmission::new("5500000000000004", "456", "01/24", "Jane Roe"),
        CardSubmission::new("340000000000009", "1234", "06/27", "Ann Lee"),
        CardSubmission::new("340000000000009", "123", "06/27", "Ann Lee"),
        CardSubmission::new("9999999999999", "123", "12/25", "Sam Poe"),
        CardSubmission::new("not a number", "12a", "13/25", "R2D2"),
    ];

    let Some(today) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return;
    };
    let batch = BatchValidator::at(today);

    // Method 1: Reports for every submission
    println!("Using BatchValidator:");
    let reports = batch.validate_all(&submissions);
    for (submission, report) in submissions.iter().zip(&reports) {
        println!(
            "  {:<22} {}",
            mask::mask_number(&submission.card_number),
            if report.overall_status { "PASS" } else { "FAIL" }
        );
        for error in &report.errors {
            println!("      {}", error);
        }
    }
    println!();

    // Method 2: Just the indices that passed
    println!("Valid indices: {:?}", batch.valid_indices(&submissions));

    // Method 3: Summary counts
    let summary = batch.summarize(&submissions);
    println!(
        "Summary: {} total, {} valid, {} invalid",
        summary.total, summary.valid, summary.invalid
    );

    #[cfg(feature = "parallel")]
    {
        let parallel = batch.validate_parallel(&submissions);
        println!("\nParallel results match: {}", parallel == reports);
    }
}
