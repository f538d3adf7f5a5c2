//! CLI tool for card form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a full submission
//! cardcheck validate 4111111111111111 123 12/29 "John Doe"
//!
//! # Same, as JSON, pinned to a date
//! cardcheck --today 2024-01-01 validate 4111111111111111 123 12/25 "John Doe" -o json
//!
//! # Single field checks
//! cardcheck detect 340000000000009
//! cardcheck cvv 1234 --issuer amex
//! cardcheck expiry 12/29
//! cardcheck name "John Doe"
//!
//! # Validate a JSON array of submissions
//! cardcheck batch submissions.json
//! ```
//!
//! Every command exits with status 0 when the input passes and 1 otherwise.

use card_input_validator::{
    cvv, detect, expiry, mask, name, number, BatchSummary, BatchValidator, CardSubmission, Issuer,
    ValidationReport,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Payment card form validation tool")]
struct Cli {
    /// Date to check expiry against (YYYY-MM-DD); defaults to today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number, CVV, expiry and cardholder name together
    Validate {
        /// Card number (digits only)
        card_number: String,

        /// CVV
        cvv: String,

        /// Expiry date (MM/YY)
        expiry: String,

        /// Cardholder name
        name: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect the issuer of a card number
    Detect {
        /// Card number
        card_number: String,
    },

    /// Validate a CVV
    Cvv {
        /// CVV to validate
        cvv: String,

        /// Card issuer (affects valid length): visa, mastercard, amex, discover
        #[arg(short, long, value_parser = parse_issuer)]
        issuer: Option<Issuer>,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YY)
        date: String,
    },

    /// Validate a cardholder name
    Name {
        /// Cardholder name
        name: String,
    },

    /// Validate a JSON file holding an array of submissions
    Batch {
        /// Path to a JSON array of {card_number, cvv, expiry, name} objects
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_issuer(label: &str) -> Result<Issuer, String> {
    Issuer::from_label(label).ok_or_else(|| format!("unrecognized issuer '{}'", label))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(expiry::today);

    let passed = match cli.command {
        Commands::Validate {
            card_number,
            cvv,
            expiry,
            name,
            output,
        } => {
            let submission = CardSubmission::new(card_number, cvv, expiry, name);
            cmd_validate(&submission, today, output)
        }
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Cvv { cvv, issuer } => cmd_cvv(&cvv, issuer),
        Commands::Expiry { date } => cmd_expiry(&date, today),
        Commands::Name { name } => cmd_name(&name),
        Commands::Batch { file, output } => match cmd_batch(&file, today, output) {
            Ok(passed) => passed,
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        },
    };

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &ValidationReport, card_number: &str) {
    let mark = |ok: bool| if ok { "yes" } else { "no" };
    println!("Card Number: {} ({})", mark(report.card_number_valid), mask::mask_number(card_number));
    match report.issuer {
        Some(issuer) => println!("Issuer: {}", issuer),
        None => println!("Issuer: -"),
    }
    println!("CVV: {}", mark(report.cvv_valid));
    println!("Expiry: {}", mark(report.expiry_valid));
    println!("Name: {}", mark(report.name_valid));
    println!("Overall: {}", if report.overall_status { "PASS" } else { "FAIL" });
}

fn cmd_validate(submission: &CardSubmission, today: NaiveDate, output: OutputFormat) -> bool {
    let report = submission.validate_at(today);

    match output {
        OutputFormat::Text => {
            print_report(&report, &submission.card_number);
            for error in submission.explain_at(today) {
                println!("Error: {} ({})", error.report_message(), error);
            }
        }
        OutputFormat::Json => match report.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return false;
            }
        },
    }

    report.overall_status
}

fn cmd_detect(card_number: &str) -> bool {
    let known = detect::detect_known_issuer(card_number);
    match known {
        Some(issuer) => {
            println!("Detected Issuer: {}", issuer);
            println!("Valid Lengths: {:?}", issuer.valid_lengths());
            println!("CVV Length: {}", issuer.cvv_length());
        }
        None => println!("Detected Issuer: {}", Issuer::Unknown),
    }
    if let Err(e) = number::check_number_format(card_number) {
        println!("Format: {}", e);
        return false;
    }
    known.is_some()
}

fn cmd_cvv(input: &str, issuer: Option<Issuer>) -> bool {
    match cvv::check_cvv(input, issuer) {
        Ok(()) => {
            println!("Valid: yes");
            println!("Length: {} digits", cvv::cvv_length_for(issuer));
            true
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            false
        }
    }
}

fn cmd_expiry(date: &str, today: NaiveDate) -> bool {
    match expiry::check_expiry_at(date, today) {
        Ok(exp) => {
            println!("Valid: yes");
            println!("Month: {:02}", exp.month());
            println!("Year: {}", exp.year());
            println!("Months Until Expiry: {}", exp.months_until_expiry_at(today));
            true
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            false
        }
    }
}

fn cmd_name(input: &str) -> bool {
    match name::check_name(input) {
        Ok(()) => {
            println!("Valid: yes");
            true
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            false
        }
    }
}

fn cmd_batch(
    file: &Path,
    today: NaiveDate,
    output: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file)?;
    let submissions: Vec<CardSubmission> = serde_json::from_str(&contents)?;

    let batch = BatchValidator::at(today);
    let reports = batch.validate_all(&submissions);
    let summary = BatchSummary::from_reports(&reports);

    match output {
        OutputFormat::Text => {
            for (i, (submission, report)) in submissions.iter().zip(&reports).enumerate() {
                println!(
                    "#{} {} {} {}",
                    i,
                    mask::mask_number(&submission.card_number),
                    report.issuer.map_or("-", |issuer| issuer.name()),
                    if report.overall_status { "PASS" } else { "FAIL" }
                );
                for error in &report.errors {
                    println!("    {}", error);
                }
            }
            println!(
                "Total: {}, Valid: {}, Invalid: {}",
                summary.total, summary.valid, summary.invalid
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(summary.invalid == 0)
}
