//! Built-in detection rules for the standard PII categories.
//!
//! Detection is heuristic by design: the patterns favor over-matching,
//! since an extra black box is safer than leaked PII. The credit card rule
//! is the exception; to keep it from triggering on arbitrary digit runs,
//! matches must additionally pass the Luhn checksum.

use once_cell::sync::Lazy;
use regex::Regex;

use super::names;
use super::Category;

/// Formatted SSNs: `123-45-6789` or `123 45 6789`.
pub fn ssn_formatted() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b\d{3}-\d{2}-\d{4}\b|\b\d{3}\s\d{2}\s\d{4}\b").expect("valid SSN regex")
    });
    &PATTERN
}

/// Bare 9-digit runs, accepted in the default (permissive) SSN mode.
pub fn ssn_unformatted() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b\d{9}\b").expect("valid SSN digit-run regex"));
    &PATTERN
}

/// NANP-style phone numbers: `(555) 123-4567`, `555-123-4567`, `555.123.4567`.
pub fn phone() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("valid phone regex")
    });
    &PATTERN
}

/// Email addresses.
pub fn email() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("valid email regex")
    });
    &PATTERN
}

/// Card-like digit sequences, 13-16 digits with optional space/dash
/// grouping. Candidates still have to pass [`credit_card_valid`].
pub fn credit_card() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{1,4}\b|\b\d{13,16}\b")
            .expect("valid credit card regex")
    });
    &PATTERN
}

/// Bank account numbers: 8-17 digit runs.
pub fn bank_account() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b\d{8,17}\b").expect("valid bank account regex"));
    &PATTERN
}

/// Dates of birth: `MM/DD/YYYY`, `YYYY-MM-DD`, and `Month D, YYYY` forms,
/// restricted to 19xx/20xx years.
pub fn date_of_birth() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)(?:\b(?:0?[1-9]|1[0-2])[-/](?:0?[1-9]|[12]\d|3[01])[-/](?:19|20)\d{2}\b)|(?:\b(?:19|20)\d{2}[-/](?:0?[1-9]|1[0-2])[-/](?:0?[1-9]|[12]\d|3[01])\b)|(?:\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2},?\s+(?:19|20)\d{2}\b)",
        )
        .expect("valid date-of-birth regex")
    });
    &PATTERN
}

/// US street addresses and `City, ST 12345` lines.
pub fn address() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)(?:\b\d{1,5}\s+[\w\s]{1,30}\s+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct)\.?\b)|(?:\b[A-Z][a-z]+,?\s+[A-Z]{2}\s+\d{5}(?:-\d{4})?\b)",
        )
        .expect("valid address regex")
    });
    &PATTERN
}

/// Matching rules for a built-in category.
///
/// The SSN ruleset depends on the strictness mode: strict mode keeps only
/// the formatted variants, the default adds bare 9-digit runs.
pub fn rules_for(category: Category, strict_ssn: bool) -> Vec<Regex> {
    match category {
        Category::Ssn => {
            let mut rules = vec![ssn_formatted().clone()];
            if !strict_ssn {
                rules.push(ssn_unformatted().clone());
            }
            rules
        }
        Category::Phone => vec![phone().clone()],
        Category::Email => vec![email().clone()],
        Category::Address => vec![address().clone()],
        Category::Dob => vec![date_of_birth().clone()],
        Category::BankAccount => vec![bank_account().clone()],
        Category::CreditCard => vec![credit_card().clone()],
        Category::Name => vec![names::name_pattern().clone()],
        Category::Custom => Vec::new(),
    }
}

/// Post-match validator for a built-in category, if it has one.
pub fn validator_for(category: Category) -> Option<fn(&str) -> bool> {
    match category {
        Category::CreditCard => Some(credit_card_valid),
        _ => None,
    }
}

/// Accepts a card-like match: 13-16 digits that pass the Luhn checksum.
pub fn credit_card_valid(matched: &str) -> bool {
    let digits: String = matched.chars().filter(|c| c.is_ascii_digit()).collect();
    (13..=16).contains(&digits.len()) && luhn_check(&digits)
}

/// Luhn checksum over a digit string.
pub fn luhn_check(digits: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}
