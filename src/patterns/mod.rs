//! Detector categories and the pattern library.
//!
//! The library exposes an ordered sequence of [`Detector`]s: built-in
//! categories in a fixed order, followed by user-supplied custom terms in
//! input order. Custom terms are validated and compiled before a run
//! starts, so a bad term never aborts a run midway.

pub mod builtin;
pub mod names;

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::config::RedactionConfig;
use crate::error::{RedactError, RedactResult};

/// A detector category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Ssn,
    Phone,
    Email,
    Address,
    Dob,
    BankAccount,
    CreditCard,
    Name,
    Custom,
}

impl Category {
    /// Built-in categories in library order. `Custom` is not listed; custom
    /// detectors are always appended after the built-ins.
    pub const BUILT_INS: [Category; 8] = [
        Category::Ssn,
        Category::Phone,
        Category::Email,
        Category::Address,
        Category::Dob,
        Category::BankAccount,
        Category::CreditCard,
        Category::Name,
    ];

    /// Lowercase identifier used on the CLI and in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ssn => "ssn",
            Category::Phone => "phone",
            Category::Email => "email",
            Category::Address => "address",
            Category::Dob => "dob",
            Category::BankAccount => "bank_account",
            Category::CreditCard => "credit_card",
            Category::Name => "name",
            Category::Custom => "custom",
        }
    }

    /// Uppercase tag used in redaction reports, e.g. `[SSN]`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ssn => "SSN",
            Category::Phone => "PHONE",
            Category::Email => "EMAIL",
            Category::Address => "ADDRESS",
            Category::Dob => "DOB",
            Category::BankAccount => "BANK_ACCOUNT",
            Category::CreditCard => "CREDIT_CARD",
            Category::Name => "NAME",
            Category::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RedactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssn" => Ok(Category::Ssn),
            "phone" | "phones" => Ok(Category::Phone),
            "email" => Ok(Category::Email),
            "address" | "addresses" => Ok(Category::Address),
            "dob" => Ok(Category::Dob),
            "bank" | "bank_account" => Ok(Category::BankAccount),
            "credit_card" | "cc" => Ok(Category::CreditCard),
            "name" | "names" => Ok(Category::Name),
            other => Err(RedactError::InvalidInput {
                parameter: "categories".to_string(),
                reason: format!("unknown category '{}'", other),
            }),
        }
    }
}

/// A compiled detector: one category, one or more matching rules, and an
/// optional post-match validator (e.g. the Luhn checksum for credit cards).
pub struct Detector {
    category: Category,
    rules: Vec<Regex>,
    validate: Option<fn(&str) -> bool>,
}

impl Detector {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rules(&self) -> &[Regex] {
        &self.rules
    }

    /// Applies the post-match validator, if any. Matches that fail are not
    /// reported at all.
    pub fn accepts(&self, matched: &str) -> bool {
        self.validate.map_or(true, |v| v(matched))
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("category", &self.category)
            .field("rules", &self.rules.len())
            .field("validated", &self.validate.is_some())
            .finish()
    }
}

/// Ordered collection of detectors for one run.
#[derive(Debug)]
pub struct PatternLibrary {
    detectors: Vec<Detector>,
}

impl PatternLibrary {
    /// Compiles the library for a run configuration.
    ///
    /// Built-ins come first in [`Category::BUILT_INS`] order, restricted to
    /// the enabled set; custom terms follow in input order. Empty or
    /// whitespace-only custom terms are rejected here, before any document
    /// is opened.
    pub fn compile(config: &RedactionConfig) -> RedactResult<Self> {
        let mut detectors = Vec::new();

        for category in Category::BUILT_INS {
            if !config.categories.contains(&category) {
                continue;
            }
            detectors.push(Detector {
                category,
                rules: builtin::rules_for(category, config.strict_ssn),
                validate: builtin::validator_for(category),
            });
        }

        for term in &config.custom_terms {
            detectors.push(Self::compile_custom_term(term)?);
        }

        Ok(Self { detectors })
    }

    /// Compiles one literal custom term into a case-insensitive detector.
    fn compile_custom_term(term: &str) -> RedactResult<Detector> {
        if term.trim().is_empty() {
            return Err(RedactError::InvalidPattern {
                term: term.to_string(),
                reason: "term is empty or whitespace-only".to_string(),
            });
        }

        let pattern = format!("(?i){}", regex::escape(term));
        let rule = Regex::new(&pattern).map_err(|e| RedactError::InvalidPattern {
            term: term.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Detector {
            category: Category::Custom,
            rules: vec![rule],
            validate: None,
        })
    }

    /// The ordered detector sequence.
    pub fn detectors(&self) -> &[Detector] {
        &self.detectors
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
