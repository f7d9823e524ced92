//! Offline PII detection and irreversible redaction for PDF documents.
//!
//! This library scans the text layer of each page for personally
//! identifiable information, maps every match back to page coordinates,
//! and draws opaque boxes over the matched regions while physically
//! removing the underlying text via MuPDF's redaction API. The output
//! cannot leak matched content through copy-paste or re-extraction.
//!
//! # Features
//!
//! - **Built-in detectors**: SSNs, phone numbers, emails, addresses,
//!   dates of birth, bank accounts, Luhn-validated credit cards, and a
//!   common-first-names dictionary
//! - **Custom terms**: user-supplied literals, matched case-insensitively
//! - **Genuine removal**: content-stream redaction, not a visual overlay
//! - **Accountable gaps**: pages without a text layer and matches that
//!   could not be mapped are reported, never silently ignored
//! - **Offline**: local filesystem only; no component performs network I/O
//!
//! # Architecture
//!
//! - [`patterns`]: detector categories and the compiled pattern library
//! - [`detect`]: span matching over extracted page text
//! - [`pdf`]: text extraction with word geometry, span-to-rectangle mapping
//! - [`redaction`]: the page pipeline, redaction applicator, and writer
//! - [`report`]: run summaries and plain-text reports
//! - [`error`]: crate-wide error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use piiredact::{RedactionConfig, RedactionService};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedactionService::new(RedactionConfig::default());
//!
//! let summary = service.redact(Path::new("input.pdf"), Path::new("redacted.pdf"))?;
//! println!("{} item(s) redacted", summary.instances_redacted());
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Restrict categories and add a custom term
//!
//! ```no_run
//! use piiredact::{Category, RedactionConfig, RedactionService};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RedactionConfig::new()
//!     .with_categories([Category::Ssn, Category::Email])
//!     .with_custom_terms(["Project Phoenix"]);
//!
//! let service = RedactionService::new(config);
//! service.redact(Path::new("report.pdf"), Path::new("clean.pdf"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern matching without a document
//!
//! ```
//! use piiredact::{find_matches, PatternLibrary, RedactionConfig};
//!
//! let library = PatternLibrary::compile(&RedactionConfig::default()).unwrap();
//! let matches = find_matches(0, "SSN on file: 123-45-6789", &library);
//! assert!(matches.iter().any(|m| m.text == "123-45-6789"));
//! ```

// Public API
pub mod config;
pub mod detect;
pub mod error;
pub mod geom;
pub mod patterns;
pub mod pdf;
pub mod redaction;
pub mod report;

// Re-exports for convenient access
pub use config::{RedactionConfig, Rgb};
pub use detect::{find_matches, PiiMatch};
pub use error::{RedactError, RedactResult};
pub use geom::Rect;
pub use patterns::{Category, Detector, PatternLibrary};
pub use pdf::{PageText, WordBox};
pub use redaction::{CancelFlag, RedactionService};
pub use report::{DroppedMatch, RedactionRecord, RunSummary, SkippedPage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let _service = RedactionService::new(RedactionConfig::default());
    }

    #[test]
    fn test_default_library_compiles() {
        let library = PatternLibrary::compile(&RedactionConfig::default()).unwrap();
        assert_eq!(library.detectors().len(), Category::BUILT_INS.len());
    }
}
