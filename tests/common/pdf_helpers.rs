//! PDF inspection helpers.

use anyhow::Result;
use std::path::Path;

use piiredact::{RedactionConfig, RedactionService};

/// Extracts text from a PDF safely, returning an error instead of panicking.
pub fn extract_text(pdf_path: &Path) -> Result<String> {
    let service = RedactionService::new(RedactionConfig::default());
    service
        .extract_text(pdf_path)
        .map_err(|e| anyhow::anyhow!("Failed to extract text: {}", e))
}

/// Checks if a PDF's text layer contains any of the given literals.
pub fn pdf_contains_any(pdf_path: &Path, literals: &[&str]) -> Result<bool> {
    let text = extract_text(pdf_path)?;
    Ok(literals.iter().any(|p| text.contains(p)))
}

/// Checks if a PDF's text layer contains all of the given literals.
pub fn pdf_contains_all(pdf_path: &Path, literals: &[&str]) -> Result<bool> {
    let text = extract_text(pdf_path)?;
    Ok(literals.iter().all(|p| text.contains(p)))
}

/// Validates that a PDF is loadable and has basic structure.
pub fn is_valid_pdf(pdf_path: &Path) -> bool {
    ::lopdf::Document::load(pdf_path).is_ok()
}

/// Gets the file size of a PDF in bytes.
pub fn pdf_size(pdf_path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(pdf_path)?.len())
}
