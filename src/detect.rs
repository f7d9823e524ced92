//! Matcher: runs the pattern library over extracted page text.
//!
//! Each detector contributes its leftmost non-overlapping matches. Matches
//! from different categories may overlap; both are kept, since redaction
//! only adds coverage. Exact duplicates (same span, same category) are
//! collapsed.

use crate::patterns::{Category, PatternLibrary};

/// A single detection: a half-open byte span `[start, end)` into one page's
/// extracted text.
///
/// Invariant: `start < end` and the span lies within the page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiiMatch {
    /// Zero-based page index.
    pub page: usize,
    pub category: Category,
    pub start: usize,
    pub end: usize,
    /// The matched text, kept for reporting.
    pub text: String,
}

impl PiiMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Finds all matches on one page, ordered by start offset.
pub fn find_matches(page: usize, text: &str, library: &PatternLibrary) -> Vec<PiiMatch> {
    let mut matches = Vec::new();

    for detector in library.detectors() {
        for rule in detector.rules() {
            for m in rule.find_iter(text) {
                if m.as_str().is_empty() || !detector.accepts(m.as_str()) {
                    continue;
                }
                matches.push(PiiMatch {
                    page,
                    category: detector.category(),
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                });
            }
        }
    }

    matches.sort_by_key(|m| (m.start, m.end, m.category));
    matches.dedup_by(|a, b| a.start == b.start && a.end == b.end && a.category == b.category);
    matches
}
