//! Run summaries and plain-text redaction reports.
//!
//! Silent gaps would violate the privacy guarantee, so the summary always
//! carries the pages that were skipped for lack of a text layer and the
//! matches that were dropped because no geometry could be found for them.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{RedactError, RedactResult};
use crate::geom::Rect;
use crate::patterns::Category;

/// Association between an applied match and its rectangles.
///
/// Created when redaction is applied and never mutated afterward. The only
/// durable artifact is the drawn box in the output document; nothing
/// reversible is kept by design.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionRecord {
    /// Zero-based page index.
    pub page: usize,
    pub category: Category,
    pub text: String,
    pub rects: Vec<Rect>,
}

/// A page that was not redacted because it has no text layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    /// Zero-based page index.
    pub page: usize,
    pub reason: String,
}

/// A match that was dropped because no word geometry intersected its span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedMatch {
    /// Zero-based page index.
    pub page: usize,
    pub category: Category,
    pub text: String,
}

/// Aggregated outcome of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub pages_processed: usize,
    pub pages_modified: usize,
    /// Matches applied (or, for a scan, matches that would be applied).
    pub records: Vec<RedactionRecord>,
    /// Pages skipped for lack of a text layer, in page order.
    pub skipped_pages: Vec<SkippedPage>,
    /// Matches dropped by mapping failure.
    pub dropped_matches: Vec<DroppedMatch>,
}

impl RunSummary {
    /// Number of matches redacted.
    pub fn instances_redacted(&self) -> usize {
        self.records.len()
    }

    /// Number of rectangles drawn across all pages.
    pub fn rectangles_drawn(&self) -> usize {
        self.records.iter().map(|r| r.rects.len()).sum()
    }

    pub fn has_redactions(&self) -> bool {
        !self.records.is_empty()
    }

    /// True when nothing was skipped or dropped.
    pub fn is_complete(&self) -> bool {
        self.skipped_pages.is_empty() && self.dropped_matches.is_empty()
    }

    /// Match counts per category.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }

    /// Category counts sorted most-frequent first.
    pub fn counts_by_frequency(&self) -> Vec<(Category, usize)> {
        let mut entries: Vec<(Category, usize)> = self.counts().into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Renders the plain-text report for this run.
    ///
    /// Pages are shown one-based. Matched text appears verbatim, so the
    /// report file itself is sensitive; it is only produced on request.
    pub fn render_report(&self, source: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Redaction Report");
        let _ = writeln!(out, "Source: {}", source);
        let _ = writeln!(
            out,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out);
        let _ = writeln!(out, "Items redacted: {}", self.instances_redacted());
        let _ = writeln!(out);

        for record in &self.records {
            let _ = writeln!(
                out,
                "Page {}: [{}] \"{}\"",
                record.page + 1,
                record.category.label(),
                record.text
            );
        }

        if !self.records.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "By category:");
            for (category, count) in self.counts_by_frequency() {
                let _ = writeln!(out, "  {}: {}", category.label(), count);
            }
        }

        if !self.skipped_pages.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Pages not redacted (no text layer):");
            for skipped in &self.skipped_pages {
                let _ = writeln!(out, "  Page {}: {}", skipped.page + 1, skipped.reason);
            }
        }

        if !self.dropped_matches.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Matches dropped (no geometry found):");
            for dropped in &self.dropped_matches {
                let _ = writeln!(
                    out,
                    "  Page {}: [{}] \"{}\"",
                    dropped.page + 1,
                    dropped.category.label(),
                    dropped.text
                );
            }
        }

        out
    }

    /// Writes the report to a file.
    pub fn write_report(&self, path: &Path, source: &str) -> RedactResult<()> {
        std::fs::write(path, self.render_report(source)).map_err(|e| RedactError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
