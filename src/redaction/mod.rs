//! Redaction service: the page-at-a-time detection and redaction pipeline.
//!
//! For each page: extract text with word geometry, run the pattern
//! library, map match spans to rectangles, then draw and apply redaction
//! annotations. Pages with no text layer are skipped and reported;
//! matches with no geometry are dropped and reported. Only a failure to
//! write the final output aborts the run.

pub mod apply;
pub mod writer;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mupdf::pdf::{PdfDocument, PdfPage};
use tracing::{debug, warn};

use crate::config::RedactionConfig;
use crate::detect;
use crate::error::{RedactError, RedactResult};
use crate::geom::Rect;
use crate::patterns::PatternLibrary;
use crate::pdf::{extract_page, map_span};
use crate::report::{DroppedMatch, RedactionRecord, RunSummary, SkippedPage};

/// Cooperative cancellation flag, checked between pages.
///
/// Cancelling aborts the run before the output is renamed into place, so
/// no partially-redacted file ever reaches the destination path.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// High-level API for scanning and redacting PDF documents.
pub struct RedactionService {
    config: RedactionConfig,
}

impl RedactionService {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Redacts `input` into a new document at `output`.
    ///
    /// The source file is never modified; source and output must be
    /// distinct paths.
    pub fn redact(&self, input: &Path, output: &Path) -> RedactResult<RunSummary> {
        self.redact_cancellable(input, output, &CancelFlag::new())
    }

    /// [`Self::redact`] with a caller-owned cancellation flag.
    pub fn redact_cancellable(
        &self,
        input: &Path,
        output: &Path,
        cancel: &CancelFlag,
    ) -> RedactResult<RunSummary> {
        if input == output {
            return Err(RedactError::InvalidInput {
                parameter: "output".to_string(),
                reason: "output path must differ from the input path".to_string(),
            });
        }

        // Custom terms and the destination are validated before any page
        // is touched.
        let library = PatternLibrary::compile(&self.config)?;
        writer::validate_output_path(output)?;

        let doc = self.open(input)?;
        let summary = self.process_document(&doc, &library, cancel, true)?;
        writer::write_document(&doc, output)?;

        Ok(summary)
    }

    /// Detects PII without writing a redacted document.
    ///
    /// The summary's records describe what a redaction run would apply.
    pub fn scan(&self, input: &Path) -> RedactResult<RunSummary> {
        let library = PatternLibrary::compile(&self.config)?;
        let doc = self.open(input)?;
        self.process_document(&doc, &library, &CancelFlag::new(), false)
    }

    /// Extracts the full text of a PDF for debugging and verification.
    pub fn extract_text(&self, input: &Path) -> RedactResult<String> {
        let bytes = std::fs::read(input).map_err(|e| RedactError::Io {
            path: input.to_path_buf(),
            source: e,
        })?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| RedactError::Backend {
            backend: "pdf-extract".to_string(),
            message: e.to_string(),
            source: None,
        })
    }

    fn open(&self, input: &Path) -> RedactResult<PdfDocument> {
        if !input.exists() {
            return Err(RedactError::Io {
                path: input.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "input file does not exist",
                ),
            });
        }

        let input_str = input.to_str().ok_or_else(|| RedactError::InvalidInput {
            parameter: "input".to_string(),
            reason: "path contains invalid UTF-8".to_string(),
        })?;

        PdfDocument::open(input_str).map_err(|e| RedactError::Backend {
            backend: "MuPDF".to_string(),
            message: format!("failed to open '{}'", input.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Runs detection (and, when `apply` is set, redaction) over every page.
    fn process_document(
        &self,
        doc: &PdfDocument,
        library: &PatternLibrary,
        cancel: &CancelFlag,
        apply: bool,
    ) -> RedactResult<RunSummary> {
        let page_count = doc.page_count()?;

        let mut summary = RunSummary {
            pages_processed: page_count as usize,
            ..Default::default()
        };

        for page_idx in 0..page_count {
            if cancel.is_cancelled() {
                return Err(RedactError::Cancelled);
            }

            let page = doc.load_page(page_idx).map_err(|e| RedactError::Backend {
                backend: "MuPDF".to_string(),
                message: format!("failed to load page {}", page_idx + 1),
                source: Some(Box::new(e)),
            })?;
            let idx = page_idx as usize;

            let extracted = match extract_page(&page, idx) {
                Ok(extracted) => extracted,
                Err(RedactError::Extraction { page, reason }) => {
                    warn!(page = page + 1, "skipping page: {}", reason);
                    summary.skipped_pages.push(SkippedPage { page, reason });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let matches = detect::find_matches(idx, &extracted.text, library);
            if matches.is_empty() {
                continue;
            }
            debug!(page = idx + 1, matches = matches.len(), "detected PII");

            let mut page_rects: Vec<Rect> = Vec::new();
            for m in matches {
                match map_span(&m, &extracted.words) {
                    Ok(rects) => {
                        page_rects.extend(rects.iter().copied());
                        summary.records.push(RedactionRecord {
                            page: m.page,
                            category: m.category,
                            text: m.text,
                            rects,
                        });
                    }
                    Err(RedactError::Mapping { .. }) => {
                        warn!(
                            page = m.page + 1,
                            category = %m.category,
                            "dropping match: no word geometry intersects its span"
                        );
                        summary.dropped_matches.push(DroppedMatch {
                            page: m.page,
                            category: m.category,
                            text: m.text,
                        });
                    }
                    Err(e) => return Err(e),
                }
            }

            if !apply || page_rects.is_empty() {
                continue;
            }

            // Non-PDF pages cannot carry annotations; nothing to redact on
            // them either.
            let mut pdf_page = match PdfPage::try_from(page.clone()) {
                Ok(p) => p,
                Err(_) => continue,
            };

            apply::apply_page(&mut pdf_page, idx, &page_rects, self.config.color)?;
            summary.pages_modified += 1;
        }

        Ok(summary)
    }
}
