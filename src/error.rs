//! Error types for the PII redaction library.
//!
//! A single crate-wide error enum categorizes failures by their source. The
//! run-level policy lives in [`crate::redaction`]: extraction and mapping
//! failures are recovered per page/per match and surface through the run
//! summary, while write failures abort the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::patterns::Category;

/// Result type alias for redaction operations.
pub type RedactResult<T> = Result<T, RedactError>;

/// Comprehensive error type for all redaction operations.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Error occurred while reading or writing files.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A page has no extractable text layer (e.g. a scanned image).
    ///
    /// Recoverable: the page is skipped for text-based detection and
    /// reported in the run summary as "not redacted: no text layer".
    #[error("no extractable text on page {page}: {reason}")]
    Extraction { page: usize, reason: String },

    /// A user-supplied custom term could not be compiled into a detector.
    ///
    /// Raised before the run starts; nothing has been processed yet.
    #[error("invalid custom term '{term}': {reason}")]
    InvalidPattern { term: String, reason: String },

    /// A match span could not be mapped onto any word geometry.
    ///
    /// Indicates an extractor/matcher offset inconsistency. Recoverable:
    /// the match is dropped and reported in the run summary.
    #[error("no word geometry intersects the {category} match on page {page}")]
    Mapping { page: usize, category: Category },

    /// The output document could not be saved.
    ///
    /// Fatal to the run. The source file is left untouched and any
    /// temporary output is cleaned up.
    #[error("failed to write output '{path}': {reason}")]
    Write { path: PathBuf, reason: String },

    /// Invalid configuration or parameters.
    #[error("invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Backend-specific error (MuPDF, pdf-extract).
    #[error("{backend} backend error: {message}")]
    Backend {
        backend: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The run was cancelled between pages; no output was written.
    #[error("run cancelled before completion")]
    Cancelled,
}

impl From<mupdf::Error> for RedactError {
    fn from(err: mupdf::Error) -> Self {
        Self::Backend {
            backend: "MuPDF".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<regex::Error> for RedactError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern {
            term: "<built-in>".to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedactError::InvalidPattern {
            term: "   ".to_string(),
            reason: "term is empty or whitespace-only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid custom term '   ': term is empty or whitespace-only"
        );
    }

    #[test]
    fn test_mapping_error_names_category() {
        let err = RedactError::Mapping {
            page: 3,
            category: Category::Ssn,
        };
        assert!(err.to_string().contains("ssn"));
        assert!(err.to_string().contains("page 3"));
    }

    #[test]
    fn test_io_error_source_preserved() {
        let err = RedactError::Io {
            path: PathBuf::from("/tmp/in.pdf"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
