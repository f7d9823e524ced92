//! Document writer.
//!
//! The output is first saved to a hidden temporary file in the destination
//! directory and then renamed into place, so a failed or cancelled run
//! never leaves a partially-redacted document at the final path. The
//! source file is never modified.

use std::path::{Path, PathBuf};

use mupdf::pdf::PdfDocument;

use crate::error::{RedactError, RedactResult};

/// Checks that the destination is writable in principle: it must name a
/// file and its parent directory must already exist.
pub fn validate_output_path(output: &Path) -> RedactResult<()> {
    if output.file_name().is_none() {
        return Err(RedactError::Write {
            path: output.to_path_buf(),
            reason: "destination does not name a file".to_string(),
        });
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(RedactError::Write {
                path: output.to_path_buf(),
                reason: format!("destination directory '{}' does not exist", parent.display()),
            });
        }
    }

    Ok(())
}

/// Sibling temporary path for an output file. Same directory, so the final
/// rename stays on one filesystem and is atomic.
fn temp_path_for(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.pdf".to_string());
    output.with_file_name(format!(".{}.tmp", name))
}

/// Serializes the document to `output`.
///
/// Fails with [`RedactError::Write`] on I/O failure or a missing
/// destination directory; the temporary file is removed on any failure.
pub fn write_document(doc: &PdfDocument, output: &Path) -> RedactResult<()> {
    validate_output_path(output)?;

    let temp = temp_path_for(output);
    let temp_str = temp.to_str().ok_or_else(|| RedactError::Write {
        path: output.to_path_buf(),
        reason: "destination path contains invalid UTF-8".to_string(),
    })?;

    if let Err(e) = doc.save(temp_str) {
        let _ = std::fs::remove_file(&temp);
        return Err(RedactError::Write {
            path: output.to_path_buf(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = std::fs::rename(&temp, output) {
        let _ = std::fs::remove_file(&temp);
        return Err(RedactError::Write {
            path: output.to_path_buf(),
            reason: e.to_string(),
        });
    }

    Ok(())
}
