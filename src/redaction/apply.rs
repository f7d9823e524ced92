//! Redaction applicator.
//!
//! Places one MuPDF `Redact` annotation per rectangle, then applies the
//! page's redactions. Applying physically removes the glyphs under the
//! boxes from the content stream, so the output cannot leak the matched
//! text through selection or re-extraction. A visual-only overlay is not
//! an option here.

use mupdf::pdf::{PdfAnnotationType, PdfPage};
use mupdf::Rect as MuRect;

use crate::config::Rgb;
use crate::error::{RedactError, RedactResult};
use crate::geom::Rect;

/// Draws and applies redactions on one page.
///
/// Returns the number of rectangles applied. `page_index` is zero-based
/// and only used for error context.
pub fn apply_page(
    pdf_page: &mut PdfPage,
    page_index: usize,
    rects: &[Rect],
    color: Rgb,
) -> RedactResult<usize> {
    let mut applied = 0;

    for rect in rects {
        if rect.is_empty() {
            continue;
        }

        let annot = pdf_page
            .create_annotation(PdfAnnotationType::Redact)
            .map_err(|e| RedactError::Backend {
                backend: "MuPDF".to_string(),
                message: format!(
                    "failed to create redaction annotation on page {}",
                    page_index + 1
                ),
                source: Some(Box::new(e)),
            })?;

        let mu_rect = MuRect {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
        };

        unsafe {
            ffi::set_annotation_rect(&annot, mu_rect);
            ffi::set_annotation_interior_color(&annot, color.components());
        }

        applied += 1;
    }

    if applied > 0 {
        pdf_page.redact().map_err(|e| RedactError::Backend {
            backend: "MuPDF".to_string(),
            message: format!("failed to apply redactions on page {}", page_index + 1),
            source: Some(Box::new(e)),
        })?;
    }

    Ok(applied)
}

/// FFI helpers for MuPDF annotation operations not exposed by the safe API.
mod ffi {
    use mupdf::pdf::PdfAnnotation;
    use mupdf::Rect;

    #[repr(C)]
    struct PdfAnnotRaw {
        inner: *mut mupdf_sys::pdf_annot,
    }

    /// Sets the rectangle for a PDF annotation.
    ///
    /// # Safety
    /// Uses unsafe FFI calls into MuPDF's C API. The annotation must be
    /// valid and backed by a live document.
    pub unsafe fn set_annotation_rect(annot: &PdfAnnotation, rect: Rect) {
        let annot_raw = std::mem::transmute::<&PdfAnnotation, &PdfAnnotRaw>(annot);
        let ctx = mupdf_sys::mupdf_new_base_context();

        if !ctx.is_null() {
            let fz_rect = mupdf_sys::fz_rect {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
            };

            mupdf_sys::pdf_set_annot_rect(ctx, annot_raw.inner, fz_rect);
            mupdf_sys::mupdf_drop_base_context(ctx);
        }
    }

    /// Sets the interior (fill) color drawn when the redaction is applied.
    ///
    /// # Safety
    /// Same requirements as [`set_annotation_rect`].
    pub unsafe fn set_annotation_interior_color(annot: &PdfAnnotation, color: [f32; 3]) {
        let annot_raw = std::mem::transmute::<&PdfAnnotation, &PdfAnnotRaw>(annot);
        let ctx = mupdf_sys::mupdf_new_base_context();

        if !ctx.is_null() {
            mupdf_sys::pdf_set_annot_interior_color(ctx, annot_raw.inner, 3, color.as_ptr());
            mupdf_sys::mupdf_drop_base_context(ctx);
        }
    }
}
