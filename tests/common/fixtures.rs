//! Test fixtures and PDF builders.
//!
//! Provides a builder for creating test PDFs with specific PII content,
//! following the Builder pattern for clean test setup. Each line is placed
//! as its own text run so extraction sees distinct lines with distinct
//! geometry.

use anyhow::Result;
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Builder for creating test PDFs with custom content.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_line("Employee record")
///     .with_ssn("123-45-6789")
///     .with_email("jane.doe@example.com")
///     .build(Path::new("/tmp/test.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    pages: Vec<Vec<String>>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    /// Creates a new builder with a single empty page and A4 dimensions.
    pub fn new() -> Self {
        Self {
            title: "Test Document".to_string(),
            pages: vec![Vec::new()],
            page_width: Mm(210.0),
            page_height: Mm(297.0),
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a line of text to the current page.
    pub fn with_line(mut self, line: &str) -> Self {
        self.pages
            .last_mut()
            .expect("builder always has a page")
            .push(line.to_string());
        self
    }

    /// Adds an SSN line to the current page.
    pub fn with_ssn(self, ssn: &str) -> Self {
        let line = format!("SSN: {}", ssn);
        self.with_line(&line)
    }

    /// Adds a phone number line to the current page.
    pub fn with_phone(self, phone: &str) -> Self {
        let line = format!("Phone: {}", phone);
        self.with_line(&line)
    }

    /// Adds an email line to the current page.
    pub fn with_email(self, email: &str) -> Self {
        let line = format!("Email: {}", email);
        self.with_line(&line)
    }

    /// Adds a credit card line to the current page.
    pub fn with_credit_card(self, card: &str) -> Self {
        let line = format!("Card: {}", card);
        self.with_line(&line)
    }

    /// Starts a new page; subsequent lines land on it.
    pub fn with_new_page(mut self) -> Self {
        self.pages.push(Vec::new());
        self
    }

    /// Adds a page with no text at all (simulates a scanned page).
    pub fn with_blank_page(mut self) -> Self {
        self.pages.push(Vec::new());
        // Keep appending to a fresh page after the blank one, so the
        // blank page stays blank.
        self.pages.push(Vec::new());
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        // Trailing empty pages from with_blank_page are kept; they are the
        // point of that method.
        let (doc, page1, layer1) = PdfDocument::new(
            &self.title,
            self.page_width,
            self.page_height,
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut page_refs = vec![(page1, layer1)];
        for _ in 1..self.pages.len() {
            page_refs.push(doc.add_page(self.page_width, self.page_height, "Layer 1"));
        }

        for (page_no, lines) in self.pages.iter().enumerate() {
            let (page_idx, layer_idx) = page_refs[page_no];
            let layer = doc.get_page(page_idx).get_layer(layer_idx);

            let mut y = 270.0;
            for line in lines {
                layer.use_text(line.as_str(), 12.0, Mm(20.0), Mm(y), &font);
                y -= 8.0;
            }
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;

        Ok(output_path.to_path_buf())
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick helper to create a single-page PDF containing one of each of the
/// main PII categories.
pub fn create_pii_document(path: &Path) -> Result<PathBuf> {
    TestPdfBuilder::new()
        .with_title("Employee Record")
        .with_line("Employee record for review")
        .with_ssn("123-45-6789")
        .with_phone("555-123-4567")
        .with_email("jane.doe@example.com")
        .with_credit_card("4111111111111111")
        .with_line("End of record")
        .build(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_pages() {
        let builder = TestPdfBuilder::new()
            .with_line("first page")
            .with_blank_page()
            .with_line("third page");

        assert_eq!(builder.pages.len(), 3);
        assert!(builder.pages[1].is_empty());
        assert_eq!(builder.pages[2], vec!["third page".to_string()]);
    }

    #[test]
    fn test_create_pii_document() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let pdf_path = temp_dir.path().join("pii.pdf");

        create_pii_document(&pdf_path)?;

        assert!(pdf_path.exists());
        Ok(())
    }
}
