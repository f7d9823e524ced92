//! Run configuration: enabled categories, custom terms, fill color,
//! SSN strictness.

use std::collections::BTreeSet;

use crate::error::{RedactError, RedactResult};
use crate::patterns::Category;

/// An opaque RGB fill color for redaction boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses a `RRGGBB` hex string (optionally prefixed with `#`).
    pub fn from_hex(hex: &str) -> RedactResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RedactError::InvalidInput {
                parameter: "color".to_string(),
                reason: format!("'{}' is not a RRGGBB hex color", hex),
            });
        }
        // Length and digit checks above make these parses infallible.
        let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
        Ok(Rgb { r, g, b })
    }

    /// Components scaled to the 0.0..=1.0 range PDF color operators use.
    pub fn components(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Configuration for a redaction run.
///
/// Defaults to every built-in category enabled, no custom terms, a black
/// fill, and the permissive SSN mode (formatted and bare 9-digit forms).
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    /// Built-in detector categories to run.
    pub categories: BTreeSet<Category>,

    /// User-supplied literal terms, matched case-insensitively.
    pub custom_terms: Vec<String>,

    /// Fill color for redaction boxes.
    pub color: Rgb,

    /// When set, the SSN detector only accepts formatted values and
    /// ignores bare 9-digit runs.
    pub strict_ssn: bool,
}

impl RedactionConfig {
    pub fn new() -> Self {
        Self {
            categories: Category::BUILT_INS.iter().copied().collect(),
            custom_terms: Vec::new(),
            color: Rgb::BLACK,
            strict_ssn: false,
        }
    }

    /// Restricts the run to the given built-in categories.
    pub fn with_categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Appends user-supplied literal terms.
    pub fn with_custom_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_strict_ssn(mut self, strict: bool) -> Self {
        self.strict_ssn = strict;
        self
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self::new()
    }
}
