//! PDF-facing components: structured text extraction and span-to-rectangle
//! mapping.

pub mod extract;
pub mod map;

pub use extract::{extract_page, PageText, WordBox};
pub use map::map_span;
