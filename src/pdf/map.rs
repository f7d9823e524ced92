//! Coordinate mapper: match spans to page-space rectangles.

use std::collections::BTreeMap;

use crate::detect::PiiMatch;
use crate::error::{RedactError, RedactResult};
use crate::geom::Rect;
use crate::pdf::extract::WordBox;

/// Maps a match span onto page rectangles.
///
/// Every word box whose byte range intersects the span contributes its
/// rectangle; boxes on the same line are unioned, so a match spanning a
/// line break yields one rectangle per line rather than one box bridging
/// the gap. Fails with [`RedactError::Mapping`] when no word box intersects
/// the span; the caller drops the match and records it in the run summary.
pub fn map_span(m: &PiiMatch, words: &[WordBox]) -> RedactResult<Vec<Rect>> {
    let mut per_line: BTreeMap<usize, Rect> = BTreeMap::new();

    for word in words {
        if word.start < m.end && word.end > m.start {
            per_line
                .entry(word.line)
                .and_modify(|rect| *rect = rect.union(&word.rect))
                .or_insert(word.rect);
        }
    }

    if per_line.is_empty() {
        return Err(RedactError::Mapping {
            page: m.page,
            category: m.category,
        });
    }

    Ok(per_line.into_values().collect())
}
