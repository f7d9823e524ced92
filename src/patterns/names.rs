//! Static common-first-name dictionary.
//!
//! Name detection is a blunt instrument: it misses uncommon names and can
//! flag ordinary words that double as names (e.g. "Mark"). It is a
//! best-effort supplementary category, not the primary guarantee, and the
//! list is intentionally limited to very common US first names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Common US first names matched as whole words, case-insensitively.
pub const COMMON_FIRST_NAMES: [&str; 30] = [
    "James",
    "John",
    "Robert",
    "Michael",
    "William",
    "David",
    "Richard",
    "Joseph",
    "Thomas",
    "Charles",
    "Mary",
    "Patricia",
    "Jennifer",
    "Linda",
    "Barbara",
    "Elizabeth",
    "Susan",
    "Jessica",
    "Sarah",
    "Karen",
    "Christopher",
    "Daniel",
    "Matthew",
    "Anthony",
    "Mark",
    "Donald",
    "Steven",
    "Paul",
    "Andrew",
    "Joshua",
];

/// Whole-word, case-insensitive alternation over [`COMMON_FIRST_NAMES`].
pub fn name_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        let alternation = COMMON_FIRST_NAMES.join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid name regex")
    });
    &PATTERN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        assert!(name_pattern().is_match("Contact Sarah about the audit"));
        // Substrings of longer words must not match.
        assert!(!name_pattern().is_match("Markdown"));
        assert!(!name_pattern().is_match("Johnson"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(name_pattern().is_match("JAMES"));
        assert!(name_pattern().is_match("james"));
    }

    #[test]
    fn test_every_listed_name_matches() {
        for name in COMMON_FIRST_NAMES {
            assert!(name_pattern().is_match(name), "should match {}", name);
        }
    }
}
