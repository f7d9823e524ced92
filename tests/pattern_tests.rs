//! Detector and matcher coverage against the public API.

use piiredact::{find_matches, Category, PatternLibrary, RedactError, RedactionConfig};

fn library_for(categories: &[Category]) -> PatternLibrary {
    let config = RedactionConfig::new().with_categories(categories.iter().copied());
    PatternLibrary::compile(&config).unwrap()
}

#[test]
fn test_ssn_every_occurrence_exact_span() {
    let lib = library_for(&[Category::Ssn]);
    let text = "a 111-22-3333 b 444-55-6666 c 777 88 9999 d";
    let matches = find_matches(0, text, &lib);

    assert_eq!(matches.len(), 3);
    for m in &matches {
        assert_eq!(&text[m.start..m.end], m.text, "span must cover the match");
    }
    // Non-overlapping, leftmost-first.
    assert!(matches.windows(2).all(|w| w[0].end <= w[1].start));
}

#[test]
fn test_ssn_strict_mode_drops_bare_digits() {
    let text = "formatted 123-45-6789 bare 123456789";

    let loose = PatternLibrary::compile(
        &RedactionConfig::new().with_categories([Category::Ssn]),
    )
    .unwrap();
    assert_eq!(find_matches(0, text, &loose).len(), 2);

    let strict = PatternLibrary::compile(
        &RedactionConfig::new()
            .with_categories([Category::Ssn])
            .with_strict_ssn(true),
    )
    .unwrap();
    let matches = find_matches(0, text, &strict);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "123-45-6789");
}

#[test]
fn test_credit_card_luhn_accept_and_reject() {
    let lib = library_for(&[Category::CreditCard]);

    // Valid checksum: matched.
    let ok = find_matches(0, "pay with 4111111111111111 today", &lib);
    assert_eq!(ok.len(), 1);
    assert_eq!(ok[0].text, "4111111111111111");

    // Same length, failing checksum: not matched.
    let bad = find_matches(0, "pay with 4111111111111112 today", &lib);
    assert!(bad.is_empty());

    // Grouped forms are matched too.
    let grouped = find_matches(0, "card 4111-1111-1111-1111 on file", &lib);
    assert_eq!(grouped.len(), 1);
}

#[test]
fn test_phone_number_formats() {
    let lib = library_for(&[Category::Phone]);
    for sample in [
        "(555) 123-4567",
        "555-987-6543",
        "555.111.2222",
        "5551234567",
    ] {
        let text = format!("call {} now", sample);
        assert!(
            !find_matches(0, &text, &lib).is_empty(),
            "should detect {}",
            sample
        );
    }
}

#[test]
fn test_email_detection() {
    let lib = library_for(&[Category::Email]);
    let matches = find_matches(0, "mail jane.doe+hr@example.co.uk please", &lib);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "jane.doe+hr@example.co.uk");
}

#[test]
fn test_date_of_birth_formats() {
    let lib = library_for(&[Category::Dob]);
    for sample in ["01/15/1985", "1985-01-15", "Jan 15, 1985", "March 3 2001"] {
        let text = format!("DOB {} on file", sample);
        assert!(
            !find_matches(0, &text, &lib).is_empty(),
            "should detect {}",
            sample
        );
    }

    // Years outside 19xx/20xx are not birth dates.
    assert!(find_matches(0, "built 01/15/1885", &lib).is_empty());
}

#[test]
fn test_address_detection() {
    let lib = library_for(&[Category::Address]);
    assert!(!find_matches(0, "lives at 123 Main Street since 2019", &lib).is_empty());
    assert!(!find_matches(0, "Springfield, IL 62704", &lib).is_empty());
}

#[test]
fn test_name_dictionary_whole_word() {
    let lib = library_for(&[Category::Name]);

    let matches = find_matches(0, "Assigned to sarah and JAMES.", &lib);
    assert_eq!(matches.len(), 2);

    // Substrings of other words are not names.
    assert!(find_matches(0, "See the Markdown file", &lib).is_empty());
}

#[test]
fn test_custom_terms_follow_builtins() {
    let config = RedactionConfig::new().with_custom_terms(["Project Phoenix"]);
    let library = PatternLibrary::compile(&config).unwrap();

    let last = library.detectors().last().unwrap();
    assert_eq!(last.category(), Category::Custom);
}

#[test]
fn test_empty_custom_term_rejected_before_run() {
    let config = RedactionConfig::new().with_custom_terms([""]);
    let err = PatternLibrary::compile(&config).unwrap_err();
    assert!(matches!(err, RedactError::InvalidPattern { .. }));

    let config = RedactionConfig::new().with_custom_terms(["  \t "]);
    assert!(PatternLibrary::compile(&config).is_err());
}

#[test]
fn test_overlapping_categories_all_kept() {
    let lib = library_for(&[Category::Ssn, Category::BankAccount]);
    let matches = find_matches(0, "account 123456789", &lib);

    let categories: Vec<Category> = matches.iter().map(|m| m.category).collect();
    assert!(categories.contains(&Category::Ssn));
    assert!(categories.contains(&Category::BankAccount));
}

#[test]
fn test_match_invariants() {
    let lib = PatternLibrary::compile(&RedactionConfig::default()).unwrap();
    let text = "Jane (james@corp.example) 555-123-4567, SSN 123 45 6789, card 4111111111111111";
    let matches = find_matches(0, text, &lib);

    assert!(!matches.is_empty());
    for m in &matches {
        assert!(m.start < m.end);
        assert!(m.end <= text.len());
        assert_eq!(&text[m.start..m.end], m.text);
    }
    assert!(matches.windows(2).all(|w| w[0].start <= w[1].start));
}
