//! Integration tests for native-locale collators

use std::cmp::Ordering;
use ucoll_core::{collate, Attribute, AttributeValue, Collator};

fn norwegian() -> Collator {
    Collator::new("nb").expect("nb collator")
}

#[test]
fn test_collate_norwegian_vowels() {
    assert_eq!(collate("nb", ["æ", "å", "ø"]).unwrap(), ["æ", "ø", "å"]);
    assert_eq!(norwegian().collate(["å", "ø", "æ"]), ["æ", "ø", "å"]);
}

#[test]
fn test_collate_owned_strings() {
    let items: Vec<String> = ["å", "ø", "æ"].iter().map(|s| s.to_string()).collect();
    let sorted = norwegian().collate(items);
    assert_eq!(sorted, ["æ", "ø", "å"]);
}

#[test]
fn test_collator_locale() {
    assert_eq!(norwegian().locale().unwrap(), "nb");
}

#[test]
fn test_compare() {
    let collator = norwegian();
    assert_eq!(collator.compare("blåbærsyltetøy", "blah"), Ordering::Greater);
    assert_eq!(collator.compare("blah", "blah"), Ordering::Equal);
    assert_eq!(collator.compare("ba", "bl"), Ordering::Less);
}

#[test]
fn test_greater() {
    let collator = norwegian();
    assert!(collator.greater("z", "a"));
    assert!(!collator.greater("a", "z"));
}

#[test]
fn test_greater_or_equal() {
    let collator = norwegian();
    assert!(collator.greater_or_equal("z", "a"));
    assert!(collator.greater_or_equal("z", "z"));
    assert!(!collator.greater_or_equal("a", "z"));
}

#[test]
fn test_equal() {
    let collator = norwegian();
    assert!(collator.equal("a", "a"));
    assert!(!collator.equal("a", "b"));
}

#[test]
fn test_rules_contain_norwegian_tailoring() {
    let collator = norwegian();
    assert!(!collator.rules().is_empty());
    // ö sorts before Ö
    assert!(collator.rules().contains("ö<<<Ö"));
}

#[test]
fn test_attribute_round_trip() {
    let mut collator = Collator::new("en").unwrap();

    for attribute in Attribute::ALL {
        for &value in attribute.supported_values() {
            collator.set(attribute, value).unwrap();
            assert_eq!(collator.get(attribute).unwrap(), value, "{attribute}={value}");
        }
    }
}

#[test]
fn test_hiragana_quaternary_mode_reads_back_off() {
    let mut collator = Collator::new("ja").unwrap();
    collator
        .set_hiragana_quaternary_mode(AttributeValue::On)
        .unwrap();
    assert_eq!(
        collator.hiragana_quaternary_mode().unwrap(),
        AttributeValue::Off
    );
}

#[test]
fn test_default_resets_attribute() {
    let mut collator = Collator::new("en").unwrap();
    collator.set_strength(AttributeValue::Primary).unwrap();
    collator.set_strength(AttributeValue::Default).unwrap();
    assert_eq!(collator.strength().unwrap(), AttributeValue::DEFAULT_STRENGTH);
}

#[test]
fn test_strength_changes_equality() {
    let mut collator = Collator::new("en").unwrap();
    assert!(!collator.equal("resume", "résumé"));

    collator.set_strength(AttributeValue::Primary).unwrap();
    assert!(collator.equal("resume", "résumé"));
    assert!(collator.equal("a", "A"));
}

#[test]
fn test_numeric_collation() {
    let mut collator = Collator::new("en").unwrap();
    assert!(collator.greater("item9", "item10"));

    collator.set_numeric_collation(AttributeValue::On).unwrap();
    assert!(collator.greater("item10", "item9"));
    assert_eq!(
        collator.collate(["item10", "item9", "item1"]),
        ["item1", "item9", "item10"]
    );
}

#[test]
fn test_case_first() {
    let mut collator = Collator::new("en").unwrap();
    collator.set_case_first(AttributeValue::UpperFirst).unwrap();
    assert_eq!(collator.collate(["a", "A"]), ["A", "a"]);

    collator.set_case_first(AttributeValue::LowerFirst).unwrap();
    assert_eq!(collator.collate(["A", "a"]), ["a", "A"]);
}

#[test]
fn test_alternate_shifted_ignores_punctuation() {
    let mut collator = Collator::new("en").unwrap();
    collator.set_strength(AttributeValue::Tertiary).unwrap();
    assert!(!collator.equal("di-aeresis", "diaeresis"));

    collator.set_alternate_handling(AttributeValue::Shifted).unwrap();
    assert!(collator.equal("di-aeresis", "diaeresis"));
}

#[test]
fn test_sort_key_matches_compare() {
    let collator = norwegian();
    let words = ["blåbærsyltetøy", "blah", "ba", "bl", "æ", "ø", "å", "Å", ""];

    for a in words {
        for b in words {
            let by_key = collator.sort_key(a).unwrap().cmp(&collator.sort_key(b).unwrap());
            assert_eq!(by_key, collator.compare(a, b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_sort_key_is_deterministic() {
    let collator = norwegian();
    assert_eq!(
        collator.sort_key("blåbær").unwrap(),
        collator.sort_key("blåbær").unwrap()
    );
}

#[test]
fn test_sort_key_grows_with_input() {
    let collator = norwegian();
    let short = collator.sort_key("a").unwrap();
    let long = collator.sort_key(&"a".repeat(500)).unwrap();
    assert!(long.len() > short.len());
}

#[test]
fn test_collate_by_sort_key_agrees() {
    let collator = norwegian();
    let items = ["å", "blah", "ø", "ba", "æ", "bl"];
    assert_eq!(
        collator.collate_by_sort_key(items).unwrap(),
        collator.collate(items)
    );
}

#[test]
fn test_collate_empty() {
    let empty: Vec<&str> = Vec::new();
    assert!(norwegian().collate(empty).is_empty());
}

#[test]
fn test_version_reported() {
    let version = norwegian().version();
    assert!(version.major() > 0);
}

#[test]
fn test_collator_can_move_between_threads() {
    let collator = norwegian();
    let sorted = std::thread::spawn(move || collator.collate(["å", "æ"]))
        .join()
        .unwrap();
    assert_eq!(sorted, ["æ", "å"]);
}
