//! Basic tests for ucoll-api

use std::io::Write;
use ucoll_api::*;

#[test]
fn test_input_text_processing() {
    let items = Input::Text("æ\nå\nø".to_string()).read_items().unwrap();
    assert_eq!(items, ["æ", "å", "ø"]);
}

#[test]
fn test_input_reader_processing() {
    let reader = std::io::Cursor::new(b"b\na\n".to_vec());
    let items = Input::from_reader(reader).read_items().unwrap();
    assert_eq!(items, ["b", "a"]);
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .locale("nb")
        .unwrap()
        .attribute(Attribute::NumericCollation, AttributeValue::On)
        .sort_by_key(true)
        .build()
        .unwrap();

    assert_eq!(config.locale, "nb");
    assert_eq!(config.attributes.len(), 1);
}

#[test]
fn test_collate_text_convenience() {
    let output = collate_text("æ\nå\nø", "nb").unwrap();

    assert_eq!(output.items, ["æ", "ø", "å"]);
    assert_eq!(output.metadata.item_count, 3);
    assert_eq!(output.metadata.locale, "nb");
    assert_eq!(output.metadata.strategy, "pairwise");
}

#[test]
fn test_sort_by_key_strategy() {
    let config = Config::builder()
        .locale("nb")
        .unwrap()
        .sort_by_key(true)
        .build()
        .unwrap();
    let processor = CollationProcessor::with_config(config).unwrap();

    let output = processor.process(Input::from_items(["å", "ø", "æ"])).unwrap();
    assert_eq!(output.items, ["æ", "ø", "å"]);
    assert_eq!(output.metadata.strategy, "sort_key");
}

#[test]
fn test_configured_attributes_apply() {
    let processor = CollationProcessor::with_config(
        Config::builder()
            .locale("en")
            .unwrap()
            .attribute(Attribute::NumericCollation, AttributeValue::On)
            .build()
            .unwrap(),
    )
    .unwrap();

    let output = processor.process_text("item10\nitem9").unwrap();
    assert_eq!(output.items, ["item9", "item10"]);
    assert_eq!(
        output.metadata.attributes.get("numeric_collation").map(String::as_str),
        Some("on")
    );
}

#[test]
fn test_tibetan_through_processor() {
    let processor = CollationProcessor::with_locale("bo").unwrap();
    let output = processor
        .process(Input::from_items(["ཆོས་", "ཀ", "དཀོན་", "རྐ"]))
        .unwrap();
    assert_eq!(output.items, ["ཀ", "དཀོན་", "རྐ", "ཆོས་"]);
}

#[test]
fn test_rules_config() {
    let config = Config::builder().rules("&a < z").build().unwrap();
    let processor = CollationProcessor::with_config(config).unwrap();

    let output = processor.process(Input::from_items(["b", "z", "a"])).unwrap();
    assert_eq!(output.items, ["a", "z", "b"]);
    assert_eq!(output.metadata.locale, "<rules>");
}

#[test]
fn test_malformed_rules_config() {
    let config = Config::builder().rules("a < b").build().unwrap();
    let err = CollationProcessor::with_config(config).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Collation(CollationError::InvalidRules { .. })
    ));
}

#[test]
fn test_sort_keys_follow_input_order() {
    let processor = CollationProcessor::with_locale("nb").unwrap();
    let entries = processor.sort_keys(Input::from_items(["å", "æ"])).unwrap();

    assert_eq!(entries[0].text, "å");
    assert_eq!(entries[1].text, "æ");
    assert!(entries[1].key < entries[0].key);
    assert!(entries
        .iter()
        .all(|e| e.key.chars().all(|c| c.is_ascii_hexdigit())));
}

#[test]
fn test_compare() {
    let processor = CollationProcessor::with_locale("nb").unwrap();
    assert_eq!(processor.compare("blah", "blah").unwrap().sign(), 0);
    assert_eq!(
        processor.compare("ba", "bl").unwrap().ordering,
        ComparisonOrdering::Less
    );
    assert_eq!(processor.compare("blåbærsyltetøy", "blah").unwrap().sign(), 1);
}

#[test]
fn test_collate_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ø\næ\nå").unwrap();

    let output = collate_file(file.path(), "nb").unwrap();
    assert_eq!(output.items, ["æ", "ø", "å"]);
}

#[test]
#[cfg(feature = "serde")]
fn test_collate_json_rejects_non_strings() {
    let err = collate_json(r#"["a", {"b": 1}]"#, "nb").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
#[cfg(feature = "serde")]
fn test_config_from_file_with_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("custom.txt"), "&a < z").unwrap();
    let config_path = dir.path().join("ucoll.toml");
    std::fs::write(
        &config_path,
        "rules_file = \"custom.txt\"\n\n[attributes]\nstrength = \"tertiary\"\n",
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.rules.as_deref(), Some("&a < z"));

    let processor = CollationProcessor::with_config(config).unwrap();
    assert_eq!(
        processor.collator().strength().unwrap(),
        AttributeValue::Tertiary
    );
}

#[test]
#[cfg(feature = "serde")]
fn test_output_serialization() {
    let output = collate_text("b\na", "en").unwrap();

    let json = serde_json::to_string(&output).unwrap();
    let deserialized: Output = serde_json::from_str(&json).unwrap();

    assert_eq!(output, deserialized);
    assert!(json.contains("\"strategy\":\"pairwise\""));
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let api_error: ApiError = io_error.into();

    match api_error {
        ApiError::Io(_) => (), // Expected
        _ => panic!("Wrong error type"),
    }
}
