//! Basic usage of the collation API

use ucoll_api::{collate_text, Attribute, AttributeValue, CollationProcessor, ConfigBuilder, Input};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = collate_text("ærlig\nålesund\nøre\nbok", "nb")?;
    for item in &output.items {
        println!("  {item}");
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: Configured collator
    println!("=== Method 2: Numeric Collation ===");
    let processor = CollationProcessor::with_config(
        ConfigBuilder::default()
            .locale("en")?
            .attribute(Attribute::NumericCollation, AttributeValue::On)
            .sort_by_key(true)
            .build()?,
    )?;
    let output = processor.process(Input::from_items(["item10", "item9", "item100"]))?;
    println!("  {:?} ({})\n", output.items, output.metadata.strategy);

    // Method 3: Locale served from embedded rules
    println!("=== Method 3: Tibetan ===");
    let processor = CollationProcessor::with_locale("bo")?;
    let output = processor.process(Input::from_items(["ཆོས་", "ཀ", "དཀོན་", "རྐ"]))?;
    println!("  {:?}", output.items);

    // Method 4: Sort keys
    println!("\n=== Method 4: Sort Keys ===");
    let processor = CollationProcessor::with_locale("nb")?;
    for entry in processor.sort_keys(Input::from_items(["æ", "ø", "å"]))? {
        println!("  {} {}", entry.text, entry.key);
    }

    Ok(())
}
