//! Public API for ucoll locale-sensitive collation
//!
//! Wraps [`ucoll_core::Collator`] with a configuration layer (builder or
//! TOML), input adapters (lines, lists, JSON, files, readers) and
//! serializable results.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::Metadata;
use std::time::Instant;
use ucoll_core::Collator;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Comparison, ComparisonOrdering, Input, Output, SortKeyEntry};
pub use error::{ApiError, Result};
pub use ucoll_core::{Attribute, AttributeValue, CollationError};

/// Main entry point for collation
///
/// Holds one configured collator; see [`Collator`] for its threading rules.
#[derive(Debug)]
pub struct CollationProcessor {
    collator: Collator,
    config: Config,
}

impl CollationProcessor {
    /// Create a processor for the root locale
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor for a locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        Self::with_config(Config::for_locale(locale)?)
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let collator = config.open_collator()?;
        Ok(Self { collator, config })
    }

    /// Sort the input's items
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let items = input.read_items()?;
        log::debug!(
            "collating {} items for '{}'",
            items.len(),
            self.config.source_label()
        );

        let (items, strategy) = if self.config.sort_by_key {
            (self.collator.collate_by_sort_key(items)?, "sort_key")
        } else {
            (self.collator.try_collate(items)?, "pairwise")
        };

        let metadata = Metadata {
            locale: self.config.source_label().to_string(),
            actual_locale: self.collator.actual_locale().ok(),
            item_count: items.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            strategy: strategy.to_string(),
            icu_version: ucoll_core::icu_version().to_string(),
            attributes: self
                .config
                .attributes
                .iter()
                .map(|(attribute, value)| (attribute.to_string(), value.to_string()))
                .collect(),
        };

        Ok(Output { items, metadata })
    }

    /// Sort newline-separated text (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Compute sort keys for the input's items, in input order
    pub fn sort_keys(&self, input: Input) -> Result<Vec<SortKeyEntry>> {
        input
            .read_items()?
            .into_iter()
            .map(|text| {
                let key = self.collator.sort_key(&text)?;
                Ok(SortKeyEntry::new(text, &key))
            })
            .collect()
    }

    /// Three-way comparison of two strings
    pub fn compare(&self, left: &str, right: &str) -> Result<Comparison> {
        let ordering = self.collator.try_compare(left, right)?;
        Ok(Comparison::new(left, right, ordering))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the underlying collator
    pub fn collator(&self) -> &Collator {
        &self.collator
    }
}

// Convenience functions

/// Sort newline-separated text for a locale
pub fn collate_text(text: &str, locale: &str) -> Result<Output> {
    CollationProcessor::with_locale(locale)?.process(Input::from_text(text))
}

/// Sort a JSON array of strings for a locale
pub fn collate_json(json: &str, locale: &str) -> Result<Output> {
    CollationProcessor::with_locale(locale)?.process(Input::from_json(json))
}

/// Sort the lines of a file for a locale
pub fn collate_file<P: AsRef<std::path::Path>>(path: P, locale: &str) -> Result<Output> {
    CollationProcessor::with_locale(locale)?.process(Input::from_file(path.as_ref()))
}
