//! Locale-sensitive string collation
//!
//! This crate wraps the ICU collation engine behind a small, typed API:
//! symbolic collator attributes, three-way comparison and ordering
//! predicates, sort keys, and rule-based collators for locales the engine
//! has no data for.
//!
//! # Architecture
//!
//! - **Attribute registry** ([`attributes`]): closed enums for attribute names
//!   and values with their engine codes
//! - **Rule override store** ([`overrides`]): embedded tailoring rules for
//!   `bo`, `new-Deva` and `new Newa`
//! - **Collator** ([`Collator`]): owns one engine collator
//! - **Catalog** ([`available_locales`], [`keywords`])
//!
//! # Example
//!
//! ```no_run
//! use ucoll_core::{collate, Attribute, AttributeValue, Collator};
//!
//! // One-off sort
//! let sorted = collate("nb", ["æ", "å", "ø"])?;
//! assert_eq!(sorted, ["æ", "ø", "å"]);
//!
//! // Reusable, configured collator
//! let mut collator = Collator::new("en")?;
//! collator.set(Attribute::NumericCollation, AttributeValue::On)?;
//! assert!(collator.greater("item10", "item9"));
//! # Ok::<(), ucoll_core::CollationError>(())
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod catalog;
pub mod collator;
mod engine;
pub mod error;
pub mod overrides;
pub mod version;

pub use attributes::{Attribute, AttributeValue};
pub use catalog::{available_locales, keywords};
pub use collator::Collator;
pub use error::{CollationError, EngineStatus, Result};
pub use overrides::override_locales;
pub use version::VersionInfo;

/// Sort `items` for `locale`.
///
/// Builds a fresh [`Collator`] on every call; hold a collator instead when
/// sorting repeatedly.
pub fn collate<I, S>(locale: &str, items: I) -> Result<Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Collator::new(locale)?.try_collate(items)
}

/// Version of the linked ICU library
pub fn icu_version() -> VersionInfo {
    VersionInfo::new(engine::engine_version())
}
