//! Collator: locale-aware comparison, sorting and sort keys
//!
//! A [`Collator`] owns one engine collator for its whole lifetime. It is built
//! either from the engine's own locale data or, for locales listed in the rule
//! override store, from embedded tailoring rules. After construction the two
//! kinds behave identically.

use crate::attributes::{Attribute, AttributeValue};
use crate::engine::{to_uchars, CollatorHandle, EngineText, LocaleKind, UCharBuf};
use crate::error::Result;
use crate::overrides;
use crate::version::VersionInfo;
use std::cell::OnceCell;
use std::cmp::Ordering;

/// Normalization mode every override collator is opened with
pub const OVERRIDE_NORMALIZATION: AttributeValue = AttributeValue::On;

/// Strength every override collator is opened with
pub const OVERRIDE_STRENGTH: AttributeValue = AttributeValue::Primary;

/// How the engine collator gets opened
enum Source<'a> {
    /// Engine locale data
    Native(&'a str),
    /// Literal tailoring rules
    Rules {
        text: &'a str,
        normalization: AttributeValue,
        strength: AttributeValue,
    },
}

impl<'a> Source<'a> {
    fn for_locale(locale: &'a str) -> Self {
        match overrides::lookup(locale) {
            Some(entry) => {
                log::debug!("using embedded {} rules for locale '{locale}'", entry.name);
                Source::Rules {
                    text: entry.rules,
                    normalization: OVERRIDE_NORMALIZATION,
                    strength: OVERRIDE_STRENGTH,
                }
            }
            None => Source::Native(locale),
        }
    }

    fn open(self) -> Result<CollatorHandle> {
        match self {
            Source::Native(locale) => {
                log::debug!("opening native collator for locale '{locale}'");
                CollatorHandle::open(locale)
            }
            Source::Rules {
                text,
                normalization,
                strength,
            } => CollatorHandle::open_rules(&to_uchars(text), normalization, strength),
        }
    }
}

/// Locale-sensitive string collator
///
/// Not `Sync`: a collator may be moved to another thread but must not be
/// used from several threads at once.
///
/// # Example
///
/// ```no_run
/// use ucoll_core::Collator;
///
/// let collator = Collator::new("nb")?;
/// assert_eq!(collator.collate(["æ", "å", "ø"]), ["æ", "ø", "å"]);
/// # Ok::<(), ucoll_core::CollationError>(())
/// ```
#[derive(Debug)]
pub struct Collator {
    handle: CollatorHandle,
    rules: OnceCell<String>,
}

impl Collator {
    /// Create a collator for a locale identifier
    pub fn new(locale: &str) -> Result<Self> {
        Source::for_locale(locale).open().map(Self::from_handle)
    }

    /// Create a collator from tailoring rules, with the same baseline
    /// attributes as the embedded overrides
    pub fn from_rules(rules: &str) -> Result<Self> {
        Self::from_rules_with(rules, OVERRIDE_NORMALIZATION, OVERRIDE_STRENGTH)
    }

    /// Create a collator from tailoring rules with explicit normalization
    /// mode and strength
    pub fn from_rules_with(
        rules: &str,
        normalization: AttributeValue,
        strength: AttributeValue,
    ) -> Result<Self> {
        Source::Rules {
            text: rules,
            normalization,
            strength,
        }
        .open()
        .map(Self::from_handle)
    }

    fn from_handle(handle: CollatorHandle) -> Self {
        Self {
            handle,
            rules: OnceCell::new(),
        }
    }

    /// Locale the collator is valid for
    pub fn locale(&self) -> Result<String> {
        self.handle.locale(LocaleKind::Valid)
    }

    /// Locale the collation data was actually loaded from
    pub fn actual_locale(&self) -> Result<String> {
        self.handle.locale(LocaleKind::Actual)
    }

    /// Three-way comparison under the current attributes
    ///
    /// # Panics
    ///
    /// Panics if either string is longer than `i32::MAX` UTF-16 code units.
    /// [`try_compare`](Self::try_compare) reports that case as an error.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.try_compare(a, b).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Three-way comparison that rejects strings too long for the engine
    /// with [`CollationError::InvalidArgument`](crate::CollationError::InvalidArgument)
    pub fn try_compare(&self, a: &str, b: &str) -> Result<Ordering> {
        self.with_pair(a, b, |a, b| self.handle.strcoll(a, b))
    }

    /// `a` sorts after `b`
    ///
    /// Panics on over-long strings, like [`compare`](Self::compare).
    pub fn greater(&self, a: &str, b: &str) -> bool {
        self.with_pair(a, b, |a, b| self.handle.greater(a, b))
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// `a` sorts after or together with `b`
    ///
    /// Panics on over-long strings, like [`compare`](Self::compare).
    pub fn greater_or_equal(&self, a: &str, b: &str) -> bool {
        self.with_pair(a, b, |a, b| self.handle.greater_or_equal(a, b))
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// `a` and `b` collate as equal. Object identity is `==` on the collator.
    ///
    /// Panics on over-long strings, like [`compare`](Self::compare).
    pub fn equal(&self, a: &str, b: &str) -> bool {
        self.with_pair(a, b, |a, b| self.handle.equal(a, b))
            .unwrap_or_else(|err| panic!("{err}"))
    }

    fn with_pair<T>(
        &self,
        a: &str,
        b: &str,
        op: impl FnOnce(EngineText<'_>, EngineText<'_>) -> T,
    ) -> Result<T> {
        let (a, b) = (to_uchars(a), to_uchars(b));
        Ok(op(EngineText::new(&a)?, EngineText::new(&b)?))
    }

    /// Return the items ordered by [`compare`](Self::compare).
    ///
    /// The order of items that compare equal is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if an item is longer than `i32::MAX` UTF-16 code units.
    /// [`try_collate`](Self::try_collate) reports that case as an error.
    pub fn collate<I, S>(&self, items: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.try_collate(items).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`collate`](Self::collate), but rejects over-long items with
    /// [`CollationError::InvalidArgument`](crate::CollationError::InvalidArgument)
    /// before anything is compared
    pub fn try_collate<I, S>(&self, items: I) -> Result<Vec<S>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let converted: Vec<(UCharBuf, S)> = items
            .into_iter()
            .map(|item| (to_uchars(item.as_ref()), item))
            .collect();

        let mut texts = converted
            .iter()
            .enumerate()
            .map(|(index, (units, _))| Ok((EngineText::new(units)?, index)))
            .collect::<Result<Vec<_>>>()?;
        texts.sort_unstable_by(|&(a, _), &(b, _)| self.handle.strcoll(a, b));
        let order: Vec<usize> = texts.into_iter().map(|(_, index)| index).collect();

        let mut slots: Vec<Option<S>> = converted.into_iter().map(|(_, item)| Some(item)).collect();
        Ok(order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect())
    }

    /// Sort a slice in place
    ///
    /// Panics on over-long strings, like [`compare`](Self::compare).
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_unstable_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Like [`collate`](Self::collate), but computes each sort key once and
    /// orders by key bytes. Pays off for large inputs.
    pub fn collate_by_sort_key<I, S>(&self, items: I) -> Result<Vec<S>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keyed = items
            .into_iter()
            .map(|item| Ok((self.sort_key(item.as_ref())?, item)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        Ok(keyed.into_iter().map(|(_, item)| item).collect())
    }

    /// Binary sort key. Byte-wise comparison of two keys orders like
    /// [`compare`](Self::compare) on the source strings, as long as the
    /// attributes are not changed in between.
    pub fn sort_key(&self, text: &str) -> Result<Vec<u8>> {
        let units = to_uchars(text);
        self.handle.sort_key(EngineText::new(&units)?)
    }

    /// Tailoring rules in effect, computed on first use
    pub fn rules(&self) -> &str {
        self.rules.get_or_init(|| {
            let rules = self.handle.rules();
            log::trace!("cached {} bytes of collation rules", rules.len());
            rules
        })
    }

    /// Read an attribute
    pub fn get(&self, attribute: Attribute) -> Result<AttributeValue> {
        self.handle.get_attribute(attribute)
    }

    /// Change an attribute; affects every later comparison and sort key
    pub fn set(&mut self, attribute: Attribute, value: AttributeValue) -> Result<()> {
        log::trace!("setting {attribute} = {value}");
        self.handle.set_attribute(attribute, value)
    }

    /// Version of the collation data and algorithm behind this collator
    pub fn version(&self) -> VersionInfo {
        VersionInfo::new(self.handle.version())
    }
}

impl PartialEq for Collator {
    fn eq(&self, other: &Self) -> bool {
        self.handle.same_handle(&other.handle)
    }
}

impl Eq for Collator {}

macro_rules! attribute_accessors {
    ($($attribute:ident => $getter:ident, $setter:ident;)*) => {
        impl Collator {
            $(
                #[doc = concat!("Current value of `", stringify!($getter), "`")]
                pub fn $getter(&self) -> Result<AttributeValue> {
                    self.get(Attribute::$attribute)
                }

                #[doc = concat!("Set `", stringify!($getter), "`")]
                pub fn $setter(&mut self, value: AttributeValue) -> Result<()> {
                    self.set(Attribute::$attribute, value)
                }
            )*
        }
    };
}

attribute_accessors! {
    FrenchCollation => french_collation, set_french_collation;
    AlternateHandling => alternate_handling, set_alternate_handling;
    CaseFirst => case_first, set_case_first;
    CaseLevel => case_level, set_case_level;
    NormalizationMode => normalization_mode, set_normalization_mode;
    Strength => strength, set_strength;
    HiraganaQuaternaryMode => hiragana_quaternary_mode, set_hiragana_quaternary_mode;
    NumericCollation => numeric_collation, set_numeric_collation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollationError;

    #[test]
    fn test_source_for_override_locale() {
        match Source::for_locale("bo") {
            Source::Rules {
                normalization,
                strength,
                ..
            } => {
                assert_eq!(normalization, AttributeValue::On);
                assert_eq!(strength, AttributeValue::Primary);
            }
            Source::Native(_) => panic!("bo should use the rule override"),
        }
    }

    #[test]
    fn test_source_for_native_locale() {
        assert!(matches!(Source::for_locale("nb"), Source::Native("nb")));
    }

    #[test]
    fn test_override_collator_baseline_attributes() {
        let collator = Collator::new("bo").unwrap();
        assert_eq!(collator.strength().unwrap(), AttributeValue::Primary);
        assert_eq!(collator.normalization_mode().unwrap(), AttributeValue::On);
    }

    #[test]
    fn test_identity_is_not_string_equality() {
        let a = Collator::new("nb").unwrap();
        let b = Collator::new("nb").unwrap();
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert!(a.equal("x", "x"));
    }

    #[test]
    fn test_accessors_delegate_to_get_and_set() {
        let mut collator = Collator::new("en").unwrap();
        collator.set_numeric_collation(AttributeValue::On).unwrap();
        assert_eq!(
            collator.get(Attribute::NumericCollation).unwrap(),
            AttributeValue::On
        );
        collator.set(Attribute::CaseFirst, AttributeValue::UpperFirst).unwrap();
        assert_eq!(collator.case_first().unwrap(), AttributeValue::UpperFirst);
    }

    #[test]
    fn test_invalid_value_for_attribute_is_engine_error() {
        let mut collator = Collator::new("en").unwrap();
        let err = collator
            .set(Attribute::Strength, AttributeValue::Shifted)
            .unwrap_err();
        assert!(matches!(err, CollationError::Engine { .. }));
    }

    #[test]
    fn test_rules_cached() {
        let collator = Collator::new("nb").unwrap();
        let first = collator.rules().as_ptr();
        assert_eq!(collator.rules().as_ptr(), first);
    }

    #[test]
    fn test_try_compare_matches_compare() {
        let collator = Collator::new("nb").unwrap();
        assert_eq!(collator.try_compare("æ", "ø").unwrap(), Ordering::Less);
        assert_eq!(collator.compare("æ", "ø"), Ordering::Less);
    }

    #[test]
    fn test_try_collate_keeps_every_item() {
        let collator = Collator::new("nb").unwrap();
        let sorted = collator.try_collate(["å", "æ", "ø", "æ"]).unwrap();
        assert_eq!(sorted, ["æ", "æ", "ø", "å"]);
    }

    #[test]
    fn test_sort_in_place() {
        let collator = Collator::new("nb").unwrap();
        let mut items = vec!["å".to_string(), "ø".to_string(), "æ".to_string()];
        collator.sort(&mut items);
        assert_eq!(items, ["æ", "ø", "å"]);
    }
}
