//! Binding layer over the ICU4C collation API
//!
//! Every engine resource is owned by a guard that releases it in `Drop`, and
//! every status-reporting call is checked before its result is used. Nothing
//! outside this module touches raw ICU pointers.

mod enumeration;
mod handle;
mod status;
mod text;

pub(crate) use enumeration::Enumeration;
pub(crate) use handle::{CollatorHandle, LocaleKind};
pub(crate) use status::engine_version;
pub(crate) use text::{to_uchars, EngineText, UCharBuf};

use crate::attributes::{Attribute, AttributeValue};
use rust_icu_sys as sys;

/// Engine enum for an attribute
pub(crate) fn engine_attribute(attribute: Attribute) -> sys::UColAttribute {
    match attribute {
        Attribute::FrenchCollation => sys::UColAttribute::UCOL_FRENCH_COLLATION,
        Attribute::AlternateHandling => sys::UColAttribute::UCOL_ALTERNATE_HANDLING,
        Attribute::CaseFirst => sys::UColAttribute::UCOL_CASE_FIRST,
        Attribute::CaseLevel => sys::UColAttribute::UCOL_CASE_LEVEL,
        Attribute::NormalizationMode => sys::UColAttribute::UCOL_NORMALIZATION_MODE,
        Attribute::Strength => sys::UColAttribute::UCOL_STRENGTH,
        Attribute::HiraganaQuaternaryMode => sys::UColAttribute::UCOL_HIRAGANA_QUATERNARY_MODE,
        Attribute::NumericCollation => sys::UColAttribute::UCOL_NUMERIC_COLLATION,
    }
}

/// Engine enum for an attribute value
pub(crate) fn engine_value(value: AttributeValue) -> sys::UColAttributeValue {
    match value {
        AttributeValue::Default => sys::UColAttributeValue::UCOL_DEFAULT,
        AttributeValue::Primary => sys::UColAttributeValue::UCOL_PRIMARY,
        AttributeValue::Secondary => sys::UColAttributeValue::UCOL_SECONDARY,
        AttributeValue::Tertiary => sys::UColAttributeValue::UCOL_TERTIARY,
        AttributeValue::Quaternary => sys::UColAttributeValue::UCOL_QUATERNARY,
        AttributeValue::Identical => sys::UColAttributeValue::UCOL_IDENTICAL,
        AttributeValue::Off => sys::UColAttributeValue::UCOL_OFF,
        AttributeValue::On => sys::UColAttributeValue::UCOL_ON,
        AttributeValue::Shifted => sys::UColAttributeValue::UCOL_SHIFTED,
        AttributeValue::NonIgnorable => sys::UColAttributeValue::UCOL_NON_IGNORABLE,
        AttributeValue::LowerFirst => sys::UColAttributeValue::UCOL_LOWER_FIRST,
        AttributeValue::UpperFirst => sys::UColAttributeValue::UCOL_UPPER_FIRST,
    }
}
