//! Attribute registry
//!
//! Fixed mapping between the symbolic collator configuration (attribute names
//! and attribute values) and the numeric codes used by the engine. Values of
//! different kinds (absence, on/off flags, strength levels, case ordering)
//! share one signed code space, so they are modelled as a single closed enum.

use crate::error::{CollationError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A configurable collator attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Attribute {
    /// Secondary differences are compared backwards (old French accent order)
    FrenchCollation,
    /// Whether variable characters (spaces, punctuation) are ignorable
    AlternateHandling,
    /// Whether upper or lower case sorts first
    CaseFirst,
    /// Adds a case level between secondary and tertiary
    CaseLevel,
    /// Canonical normalization of input before comparison
    NormalizationMode,
    /// Comparison level
    Strength,
    /// Distinguishes hiragana from katakana at the quaternary level
    HiraganaQuaternaryMode,
    /// Digit substrings compare by numeric value
    NumericCollation,
}

impl Attribute {
    /// Every attribute, in engine code order
    pub const ALL: [Attribute; 8] = [
        Attribute::FrenchCollation,
        Attribute::AlternateHandling,
        Attribute::CaseFirst,
        Attribute::CaseLevel,
        Attribute::NormalizationMode,
        Attribute::Strength,
        Attribute::HiraganaQuaternaryMode,
        Attribute::NumericCollation,
    ];

    /// Engine code of the attribute
    pub const fn code(self) -> i32 {
        match self {
            Attribute::FrenchCollation => 0,
            Attribute::AlternateHandling => 1,
            Attribute::CaseFirst => 2,
            Attribute::CaseLevel => 3,
            Attribute::NormalizationMode => 4,
            Attribute::Strength => 5,
            Attribute::HiraganaQuaternaryMode => 6,
            Attribute::NumericCollation => 7,
        }
    }

    /// Symbolic name of the attribute
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::FrenchCollation => "french_collation",
            Attribute::AlternateHandling => "alternate_handling",
            Attribute::CaseFirst => "case_first",
            Attribute::CaseLevel => "case_level",
            Attribute::NormalizationMode => "normalization_mode",
            Attribute::Strength => "strength",
            Attribute::HiraganaQuaternaryMode => "hiragana_quaternary_mode",
            Attribute::NumericCollation => "numeric_collation",
        }
    }

    /// Values the engine accepts for this attribute, besides `Default`
    pub fn supported_values(self) -> &'static [AttributeValue] {
        use AttributeValue::*;
        match self {
            Attribute::Strength => &[Primary, Secondary, Tertiary, Quaternary, Identical],
            Attribute::AlternateHandling => &[Shifted, NonIgnorable],
            Attribute::CaseFirst => &[Off, LowerFirst, UpperFirst],
            Attribute::FrenchCollation
            | Attribute::CaseLevel
            | Attribute::NormalizationMode
            | Attribute::NumericCollation => &[Off, On],
            // The engine accepts `On` but never applies it
            Attribute::HiraganaQuaternaryMode => &[Off],
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| CollationError::InvalidArgument(format!("unknown attribute '{s}'")))
    }
}

/// A value of a collator attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AttributeValue {
    /// Absence of an explicit value: the engine's default for the attribute
    Default,
    /// Base letters only
    Primary,
    /// Base letters and accents
    Secondary,
    /// Base letters, accents and case; the default strength
    #[cfg_attr(feature = "serde", serde(alias = "default_strength"))]
    Tertiary,
    /// Adds a level for variable characters or kana distinctions
    Quaternary,
    /// Ties broken by code point
    Identical,
    /// Flag off
    #[cfg_attr(feature = "serde", serde(alias = "false"))]
    Off,
    /// Flag on
    #[cfg_attr(feature = "serde", serde(alias = "true"))]
    On,
    /// Variable characters are ignorable below the quaternary level
    Shifted,
    /// Variable characters are ordinary characters
    NonIgnorable,
    /// Lower case sorts before upper case
    LowerFirst,
    /// Upper case sorts before lower case
    UpperFirst,
}

static VALUES_BY_CODE: OnceLock<HashMap<i32, AttributeValue>> = OnceLock::new();

/// Inverse of [`AttributeValue::code`], built once from the forward mapping
fn values_by_code() -> &'static HashMap<i32, AttributeValue> {
    VALUES_BY_CODE.get_or_init(|| {
        AttributeValue::ALL
            .into_iter()
            .map(|value| (value.code(), value))
            .collect()
    })
}

impl AttributeValue {
    /// Every value, in engine code order
    pub const ALL: [AttributeValue; 12] = [
        AttributeValue::Default,
        AttributeValue::Primary,
        AttributeValue::Secondary,
        AttributeValue::Tertiary,
        AttributeValue::Quaternary,
        AttributeValue::Identical,
        AttributeValue::Off,
        AttributeValue::On,
        AttributeValue::Shifted,
        AttributeValue::NonIgnorable,
        AttributeValue::LowerFirst,
        AttributeValue::UpperFirst,
    ];

    /// The engine's default strength
    pub const DEFAULT_STRENGTH: AttributeValue = AttributeValue::Tertiary;

    /// Engine code of the value
    pub const fn code(self) -> i32 {
        match self {
            AttributeValue::Default => -1,
            AttributeValue::Primary => 0,
            AttributeValue::Secondary => 1,
            AttributeValue::Tertiary => 2,
            AttributeValue::Quaternary => 3,
            AttributeValue::Identical => 15,
            AttributeValue::Off => 16,
            AttributeValue::On => 17,
            AttributeValue::Shifted => 20,
            AttributeValue::NonIgnorable => 21,
            AttributeValue::LowerFirst => 24,
            AttributeValue::UpperFirst => 25,
        }
    }

    /// Resolve an engine code back to its symbolic value
    pub fn from_code(code: i32) -> Result<Self> {
        values_by_code()
            .get(&code)
            .copied()
            .ok_or(CollationError::UnknownValueCode(code))
    }

    /// Symbolic name of the value
    pub const fn name(self) -> &'static str {
        match self {
            AttributeValue::Default => "default",
            AttributeValue::Primary => "primary",
            AttributeValue::Secondary => "secondary",
            AttributeValue::Tertiary => "tertiary",
            AttributeValue::Quaternary => "quaternary",
            AttributeValue::Identical => "identical",
            AttributeValue::Off => "off",
            AttributeValue::On => "on",
            AttributeValue::Shifted => "shifted",
            AttributeValue::NonIgnorable => "non_ignorable",
            AttributeValue::LowerFirst => "lower_first",
            AttributeValue::UpperFirst => "upper_first",
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        if flag {
            AttributeValue::On
        } else {
            AttributeValue::Off
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeValue {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default_strength" => return Ok(AttributeValue::DEFAULT_STRENGTH),
            "true" => return Ok(AttributeValue::On),
            "false" => return Ok(AttributeValue::Off),
            _ => {}
        }

        AttributeValue::ALL
            .into_iter()
            .find(|value| value.name() == s)
            .ok_or_else(|| {
                CollationError::InvalidArgument(format!("unknown attribute value '{s}'"))
            })
    }
}
