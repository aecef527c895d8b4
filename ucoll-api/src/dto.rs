//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
#[cfg(feature = "serde")]
use ucoll_core::CollationError;

/// Input source for collation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Newline-separated text, one item per line
    Text(String),
    /// Items given directly
    Items(Vec<String>),
    /// JSON array of strings
    Json(String),
    /// File path, one item per line
    File(PathBuf),
    /// Raw bytes (UTF-8), one item per line
    Bytes(Vec<u8>),
    /// Reader, one item per line (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Items(items) => f.debug_tuple("Items").field(&items.len()).finish(),
            Input::Json(json) => f.debug_tuple("Json").field(&json.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from newline-separated text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a list of items
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Items(items.into_iter().map(Into::into).collect())
    }

    /// Create input from a JSON document
    pub fn from_json(json: impl Into<String>) -> Self {
        Input::Json(json.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the items to collate
    ///
    /// JSON input must be an array whose elements are all strings; anything
    /// else is rejected with [`ucoll_core::CollationError::InvalidArgument`].
    pub fn read_items(self) -> Result<Vec<String>> {
        match self {
            Input::Text(text) => Ok(split_lines(&text)),
            Input::Items(items) => Ok(items),
            Input::Json(json) => parse_json_items(&json),
            Input::File(path) => Ok(split_lines(&fs::read_to_string(&path)?)),
            Input::Bytes(bytes) => Ok(split_lines(&String::from_utf8(bytes)?)),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(split_lines(&buffer))
            }
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

#[cfg(feature = "serde")]
fn parse_json_items(json: &str) -> Result<Vec<String>> {
    use serde_json::Value;

    let elements = match serde_json::from_str::<Value>(json)? {
        Value::Array(elements) => elements,
        other => {
            return Err(CollationError::InvalidArgument(format!(
                "expected an array of strings, got {}",
                json_kind(&other)
            ))
            .into())
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::String(s) => Ok(s),
            other => Err(ApiError::from(CollationError::InvalidArgument(format!(
                "element {index} is {}, not a string",
                json_kind(&other)
            )))),
        })
        .collect()
}

#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(not(feature = "serde"))]
fn parse_json_items(_json: &str) -> Result<Vec<String>> {
    Err(ApiError::InvalidInput(
        "JSON input requires the 'serde' feature".to_string(),
    ))
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Requested locale, or `<rules>` for rule-based collators
    pub locale: String,
    /// Locale whose data the engine actually used
    pub actual_locale: Option<String>,
    /// Number of items sorted
    pub item_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Sorting strategy used (`pairwise` or `sort_key`)
    pub strategy: String,
    /// ICU library version
    pub icu_version: String,
    /// Attributes explicitly configured
    pub attributes: BTreeMap<String, String>,
}

/// Complete output with sorted items and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Items in collation order
    pub items: Vec<String>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Number of sorted items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items were sorted
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A string with its hex-encoded sort key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKeyEntry {
    /// Source text
    pub text: String,
    /// Sort key bytes, lowercase hex, without the trailing terminator
    pub key: String,
}

impl SortKeyEntry {
    /// Create an entry from raw key bytes
    pub fn new(text: impl Into<String>, key: &[u8]) -> Self {
        Self {
            text: text.into(),
            key: hex::encode(key),
        }
    }
}

/// Outcome of a three-way comparison, serialized in lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ComparisonOrdering {
    /// Left sorts before right
    Less,
    /// Both collate as equal
    Equal,
    /// Left sorts after right
    Greater,
}

impl ComparisonOrdering {
    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOrdering::Less => "less",
            ComparisonOrdering::Equal => "equal",
            ComparisonOrdering::Greater => "greater",
        }
    }

    /// Conventional `-1`/`0`/`1` sign
    pub fn sign(self) -> i32 {
        match self {
            ComparisonOrdering::Less => -1,
            ComparisonOrdering::Equal => 0,
            ComparisonOrdering::Greater => 1,
        }
    }
}

impl From<Ordering> for ComparisonOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => ComparisonOrdering::Less,
            Ordering::Equal => ComparisonOrdering::Equal,
            Ordering::Greater => ComparisonOrdering::Greater,
        }
    }
}

impl From<ComparisonOrdering> for Ordering {
    fn from(ordering: ComparisonOrdering) -> Self {
        match ordering {
            ComparisonOrdering::Less => Ordering::Less,
            ComparisonOrdering::Equal => Ordering::Equal,
            ComparisonOrdering::Greater => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for ComparisonOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a three-way comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Left operand
    pub left: String,
    /// Right operand
    pub right: String,
    /// How `left` orders against `right`
    pub ordering: ComparisonOrdering,
}

impl Comparison {
    /// Build from an ordering
    pub fn new(left: impl Into<String>, right: impl Into<String>, ordering: Ordering) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            ordering: ordering.into(),
        }
    }

    /// Comparison sign in the conventional `-1`/`0`/`1` form
    pub fn sign(&self) -> i32 {
        self.ordering.sign()
    }
}
