//! Document model: chapters, paragraphs and the identifiers used to match them
//!
//! A document is kept as the raw JSON tree so that everything the merger does
//! not touch is written back exactly as it was read, key order included.
//! The view types below give typed, check-before-read access to the parts of
//! the tree the merger cares about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Key/value fields of a single JSON object record
pub type Fields = Map<String, Value>;

/// A parsed document: a root object with an optional `chapters` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already-validated JSON tree
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Borrow the underlying JSON tree
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume the document, returning the JSON tree
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Iterate over chapter records (non-object entries are skipped)
    pub fn chapters(&self) -> impl Iterator<Item = Chapter<'_>> {
        self.root
            .get("chapters")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(Chapter::new)
    }

    /// Iterate mutably over chapter records (non-object entries are skipped)
    pub fn chapters_mut(&mut self) -> impl Iterator<Item = ChapterMut<'_>> {
        self.root
            .get_mut("chapters")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
            .map(ChapterMut::new)
    }

    /// Number of entries in the `chapters` array
    pub fn chapter_count(&self) -> usize {
        self.root
            .get("chapters")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Number of entries across every chapter's `paragraphs` array
    pub fn paragraph_count(&self) -> usize {
        self.chapters().map(|c| c.paragraph_count()).sum()
    }
}

/// Identifier taken from a record's `n` field
///
/// Integral numbers compare equal regardless of their JSON spelling, so `3`
/// and `3.0` name the same chapter. Numbers never match strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// Integral number
    Integer(i128),
    /// Non-integral number, stored as its bit pattern
    Float(u64),
    /// Non-empty string
    Text(String),
}

impl RecordKey {
    /// Derive a key from an `n` value.
    ///
    /// Returns `None` for values that cannot identify a record: zero, the
    /// empty string, `null`, booleans, arrays and objects. `true` is not an
    /// alias for `1`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    (i != 0).then_some(RecordKey::Integer(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Some(RecordKey::Integer(i128::from(u)))
                } else {
                    n.as_f64().and_then(Self::from_float)
                }
            }
            Value::String(s) if !s.is_empty() => Some(RecordKey::Text(s.clone())),
            _ => None,
        }
    }

    fn from_float(f: f64) -> Option<Self> {
        if f == 0.0 || !f.is_finite() {
            return None;
        }
        // 2^63 keeps the cast exact for every integral float we accept
        if f.fract() == 0.0 && f.abs() < 9.223_372_036_854_776e18 {
            Some(RecordKey::Integer(f as i128))
        } else {
            Some(RecordKey::Float(f.to_bits()))
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Integer(i) => write!(f, "{}", i),
            RecordKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            RecordKey::Text(s) => write!(f, "{:?}", s),
        }
    }
}

fn record_key(fields: &Fields) -> Option<RecordKey> {
    fields.get("n").and_then(RecordKey::from_value)
}

/// Read-only view of a chapter record
#[derive(Debug, Clone, Copy)]
pub struct Chapter<'a> {
    fields: &'a Fields,
}

impl<'a> Chapter<'a> {
    fn new(fields: &'a Fields) -> Self {
        Self { fields }
    }

    /// Chapter identifier, if the record has a usable `n`
    pub fn id(&self) -> Option<RecordKey> {
        record_key(self.fields)
    }

    /// Chapter title, when present as a string
    pub fn title(&self) -> Option<&'a str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// Iterate over paragraph records (non-object entries are skipped)
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph<'a>> {
        self.fields
            .get("paragraphs")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(Paragraph::new)
    }

    /// Number of entries in the `paragraphs` array
    pub fn paragraph_count(&self) -> usize {
        self.fields
            .get("paragraphs")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Mutable view of a chapter record
#[derive(Debug)]
pub struct ChapterMut<'a> {
    fields: &'a mut Fields,
}

impl<'a> ChapterMut<'a> {
    fn new(fields: &'a mut Fields) -> Self {
        Self { fields }
    }

    /// Chapter identifier, if the record has a usable `n`
    pub fn id(&self) -> Option<RecordKey> {
        record_key(self.fields)
    }

    /// Iterate mutably over paragraph records
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = ParagraphMut<'_>> {
        self.fields
            .get_mut("paragraphs")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
            .map(ParagraphMut::new)
    }
}

/// Read-only view of a paragraph record
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    fields: &'a Fields,
}

impl<'a> Paragraph<'a> {
    fn new(fields: &'a Fields) -> Self {
        Self { fields }
    }

    /// Paragraph identifier, if the record has a usable `n`
    pub fn id(&self) -> Option<RecordKey> {
        record_key(self.fields)
    }

    /// The `i18n` mapping, when present as an object
    pub fn i18n(&self) -> Option<&'a Fields> {
        self.fields.get("i18n").and_then(Value::as_object)
    }

    /// Non-empty translation text for a language code
    pub fn translation(&self, lang: &str) -> Option<&'a str> {
        self.i18n()
            .and_then(|i18n| i18n.get(lang))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// Mutable view of a paragraph record
#[derive(Debug)]
pub struct ParagraphMut<'a> {
    fields: &'a mut Fields,
}

impl<'a> ParagraphMut<'a> {
    fn new(fields: &'a mut Fields) -> Self {
        Self { fields }
    }

    /// Paragraph identifier, if the record has a usable `n`
    pub fn id(&self) -> Option<RecordKey> {
        record_key(self.fields)
    }

    /// The existing `i18n` mapping. Never creates one.
    pub fn i18n_mut(&mut self) -> Option<&mut Fields> {
        self.fields.get_mut("i18n").and_then(Value::as_object_mut)
    }
}
