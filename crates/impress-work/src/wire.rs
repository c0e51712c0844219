//! Wire shapes exchanged with the search and format services
//!
//! `Work` serialization is driven by [`WORK_FIELD_RULES`]: one row per wire
//! field, in wire order, saying how to read the value and when to omit it.
//! Empty strings, empty lists and zero dates never appear on the wire.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::Work;

/// When a field is left off the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Omit {
    /// Omit empty strings and empty lists
    IfEmpty,
    /// Omit numeric zero ("unknown")
    IfZero,
}

/// A borrowed field value read from a work
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Number(i32),
}

impl FieldValue<'_> {
    fn is_omitted(&self, omit: Omit) -> bool {
        match (omit, self) {
            (Omit::IfEmpty, FieldValue::Text(s)) => s.is_empty(),
            (Omit::IfEmpty, FieldValue::List(items)) => items.is_empty(),
            (Omit::IfZero, FieldValue::Number(n)) => *n == 0,
            _ => false,
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::List(items) => items.serialize(serializer),
            FieldValue::Number(n) => serializer.serialize_i32(*n),
        }
    }
}

/// Serialization rule for one wire field
pub struct FieldRule {
    pub name: &'static str,
    pub omit: Omit,
    pub value: for<'a> fn(&'a Work) -> FieldValue<'a>,
}

impl FieldRule {
    /// Value to emit for `work`, or `None` when the field is omitted
    pub fn emit<'a>(&self, work: &'a Work) -> Option<FieldValue<'a>> {
        let value = (self.value)(work);
        (!value.is_omitted(self.omit)).then_some(value)
    }
}

macro_rules! text_rule {
    ($name:literal, $field:ident) => {
        FieldRule {
            name: $name,
            omit: Omit::IfEmpty,
            value: |w| FieldValue::Text(&w.$field),
        }
    };
}

macro_rules! list_rule {
    ($name:literal, $field:ident) => {
        FieldRule {
            name: $name,
            omit: Omit::IfEmpty,
            value: |w| FieldValue::List(&w.$field),
        }
    };
}

macro_rules! number_rule {
    ($name:literal, $field:ident) => {
        FieldRule {
            name: $name,
            omit: Omit::IfZero,
            value: |w| FieldValue::Number(w.$field),
        }
    };
}

/// Wire fields of a work, in wire order
pub const WORK_FIELD_RULES: &[FieldRule] = &[
    text_rule!("id", id),
    text_rule!("hash", hash),
    text_rule!("type", work_type),
    text_rule!("doi", doi),
    text_rule!("arxiv", arxiv),
    text_rule!("isbn", isbn),
    text_rule!("title", title),
    list_rule!("authors", authors),
    text_rule!("version", version),
    text_rule!("venue", venue),
    text_rule!("page", page),
    number_rule!("year", year),
    number_rule!("month", month),
    number_rule!("day", day),
    list_rule!("keywords", keywords),
];

impl Serialize for Work {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields: Vec<(&str, FieldValue<'_>)> = WORK_FIELD_RULES
            .iter()
            .filter_map(|rule| rule.emit(self).map(|value| (rule.name, value)))
            .collect();

        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in &fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a search request: a work used as a match template
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: Work,
}

/// Body of a search response. `error` is empty on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<Work>,
    pub error: String,
}

impl SearchResponse {
    pub fn ok(results: Vec<Work>) -> Self {
        Self {
            results,
            error: String::new(),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            results: Vec::new(),
            error: error.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Body of a format request. `format` names a citation style understood by
/// the formatter service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatRequest {
    pub work: Work,
    pub format: String,
}

/// Body of a format response. `error` is empty on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatResponse {
    pub result: String,
    pub error: String,
}

impl FormatResponse {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            error: String::new(),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            result: String::new(),
            error: error.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}
