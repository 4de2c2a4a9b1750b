//! Uniform decoding of upstream fields.
//!
//! Any field of a detail record may arrive as a bare value, an object carrying
//! attributes, or a list of either. `FieldShape` names those cases once so every
//! field is read the same way.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::api::xml::{ATTRIBUTE_PREFIX, TEXT_KEY};

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid leading float regex")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldShape<'a> {
    Absent,
    Scalar(&'a Value),
    Attributed(&'a Map<String, Value>),
    List(&'a [Value]),
}

impl<'a> FieldShape<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Object(map)) => Self::Attributed(map),
            Some(Value::Array(items)) => Self::List(items),
            Some(scalar) => Self::Scalar(scalar),
        }
    }

    /// Text content: first list element, then `value` attribute, then element text
    pub fn text(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Scalar(value) => scalar_text(value),
            Self::Attributed(map) => [attribute_key("value"), TEXT_KEY.to_string()]
                .iter()
                .map(|key| map.get(key).map(scalar_text).unwrap_or_default())
                .find(|text| !text.is_empty())
                .unwrap_or_default(),
            Self::List(items) => Self::of(items.first()).text(),
        }
    }

    /// Named attribute of the (first) element
    pub fn attribute(&self, name: &str) -> Option<String> {
        match self {
            Self::Attributed(map) => map.get(&attribute_key(name)).map(scalar_text),
            Self::List(items) => Self::of(items.first()).attribute(name),
            Self::Absent | Self::Scalar(_) => None,
        }
    }

    /// Child field of the (first) element
    pub fn child(&self, name: &str) -> FieldShape<'a> {
        match self {
            Self::Attributed(map) => Self::of(map.get(name)),
            Self::List(items) => Self::of(items.first()).child(name),
            Self::Absent | Self::Scalar(_) => Self::Absent,
        }
    }
}

/// Every entry of a possibly repeated field, singletons included
pub fn entries(value: Option<&Value>) -> Vec<FieldShape<'_>> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(|item| FieldShape::of(Some(item))).collect(),
        Some(other) => vec![FieldShape::of(Some(other))],
    }
}

fn attribute_key(name: &str) -> String {
    format!("{ATTRIBUTE_PREFIX}{name}")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.first().map(scalar_text).unwrap_or_default(),
        Value::Object(_) => FieldShape::of(Some(value)).text(),
        other => other.to_string(),
    }
}

/// Integer prefix of `text`, `None` when it does not start with digits
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let captures = LEADING_INT.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Float prefix of `text`, NaN when it does not start with a number
pub fn parse_leading_float(text: &str) -> f64 {
    LEADING_FLOAT
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}
