// src/process/types.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// A coerced field value. Every raw field maps to exactly one variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    Empty,
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

/// The variant of a [`TypedValue`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    Empty,
    Number,
    Date,
    Text,
}

impl TypedValue {
    pub fn tag(&self) -> TypeTag {
        match self {
            TypedValue::Empty => TypeTag::Empty,
            TypedValue::Number(_) => TypeTag::Number,
            TypedValue::Date(_) => TypeTag::Date,
            TypedValue::Text(_) => TypeTag::Text,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, TypedValue::Number(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, TypedValue::Date(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Empty => Ok(()),
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            TypedValue::Text(s) => f.write_str(s),
        }
    }
}

impl TypeTag {
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Empty => "Empty",
            TypeTag::Number => "Number",
            TypeTag::Date => "Date",
            TypeTag::Text => "Text",
        }
    }

    /// Tag of a whole column: equal tags agree, and `Empty` cells give way to
    /// `Text`. Any other mix has no common tag.
    pub fn merge(self, other: TypeTag) -> Option<TypeTag> {
        match (self, other) {
            (a, b) if a == b => Some(a),
            (TypeTag::Empty, TypeTag::Text) | (TypeTag::Text, TypeTag::Empty) => Some(TypeTag::Text),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
