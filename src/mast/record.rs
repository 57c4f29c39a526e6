use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MastError;

/// Coercion applied to a wire field's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed 64-bit integer.
    Int,
    /// Floating point value.
    Float,
    /// String value.
    Text,
}

/// One entry of a model's field table: wire key, attribute key, coercion.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Field name as it appears in archive result rows.
    pub wire: &'static str,
    /// Attribute key the value is exposed under.
    pub attr: &'static str,
    /// Coercion applied to the wire value.
    pub kind: FieldKind,
}

/// A record variant: its name, identity template, and field table.
#[derive(Clone, Copy, Debug)]
pub struct ModelSpec {
    /// Variant name used in error messages and display output.
    pub name: &'static str,
    /// Identity template; `{attr}` placeholders interpolate attribute values.
    pub identity: &'static str,
    /// The field table driving construction.
    pub fields: &'static [FieldSpec],
}

/// A coerced attribute value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AttrValue {
    /// Signed 64-bit integer.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Text(String),
    /// Absent or uncoercible value.
    Null,
}

impl AttrValue {
    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The value as a float; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True when the value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl fmt::Display for AttrValue {
    /// Renders `Null` as an empty string, for identity interpolation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Text(s) => write!(f, "{s}"),
            AttrValue::Null => Ok(()),
        }
    }
}

/// A typed, read-only record built from one archive result row.
#[derive(Debug, Clone)]
pub struct Record {
    spec: &'static ModelSpec,
    values: HashMap<String, AttrValue>,
    name: String,
}

impl Record {
    /// Map one raw row through a model's field table.
    ///
    /// Every declared wire key is removed from the row; a row key the table
    /// does not declare rejects the whole construction. A declared field whose
    /// value cannot be coerced stays in the record as [`AttrValue::Null`].
    pub fn build(
        spec: &'static ModelSpec,
        mut row: serde_json::Map<String, Value>,
    ) -> Result<Self, MastError> {
        let mut values = HashMap::with_capacity(spec.fields.len());

        for field in spec.fields {
            let value = match row.remove(field.wire) {
                Some(raw) => coerce(field.kind, &raw).unwrap_or_else(|| {
                    log::warn!(
                        "{}: value {:?} for '{}' is not {:?}, storing null",
                        spec.name,
                        raw,
                        field.wire,
                        field.kind
                    );
                    AttrValue::Null
                }),
                None => AttrValue::Null,
            };
            values.insert(field.attr.to_string(), value);
        }

        if !row.is_empty() {
            return Err(MastError::UnrecognizedFields {
                model: spec.name,
                fields: row.keys().cloned().collect(),
            });
        }

        let name = format_identity(spec.identity, &values);

        Ok(Record { spec, values, name })
    }

    /// The attribute stored under `attr`, which may be null.
    pub fn get(&self, attr: &str) -> Result<&AttrValue, MastError> {
        self.values
            .get(attr)
            .ok_or_else(|| MastError::UnknownAttribute {
                model: self.spec.name,
                name: attr.to_string(),
            })
    }

    /// The record's display identity, e.g. `1.01` for a KOI.
    pub fn identity(&self) -> &str {
        &self.name
    }

    /// The name of the record's model, e.g. `KOI`.
    pub fn model_name(&self) -> &'static str {
        self.spec.name
    }
}

impl Index<&str> for Record {
    type Output = AttrValue;

    /// Dictionary-style lookup; panics on an undeclared attribute key.
    fn index(&self, attr: &str) -> &AttrValue {
        match self.values.get(attr) {
            Some(value) => value,
            None => panic!("{} has no attribute '{attr}'", self.spec.name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}({})>", self.spec.name, self.name)
    }
}

/// Coerce one wire value; `None` means the coercion failed.
fn coerce(kind: FieldKind, raw: &Value) -> Option<AttrValue> {
    match kind {
        FieldKind::Int => match raw {
            // Fractional numbers truncate toward zero; fractional strings
            // do not parse and fall through to null.
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(AttrValue::Int),
            Value::String(s) => s.trim().parse::<i64>().ok().map(AttrValue::Int),
            _ => None,
        },
        FieldKind::Float => match raw {
            Value::Number(n) => n.as_f64().map(AttrValue::Float),
            Value::String(s) => s.trim().parse::<f64>().ok().map(AttrValue::Float),
            _ => None,
        },
        FieldKind::Text => match raw {
            Value::String(s) => Some(AttrValue::Text(s.clone())),
            Value::Number(n) => Some(AttrValue::Text(n.to_string())),
            _ => None,
        },
    }
}

/// Interpolate `{attr}` placeholders with attribute values.
fn format_identity(template: &str, values: &HashMap<String, AttrValue>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let attr = &after[..close];
                if let Some(value) = values.get(attr) {
                    out.push_str(&value.to_string());
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
