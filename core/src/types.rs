//! # ARGUMENT VALUE TYPES
//!
//! Arguments reach the validators as `serde_json::Value`s. The calling layer
//! maps its own values (numbers, strings, tuples, method names) onto JSON
//! before a check and reads the checked values back out afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// **ARGUMENT DICTIONARY**
///
/// Parameter name to supplied value. Owned by the call site; only method
/// validators remove entries from it.
pub type ArgMap = Map<String, Value>;

/// Declared type for a [`TypeValidator`](crate::validation::TypeValidator).
///
/// `Integer` is a subtype of `Number`: an integer value satisfies both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

impl JsonType {
    /// Runtime membership check, honouring `Integer <: Number`.
    pub fn matches(self, value: &Value) -> bool {
        match (value, self) {
            (Value::String(_), JsonType::String) => true,
            (Value::Number(_), JsonType::Number) => true,
            (Value::Number(n), JsonType::Integer) => is_integer(n),
            (Value::Bool(_), JsonType::Boolean) => true,
            (Value::Array(_), JsonType::Array) => true,
            (Value::Object(_), JsonType::Object) => true,
            (Value::Null, JsonType::Null) => true,
            _ => false,
        }
    }

    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
            JsonType::Object => "object",
            JsonType::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True for numbers stored as `i64`/`u64`. `2.0` is a float, not an integer.
pub fn is_integer(number: &Number) -> bool {
    number.is_i64() || number.is_u64()
}

/// Text form of a value as it appears in messages and regex matching.
///
/// Strings render without quotes; everything else renders as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Equality used for option membership: numbers compare by value, so `1`
/// and `1.0` are the same option.
pub fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
                return x == y;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        _ => left == right,
    }
}

/// Builds an [`ArgMap`] from a JSON object; any other value yields `None`.
pub fn arg_map(value: Value) -> Option<ArgMap> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
