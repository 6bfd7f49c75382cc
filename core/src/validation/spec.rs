//! Serializable validator declarations.
//!
//! [`Validator`] (de)serializes through [`ValidatorSpec`], so declarations
//! loaded from JSON pass through the same `build()` checks as declarations
//! written in code.
//!
//! ```json
//! { "kind": "number", "min_value": 1, "only_integer": true, "only_odd": true, "default": 3 }
//! { "kind": "option", "options": ["nearest", "linear"], "default": 0 }
//! { "kind": "list", "validator": { "kind": "number", "min_value": 0 }, "length": 2 }
//! { "kind": "method", "methods": { "gaussian": ["sigma"], "median": [] } }
//! ```

use super::{
    ListValidator, MethodValidator, Methods, NumberValidator, OptionValidator, RegexFlags,
    RegexValidator, TypeValidator, Validator, DEFAULT_METHOD_NAME,
};
use crate::errors::SchemaError;
use crate::types::{display_value, JsonType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_method_name() -> String {
    DEFAULT_METHOD_NAME.to_string()
}

/// **VALIDATOR DECLARATION**
///
/// Numeric bounds are optional because JSON has no infinities: an omitted
/// bound means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatorSpec {
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(default)]
        only_integer: bool,
        #[serde(default)]
        only_odd: bool,
        #[serde(default)]
        only_even: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    Option {
        options: Vec<Value>,
        /// Index into `options`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<usize>,
    },
    Regex {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default)]
        flags: RegexFlags,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    Type {
        arg_type: JsonType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    List {
        validator: Box<ValidatorSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    Method {
        methods: Methods,
        #[serde(default = "default_method_name")]
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

impl TryFrom<ValidatorSpec> for Validator {
    type Error = SchemaError;

    fn try_from(spec: ValidatorSpec) -> Result<Self, Self::Error> {
        match spec {
            ValidatorSpec::Number {
                min_value,
                max_value,
                only_integer,
                only_odd,
                only_even,
                default,
            } => {
                let mut v = NumberValidator::new()
                    .with_min(min_value.unwrap_or(f64::NEG_INFINITY))
                    .with_max(max_value.unwrap_or(f64::INFINITY));
                if only_integer {
                    v = v.integer();
                }
                if only_odd {
                    v = v.odd();
                }
                if only_even {
                    v = v.even();
                }
                if let Some(default) = default {
                    v = v.with_default(default);
                }
                v.build()
            }
            ValidatorSpec::Option { options, default } => {
                let mut v = OptionValidator::new(options);
                if let Some(index) = default {
                    v = v.with_default(index);
                }
                v.build()
            }
            ValidatorSpec::Regex {
                pattern,
                description,
                flags,
                default,
            } => {
                let mut v = RegexValidator::with_flags(pattern, flags)?;
                if let Some(description) = description {
                    v = v.describe(description);
                }
                if let Some(default) = default {
                    v = v.with_default(default);
                }
                v.build()
            }
            ValidatorSpec::Type { arg_type, default } => {
                let mut v = TypeValidator::new(arg_type);
                if let Some(default) = default {
                    v = v.with_default(default);
                }
                v.build()
            }
            ValidatorSpec::List {
                validator,
                length,
                default,
            } => {
                let mut v = ListValidator::new(Validator::try_from(*validator)?);
                if let Some(length) = length {
                    v = v.with_length(length);
                }
                if let Some(default) = default {
                    v = v.with_default(default);
                }
                v.build()
            }
            ValidatorSpec::Method {
                methods,
                name,
                default,
            } => {
                let mut v = MethodValidator::from_methods(methods).named(name);
                if let Some(default) = default {
                    v = v.with_default(default);
                }
                v.build()
            }
        }
    }
}

fn finite(bound: f64) -> Option<f64> {
    bound.is_finite().then_some(bound)
}

impl From<Validator> for ValidatorSpec {
    fn from(validator: Validator) -> Self {
        use super::Constraint;

        match validator {
            Validator::Number(v) => ValidatorSpec::Number {
                min_value: finite(v.min_value()),
                max_value: finite(v.max_value()),
                only_integer: v.only_integer(),
                only_odd: v.only_odd(),
                only_even: v.only_even(),
                default: v.default().cloned(),
            },
            Validator::Option(v) => ValidatorSpec::Option {
                options: v.options().to_vec(),
                default: v.default_index(),
            },
            Validator::Regex(v) => ValidatorSpec::Regex {
                pattern: v.pattern().to_string(),
                description: v.description().map(str::to_string),
                flags: v.flags(),
                default: v.default().cloned(),
            },
            Validator::Type(v) => ValidatorSpec::Type {
                arg_type: v.arg_type(),
                default: v.default().cloned(),
            },
            Validator::List(v) => ValidatorSpec::List {
                validator: Box::new(ValidatorSpec::from(v.validator().clone())),
                length: v.length(),
                default: v.default().cloned(),
            },
            Validator::Method(v) => ValidatorSpec::Method {
                methods: v.methods().clone(),
                name: v.method_name().to_string(),
                default: v.default().map(display_value),
            },
        }
    }
}
