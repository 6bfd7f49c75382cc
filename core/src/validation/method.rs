//! # METHOD VALIDATOR
//!
//! Selects the algorithm variant of an operation and restricts which other
//! arguments may accompany it. Declared either as a plain list of method
//! names, or as method name -> allowed argument names.
//!
//! Checking is a two-phase contract: [`MethodValidator::select`] takes the
//! argument dictionary by value and hands back the chosen method together
//! with the residual arguments, which the remaining validators then see.

use super::{Constraint, ValidationResult, Validator};
use crate::errors::{ArgumentError, SchemaError};
use crate::types::{display_value, ArgMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Argument key carrying the method selection unless renamed.
pub const DEFAULT_METHOD_NAME: &str = "method";

/// Declared methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Methods {
    /// Allowed method names, no per-method argument restriction.
    Names(Vec<String>),
    /// Method name to the argument names legal for it.
    AllowLists(IndexMap<String, Vec<String>>),
}

impl Methods {
    /// Method names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Methods::Names(names) => names.iter().map(String::as_str).collect(),
            Methods::AllowLists(lists) => lists.keys().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, method: &str) -> bool {
        match self {
            Methods::Names(names) => names.iter().any(|n| n == method),
            Methods::AllowLists(lists) => lists.contains_key(method),
        }
    }
}

/// Outcome of [`MethodValidator::select`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSelection {
    /// The selected, declared method.
    pub method: String,
    /// Arguments left after removing the method key.
    pub residual: ArgMap,
}

/// **METHOD VALIDATOR**
#[derive(Debug, Clone, PartialEq)]
pub struct MethodValidator {
    methods: Methods,
    method_name: String,
    default: Option<Value>,
}

impl MethodValidator {
    /// **CONSTRUCTOR** - Plain list of method names.
    pub fn new<I, T>(methods: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_methods(Methods::Names(
            methods.into_iter().map(Into::into).collect(),
        ))
    }

    /// **CONSTRUCTOR WITH ALLOW-LISTS** - Method name to legal argument names.
    pub fn with_allowed_args<I, K, A, T>(methods: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let lists = methods
            .into_iter()
            .map(|(method, args)| (method.into(), args.into_iter().map(Into::into).collect()))
            .collect();
        Self::from_methods(Methods::AllowLists(lists))
    }

    /// Wraps an already assembled [`Methods`] declaration.
    pub fn from_methods(methods: Methods) -> Self {
        Self {
            methods,
            method_name: DEFAULT_METHOD_NAME.to_string(),
            default: None,
        }
    }

    /// Rename the argument key carrying the selection.
    pub fn named(mut self, method_name: impl Into<String>) -> Self {
        self.method_name = method_name.into();
        self
    }

    /// Method used when none is selected.
    pub fn with_default(mut self, method: impl Into<String>) -> Self {
        self.default = Some(Value::String(method.into()));
        self
    }

    /// **BUILD** - The key must be non-empty and a default must be declared.
    pub fn build(self) -> Result<Validator, SchemaError> {
        if self.method_name.is_empty() {
            return Err(SchemaError::EmptyMethodName);
        }
        if let Some(default) = &self.default {
            let declared = default.as_str().is_some_and(|m| self.methods.contains(m));
            if !declared {
                return Err(SchemaError::UnknownDefaultMethod {
                    method: display_value(default),
                });
            }
        }
        Ok(Validator::Method(self))
    }

    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// True when per-method allow-lists are declared.
    pub fn contains_allowed(&self) -> bool {
        matches!(self.methods, Methods::AllowLists(_))
    }

    pub fn allowed_methods(&self) -> Vec<&str> {
        self.methods.names()
    }

    /// Allow-list of `method`; `None` without allow-lists or for an
    /// undeclared method.
    pub fn allowed_args(&self, method: &str) -> Option<&[String]> {
        match &self.methods {
            Methods::AllowLists(lists) => lists.get(method).map(Vec::as_slice),
            Methods::Names(_) => None,
        }
    }

    /// **COMPLETE ALLOW-LISTS**
    ///
    /// Every name in `default_args` that no allow-list mentions (and that is
    /// not the method key) is appended to every method's allow-list, so
    /// arguments shared by all methods are declared once. Idempotent; a no-op
    /// for the plain name-list form.
    pub fn add_unspecified_allowed_args<I, T>(&mut self, default_args: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let Methods::AllowLists(lists) = &mut self.methods else {
            return;
        };
        let specified: HashSet<String> = lists.values().flatten().cloned().collect();
        let mut unspecified: Vec<String> = Vec::new();
        for arg in default_args {
            let arg = arg.as_ref();
            if arg != self.method_name
                && !specified.contains(arg)
                && !unspecified.iter().any(|u| u == arg)
            {
                unspecified.push(arg.to_string());
            }
        }
        if unspecified.is_empty() {
            return;
        }
        log::debug!(
            "Sharing arguments [{}] across methods [{}]",
            unspecified.join(", "),
            lists.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        for allowed in lists.values_mut() {
            allowed.extend(unspecified.iter().cloned());
        }
    }

    /// **SELECT METHOD**
    ///
    /// Takes `args[name]` out of `args` (applying the default when it is
    /// absent), checks it is a declared method and, with allow-lists, that
    /// every remaining argument is legal for it.
    pub fn select(&self, name: &str, mut args: ArgMap) -> ValidationResult<MethodSelection> {
        let selected = match args.remove(name) {
            Some(value) if !value.is_null() => value,
            _ => self
                .default
                .clone()
                .ok_or_else(|| ArgumentError::missing(name))?,
        };
        let method = self.resolve(name, &selected)?;
        self.check_arguments(&method, &args)?;
        log::debug!("Selected method \"{}\" for \"{}\"", method, name);
        Ok(MethodSelection {
            method,
            residual: args,
        })
    }

    pub(crate) fn resolve(&self, name: &str, selected: &Value) -> ValidationResult<String> {
        match selected.as_str() {
            Some(method) if self.methods.contains(method) => Ok(method.to_string()),
            _ => Err(ArgumentError::invalid_variant(
                name,
                format!(
                    "Invalid method \"{}\" for \"{}\". Available methods: {}",
                    display_value(selected),
                    name,
                    self.methods.names().join(", ")
                ),
            )),
        }
    }

    pub(crate) fn check_arguments(&self, method: &str, args: &ArgMap) -> ValidationResult<()> {
        let Some(allowed) = self.allowed_args(method) else {
            return Ok(());
        };
        let rejected: Vec<&str> = args
            .iter()
            .filter(|(key, value)| {
                !value.is_null()
                    && key.as_str() != self.method_name
                    && !allowed.iter().any(|a| a == *key)
            })
            .map(|(key, _)| key.as_str())
            .collect();
        let Some(first) = rejected.first() else {
            return Ok(());
        };
        let allowed_text = if allowed.is_empty() {
            "none".to_string()
        } else {
            allowed.join(", ")
        };
        Err(ArgumentError::invalid_variant(
            *first,
            format!(
                "Invalid arguments for method \"{}\". Allowed arguments: {}. Not allowed: {}",
                method,
                allowed_text,
                rejected.join(", ")
            ),
        ))
    }
}

impl Constraint for MethodValidator {
    /// Checks the selection only; see [`MethodValidator::select`] for the
    /// argument allow-lists.
    fn validate(&self, name: &str, value: &Value, _inside_list: bool) -> ValidationResult<Value> {
        self.resolve(name, value).map(Value::String)
    }

    /// Coarse: every method of `other` is declared by `self`. Allow-lists are
    /// not compared.
    fn accept(&self, other: &Self) -> bool {
        other
            .methods
            .names()
            .into_iter()
            .all(|m| self.methods.contains(m))
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
