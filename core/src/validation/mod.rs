//! # VALIDATION MODULE
//!
//! **DECLARATIVE ARGUMENT CONSTRAINTS WITH SUBSUMPTION**
//!
//! Every operation parameter is governed by one [`Validator`]. A validator
//! answers two questions:
//!
//! 1. **CHECK** - does a supplied argument satisfy the constraint? Missing
//!    arguments fall back to the declared default or fail as required.
//! 2. **ACCEPT** - does every value legal under another validator of the same
//!    kind also pass this one? Pipeline composers use this to decide whether
//!    two configured operations can stand in for each other.
//!
//! ## VALIDATOR KINDS
//!
//! | Kind | Constraint |
//! |------|------------|
//! | [`NumberValidator`] | numeric kind, inclusive bounds, parity |
//! | [`OptionValidator`] | membership in an ordered option list |
//! | [`RegexValidator`] | pattern match anchored at the start |
//! | [`TypeValidator`] | runtime JSON type |
//! | [`ListValidator`] | array shape, optional length, per-element child |
//! | [`MethodValidator`] | variant selection and per-variant argument names |
//!
//! ## USAGE
//!
//! ```rust
//! use opargs::validation::{NumberValidator, Validator};
//! use serde_json::json;
//!
//! let ksize = NumberValidator::new().with_min(1.0).integer().odd().with_default(3).build()?;
//! let mut args = json!({"ksize": 5}).as_object().cloned().unwrap_or_default();
//! assert_eq!(ksize.check("ksize", &mut args)?, json!(5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::errors::{ArgumentError, SchemaError};
use crate::types::ArgMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod method;
pub mod spec;
pub mod validators;

pub use method::{MethodSelection, MethodValidator, Methods, DEFAULT_METHOD_NAME};
pub use spec::ValidatorSpec;
pub use validators::{
    ListValidator, NumberValidator, OptionValidator, RegexFlags, RegexValidator, TypeValidator,
};

/// **VALIDATION RESULT TYPE ALIAS**
pub type ValidationResult<T> = Result<T, ArgumentError>;

static NOT_SUPPLIED: Value = Value::Null;

/// **CORE CONSTRAINT TRAIT**
///
/// Implemented by every concrete validator. `accept` takes `&Self`, so
/// subsumption between two different kinds cannot even be asked at this
/// level; [`Validator::accept`] answers `false` for those pairs.
pub trait Constraint {
    /// Check a single value. `inside_list` only changes the error wording.
    fn validate(&self, name: &str, value: &Value, inside_list: bool) -> ValidationResult<Value>;

    /// True iff every value satisfying `other` also satisfies `self`.
    fn accept(&self, other: &Self) -> bool;

    /// Value used when the argument is not supplied; `None` means required.
    fn default(&self) -> Option<&Value>;
}

/// Tag of a [`Validator`], mostly for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    Number,
    Option,
    Regex,
    Type,
    List,
    Method,
}

/// **VALIDATOR**
///
/// Closed set of constraint kinds. Built once at schema definition time via
/// the concrete builders' `build()` and read-only afterwards, so one instance
/// can be shared by any number of concurrent checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ValidatorSpec", into = "ValidatorSpec")]
pub enum Validator {
    Number(NumberValidator),
    Option(OptionValidator),
    Regex(RegexValidator),
    Type(TypeValidator),
    List(ListValidator),
    Method(MethodValidator),
}

impl Validator {
    /// Kind tag of this validator.
    pub fn kind(&self) -> ValidatorKind {
        match self {
            Validator::Number(_) => ValidatorKind::Number,
            Validator::Option(_) => ValidatorKind::Option,
            Validator::Regex(_) => ValidatorKind::Regex,
            Validator::Type(_) => ValidatorKind::Type,
            Validator::List(_) => ValidatorKind::List,
            Validator::Method(_) => ValidatorKind::Method,
        }
    }

    /// Declared default, already resolved to a literal value.
    pub fn default(&self) -> Option<&Value> {
        match self {
            Validator::Number(v) => v.default(),
            Validator::Option(v) => v.default(),
            Validator::Regex(v) => v.default(),
            Validator::Type(v) => v.default(),
            Validator::List(v) => v.default(),
            Validator::Method(v) => v.default(),
        }
    }

    /// A validator without default must be supplied.
    pub fn is_required(&self) -> bool {
        self.default().is_none()
    }

    /// Borrow the method validator, if this is one.
    pub fn as_method(&self) -> Option<&MethodValidator> {
        match self {
            Validator::Method(m) => Some(m),
            _ => None,
        }
    }

    pub(crate) fn as_method_mut(&mut self) -> Option<&mut MethodValidator> {
        match self {
            Validator::Method(m) => Some(m),
            _ => None,
        }
    }

    /// **CHECK ARGUMENT**
    ///
    /// Returns the default (or fails with `MissingArgument`) when `name` is
    /// absent or null, otherwise delegates to [`Validator::validate`].
    ///
    /// A method validator writes its default into `args` before validating,
    /// and always removes `name` from `args`.
    pub fn check(&self, name: &str, args: &mut ArgMap) -> ValidationResult<Value> {
        let supplied = args.get(name).is_some_and(|v| !v.is_null());
        if !supplied {
            let default = self
                .default()
                .cloned()
                .ok_or_else(|| ArgumentError::missing(name))?;
            match self {
                Validator::Method(_) => {
                    log::trace!("Applying default method {} for \"{}\"", default, name);
                    args.insert(name.to_string(), default);
                }
                _ => return Ok(default),
            }
        }
        self.validate(name, args, false)
    }

    /// **VALIDATE ARGUMENT**
    ///
    /// Kind-specific check of `args[name]` with no default handling. The method
    /// kind pops `name` from `args` and then checks the remaining keys against
    /// the selected method's allow-list.
    pub fn validate(
        &self,
        name: &str,
        args: &mut ArgMap,
        inside_list: bool,
    ) -> ValidationResult<Value> {
        match self {
            Validator::Method(m) => {
                let selected = args.remove(name).unwrap_or(Value::Null);
                let method = m.resolve(name, &selected)?;
                m.check_arguments(&method, args)?;
                Ok(Value::String(method))
            }
            other => {
                let value = args.get(name).unwrap_or(&NOT_SUPPLIED);
                other.validate_value(name, value, inside_list)
            }
        }
    }

    /// Check a standalone value. For the method kind only the selection
    /// itself is checked, not the per-method argument names.
    pub fn validate_value(
        &self,
        name: &str,
        value: &Value,
        inside_list: bool,
    ) -> ValidationResult<Value> {
        match self {
            Validator::Number(v) => v.validate(name, value, inside_list),
            Validator::Option(v) => v.validate(name, value, inside_list),
            Validator::Regex(v) => v.validate(name, value, inside_list),
            Validator::Type(v) => v.validate(name, value, inside_list),
            Validator::List(v) => v.validate(name, value, inside_list),
            Validator::Method(v) => v.validate(name, value, inside_list),
        }
    }

    /// **SUBSUMPTION**
    ///
    /// True iff `other` is the same kind and every value it admits is also
    /// admitted by `self`. Different kinds never accept each other.
    pub fn accept(&self, other: &Validator) -> bool {
        match (self, other) {
            (Validator::Number(a), Validator::Number(b)) => a.accept(b),
            (Validator::Option(a), Validator::Option(b)) => a.accept(b),
            (Validator::Regex(a), Validator::Regex(b)) => a.accept(b),
            (Validator::Type(a), Validator::Type(b)) => a.accept(b),
            (Validator::List(a), Validator::List(b)) => a.accept(b),
            (Validator::Method(a), Validator::Method(b)) => a.accept(b),
            _ => false,
        }
    }
}

/// **CHECK OPTIONS**
///
/// Per-schema knobs for [`OperationSchema`](crate::schema::OperationSchema).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// Reject arguments the schema does not declare.
    pub strict: bool,
}

/// **VALIDATION ERROR CODES**
///
/// Stable identifiers returned by [`ArgumentError::code`].
pub mod error_codes {
    /// A required argument was not supplied.
    pub const MISSING_ARGUMENT: &str = "OPARGS_VALIDATION_MISSING_ARGUMENT";
    /// A supplied value violates its constraint.
    pub const INVALID_ARGUMENT: &str = "OPARGS_VALIDATION_INVALID_ARGUMENT";
    /// Unknown method, or argument not legal for the selected method.
    pub const INVALID_VARIANT: &str = "OPARGS_VALIDATION_INVALID_VARIANT";
}

pub(crate) fn ensure_bounds(min: f64, max: f64) -> Result<(), SchemaError> {
    if min.is_nan() || max.is_nan() {
        return Err(SchemaError::NanBound);
    }
    if min > max {
        return Err(SchemaError::InvalidBounds { min, max });
    }
    Ok(())
}
