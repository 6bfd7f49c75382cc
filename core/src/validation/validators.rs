//! # CONCRETE VALIDATOR IMPLEMENTATIONS
//!
//! Scalar validators (number, option, regex, type) and the list composite.
//! The method validator lives in [`super::method`].

use super::{ensure_bounds, Constraint, ValidationResult, Validator};
use crate::errors::{ArgumentError, SchemaError};
use crate::types::{display_value, is_integer, same_value, JsonType};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

fn invalid_value(name: &str, requirement: impl std::fmt::Display) -> ArgumentError {
    ArgumentError::invalid(
        name,
        format!("Invalid value for \"{}\". {}", name, requirement),
    )
}

// ================================================================================================
// NUMBER VALIDATOR - Numeric kind, inclusive bounds and parity
// ================================================================================================

/// **NUMBER VALIDATOR**
///
/// Accepts JSON numbers inside `[min_value, max_value]`. Refinements:
/// `only_integer` rejects floats (including `2.0`), `only_odd` / `only_even`
/// restrict parity. Setting both parity flags yields a validator that
/// accepts nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberValidator {
    min_value: f64,
    max_value: f64,
    only_integer: bool,
    only_odd: bool,
    only_even: bool,
    default: Option<Value>,
}

impl NumberValidator {
    /// **CONSTRUCTOR** - Unbounded, any number, required.
    pub fn new() -> Self {
        Self {
            min_value: f64::NEG_INFINITY,
            max_value: f64::INFINITY,
            only_integer: false,
            only_odd: false,
            only_even: false,
            default: None,
        }
    }

    /// Inclusive lower bound.
    pub fn with_min(mut self, min_value: f64) -> Self {
        self.min_value = min_value;
        self
    }

    /// Inclusive upper bound.
    pub fn with_max(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Allow only integers.
    pub fn integer(mut self) -> Self {
        self.only_integer = true;
        self
    }

    /// Allow only odd numbers.
    pub fn odd(mut self) -> Self {
        self.only_odd = true;
        self
    }

    /// Allow only even numbers.
    pub fn even(mut self) -> Self {
        self.only_even = true;
        self
    }

    /// Value returned when the argument is not supplied.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// **BUILD** - Fails when a bound is NaN or `min_value > max_value`.
    pub fn build(self) -> Result<Validator, SchemaError> {
        ensure_bounds(self.min_value, self.max_value)?;
        Ok(Validator::Number(self))
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn only_integer(&self) -> bool {
        self.only_integer
    }

    pub fn only_odd(&self) -> bool {
        self.only_odd
    }

    pub fn only_even(&self) -> bool {
        self.only_even
    }

    fn admits(&self, number: &Number) -> bool {
        let integral = is_integer(number);
        if self.only_integer && !integral {
            return false;
        }
        let Some(x) = number.as_f64() else {
            return false;
        };
        let in_bounds = match exact_integer(number) {
            Some(i) => {
                (self.min_value == f64::NEG_INFINITY || i >= self.min_value.ceil() as i128)
                    && (self.max_value == f64::INFINITY || i <= self.max_value.floor() as i128)
            }
            None => self.min_value <= x && x <= self.max_value,
        };
        if !in_bounds {
            return false;
        }
        let odd = if let Some(i) = number.as_i64() {
            i % 2 != 0
        } else if let Some(u) = number.as_u64() {
            u % 2 != 0
        } else {
            x % 2.0 != 0.0
        };
        !(self.only_odd && !odd) && !(self.only_even && odd)
    }

    fn expectation(&self, inside_list: bool) -> &'static str {
        if inside_list {
            return if self.only_integer {
                "a list/tuple of integers"
            } else {
                "a list/tuple of numbers"
            };
        }
        match (self.only_odd, self.only_even, self.only_integer) {
            (true, _, true) => "an odd integer",
            (true, _, false) => "an odd number",
            (false, true, true) => "an even integer",
            (false, true, false) => "an even number",
            (false, false, true) => "an integer",
            (false, false, false) => "a number",
        }
    }
}

/// `i64`/`u64` numbers widened without rounding; `None` for floats.
fn exact_integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint for NumberValidator {
    fn validate(&self, name: &str, value: &Value, inside_list: bool) -> ValidationResult<Value> {
        match value {
            Value::Number(n) if self.admits(n) => Ok(value.clone()),
            _ => Err(invalid_value(
                name,
                format_args!(
                    "Must be {} between {} and {}.",
                    self.expectation(inside_list),
                    self.min_value,
                    self.max_value
                ),
            )),
        }
    }

    /// `self` must be no stricter than `other` along every axis.
    fn accept(&self, other: &Self) -> bool {
        self.min_value <= other.min_value
            && self.max_value >= other.max_value
            && (other.only_odd || !self.only_odd)
            && (other.only_even || !self.only_even)
            && (other.only_integer || !self.only_integer)
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ================================================================================================
// OPTION VALIDATOR - Membership in an ordered option list
// ================================================================================================

/// **OPTION VALIDATOR**
///
/// The default is declared as an index into the option list and resolved to
/// the literal once, in [`OptionValidator::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionValidator {
    options: Vec<Value>,
    default_index: Option<usize>,
    default: Option<Value>,
}

impl OptionValidator {
    /// **CONSTRUCTOR**
    pub fn new<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default_index: None,
            default: None,
        }
    }

    /// Default given as a position in the option list.
    pub fn with_default(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    /// **BUILD** - Fails on an empty option list or an out-of-range default.
    pub fn build(mut self) -> Result<Validator, SchemaError> {
        if self.options.is_empty() {
            return Err(SchemaError::EmptyOptions);
        }
        if let Some(index) = self.default_index {
            let literal = self
                .options
                .get(index)
                .cloned()
                .ok_or(SchemaError::DefaultOutOfRange {
                    index,
                    len: self.options.len(),
                })?;
            self.default = Some(literal);
        }
        Ok(Validator::Option(self))
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }

    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    fn contains(&self, value: &Value) -> bool {
        self.options.iter().any(|o| same_value(o, value))
    }
}

impl Constraint for OptionValidator {
    fn validate(&self, name: &str, value: &Value, _inside_list: bool) -> ValidationResult<Value> {
        if self.contains(value) {
            return Ok(value.clone());
        }
        let possible: Vec<String> = self.options.iter().map(display_value).collect();
        Err(invalid_value(
            name,
            format_args!("Possible values: {}", possible.join(", ")),
        ))
    }

    fn accept(&self, other: &Self) -> bool {
        other.options.iter().all(|o| self.contains(o))
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ================================================================================================
// REGEX VALIDATOR - Pattern match anchored at the start
// ================================================================================================

/// Regex compilation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
        }
    }
}

/// **REGEX VALIDATOR**
///
/// Matches the text form of the value from its first character. Trailing
/// characters after the match are allowed ("match", not "full match").
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: String,
    flags: RegexFlags,
    regex: Regex,
    description: Option<String>,
    default: Option<Value>,
}

impl RegexValidator {
    /// **CONSTRUCTOR** - Compiles `pattern` with default flags.
    pub fn new(pattern: impl Into<String>) -> Result<Self, SchemaError> {
        Self::with_flags(pattern, RegexFlags::default())
    }

    /// **CONSTRUCTOR WITH FLAGS**
    pub fn with_flags(pattern: impl Into<String>, flags: RegexFlags) -> Result<Self, SchemaError> {
        let pattern = pattern.into();
        // \A pins the match to the start even in multi-line mode. In verbose
        // mode a trailing `#` comment would swallow the closing paren.
        let anchored = if flags.ignore_whitespace {
            format!("\\A(?:{}\n)", pattern)
        } else {
            format!(r"\A(?:{})", pattern)
        };
        let regex = regex::RegexBuilder::new(&anchored)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .unicode(flags.unicode)
            .build()?;
        Ok(Self {
            pattern,
            flags,
            regex,
            description: None,
            default: None,
        })
    }

    /// Human readable description of accepted values, used in errors.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value returned when the argument is not supplied.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// **BUILD**
    pub fn build(self) -> Result<Validator, SchemaError> {
        Ok(Validator::Regex(self))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Constraint for RegexValidator {
    fn validate(&self, name: &str, value: &Value, _inside_list: bool) -> ValidationResult<Value> {
        if self.regex.is_match(&display_value(value)) {
            return Ok(value.clone());
        }
        Err(match &self.description {
            Some(description) => invalid_value(name, format_args!("Must be a/an {}.", description)),
            None => invalid_value(
                name,
                format_args!("Must satisfy this regex pattern \"{}\".", self.pattern),
            ),
        })
    }

    /// Syntactic: identical pattern text and flags.
    fn accept(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ================================================================================================
// TYPE VALIDATOR - Runtime JSON type
// ================================================================================================

/// **TYPE VALIDATOR**
#[derive(Debug, Clone, PartialEq)]
pub struct TypeValidator {
    arg_type: JsonType,
    default: Option<Value>,
}

impl TypeValidator {
    /// **CONSTRUCTOR**
    pub fn new(arg_type: JsonType) -> Self {
        Self {
            arg_type,
            default: None,
        }
    }

    /// Value returned when the argument is not supplied.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// **BUILD**
    pub fn build(self) -> Result<Validator, SchemaError> {
        Ok(Validator::Type(self))
    }

    pub fn arg_type(&self) -> JsonType {
        self.arg_type
    }
}

impl Constraint for TypeValidator {
    fn validate(&self, name: &str, value: &Value, inside_list: bool) -> ValidationResult<Value> {
        if self.arg_type.matches(value) {
            return Ok(value.clone());
        }
        let prefix = if inside_list {
            "a list/tuple of objects"
        } else {
            "an object"
        };
        Err(invalid_value(
            name,
            format_args!("Must be {} from class {}", prefix, self.arg_type),
        ))
    }

    fn accept(&self, other: &Self) -> bool {
        self.arg_type == other.arg_type
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ================================================================================================
// LIST VALIDATOR - Array shape with a per-element child validator
// ================================================================================================

/// **LIST VALIDATOR**
///
/// Accepts JSON arrays (lists and tuples of the calling layer) whose every
/// element passes the child validator. The checked value is returned as-is.
#[derive(Debug, Clone)]
pub struct ListValidator {
    validator: Box<Validator>,
    length: Option<usize>,
    default: Option<Value>,
}

impl ListValidator {
    /// **CONSTRUCTOR**
    pub fn new(validator: Validator) -> Self {
        Self {
            validator: Box::new(validator),
            length: None,
            default: None,
        }
    }

    /// Mandatory number of elements.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Value returned when the argument is not supplied.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// **BUILD** - A method validator cannot be a list element.
    pub fn build(self) -> Result<Validator, SchemaError> {
        if self.validator.as_method().is_some() {
            return Err(SchemaError::NestedMethod);
        }
        Ok(Validator::List(self))
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }
}

impl Constraint for ListValidator {
    fn validate(&self, name: &str, value: &Value, _inside_list: bool) -> ValidationResult<Value> {
        let Value::Array(items) = value else {
            return Err(invalid_value(name, "Must be a list or tuple."));
        };
        if let Some(length) = self.length {
            if items.len() != length {
                return Err(invalid_value(
                    name,
                    format_args!("Must be {} elements long.", length),
                ));
            }
        }
        for item in items {
            self.validator.validate_value(name, item, true)?;
        }
        Ok(value.clone())
    }

    fn accept(&self, other: &Self) -> bool {
        self.length == other.length && self.validator.accept(&other.validator)
    }

    fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArgMap;
    use crate::validation::MethodValidator;
    use serde_json::json;

    fn message(err: ArgumentError) -> String {
        err.to_string()
    }

    // **NUMBER VALIDATOR TESTS**
    mod number_validator_tests {
        use super::*;

        #[test]
        fn test_number_bounds_are_exact_for_large_integers() {
            let v = NumberValidator::new().integer().with_max(9007199254740992.0);
            assert!(v.validate("n", &json!(9007199254740992i64), false).is_ok());
            assert!(v.validate("n", &json!(9007199254740993i64), false).is_err());

            let v = NumberValidator::new().with_min(9007199254740992.0);
            assert!(v.validate("n", &json!(9007199254740991i64), false).is_err());
            assert!(v.validate("n", &json!(u64::MAX), false).is_ok());

            let v = NumberValidator::new().with_min(-0.5).with_max(2.5);
            assert!(v.validate("n", &json!(0), false).is_ok());
            assert!(v.validate("n", &json!(2), false).is_ok());
            assert!(v.validate("n", &json!(3), false).is_err());
        }

        #[test]
        fn test_number_accepts_within_bounds() {
            let v = NumberValidator::new().with_min(0.0).with_max(10.0);
            assert!(v.validate("x", &json!(0), false).is_ok());
            assert!(v.validate("x", &json!(10), false).is_ok());
            assert!(v.validate("x", &json!(2.5), false).is_ok());
            assert!(v.validate("x", &json!(-1), false).is_err());
            assert!(v.validate("x", &json!(10.5), false).is_err());
        }

        #[test]
        fn test_number_rejects_non_numbers() {
            let v = NumberValidator::new();
            assert!(v.validate("x", &json!("3"), false).is_err());
            assert!(v.validate("x", &json!(true), false).is_err());
            assert!(v.validate("x", &json!([3]), false).is_err());
        }

        #[test]
        fn test_number_only_integer_rejects_floats() {
            let v = NumberValidator::new().integer();
            assert!(v.validate("x", &json!(4), false).is_ok());
            assert!(v.validate("x", &json!(4.0), false).is_err());
            assert!(v.validate("x", &json!(4.5), false).is_err());
        }

        #[test]
        fn test_number_parity() {
            let odd = NumberValidator::new().integer().odd();
            assert!(odd.validate("k", &json!(3), false).is_ok());
            assert!(odd.validate("k", &json!(-3), false).is_ok());
            assert!(odd.validate("k", &json!(4), false).is_err());

            let even = NumberValidator::new().even();
            assert!(even.validate("k", &json!(4), false).is_ok());
            assert!(even.validate("k", &json!(4.0), false).is_ok());
            assert!(even.validate("k", &json!(3), false).is_err());
            assert!(even.validate("k", &json!(2.5), false).is_err());
        }

        #[test]
        fn test_number_both_parities_accepts_nothing() {
            let v = NumberValidator::new().odd().even();
            for x in [json!(0), json!(1), json!(2), json!(1.5)] {
                assert!(v.validate("k", &x, false).is_err());
            }
        }

        #[test]
        fn test_number_error_wording() {
            let v = NumberValidator::new().with_min(1.0).integer().odd();
            let err = v.validate("ksize", &json!(2), false).unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"ksize\". Must be an odd integer between 1 and inf."
            );

            let err = NumberValidator::new()
                .integer()
                .even()
                .validate("n", &json!(1), false)
                .unwrap_err();
            assert!(message(err).contains("an even integer"));

            let err = NumberValidator::new()
                .with_min(0.0)
                .validate("size", &json!(-1), true)
                .unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"size\". Must be a list/tuple of numbers between 0 and inf."
            );
        }

        #[test]
        fn test_number_accept_rules() {
            let wide = NumberValidator::new().with_min(0.0).with_max(100.0);
            let narrow = NumberValidator::new().with_min(10.0).with_max(20.0).integer();
            assert!(wide.accept(&narrow));
            assert!(!narrow.accept(&wide));

            let odd = NumberValidator::new().odd();
            let any = NumberValidator::new();
            assert!(any.accept(&odd));
            assert!(!odd.accept(&any));
            assert!(odd.accept(&odd));

            let even = NumberValidator::new().even();
            assert!(!even.accept(&any));
            assert!(any.accept(&even));
        }

        #[test]
        fn test_number_build_rejects_inverted_bounds() {
            let err = NumberValidator::new().with_min(5.0).with_max(1.0).build().unwrap_err();
            assert!(matches!(err, SchemaError::InvalidBounds { .. }));
            assert!(NumberValidator::new().with_min(f64::NAN).build().is_err());
        }
    }

    // **OPTION VALIDATOR TESTS**
    mod option_validator_tests {
        use super::*;

        #[test]
        fn test_option_membership() {
            let v = OptionValidator::new(["nearest", "linear", "cubic"]);
            assert_eq!(v.validate("i", &json!("linear"), false).unwrap(), json!("linear"));
            let err = v.validate("i", &json!("area"), false).unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"i\". Possible values: nearest, linear, cubic"
            );
        }

        #[test]
        fn test_option_default_resolved_to_literal() {
            let v = OptionValidator::new(["a", "b", "c"]).with_default(1).build().unwrap();
            assert_eq!(v.default(), Some(&json!("b")));
            assert_eq!(v.check("m", &mut ArgMap::new()).unwrap(), json!("b"));
        }

        #[test]
        fn test_option_default_out_of_range_fails_at_build() {
            let err = OptionValidator::new(["a"]).with_default(3).build().unwrap_err();
            assert!(matches!(err, SchemaError::DefaultOutOfRange { index: 3, len: 1 }));
            assert!(matches!(
                OptionValidator::new(Vec::<Value>::new()).build(),
                Err(SchemaError::EmptyOptions)
            ));
        }

        #[test]
        fn test_option_accept_is_subset() {
            let abc = OptionValidator::new(["a", "b", "c"]);
            let ab = OptionValidator::new(["b", "a"]);
            assert!(abc.accept(&ab));
            assert!(!ab.accept(&abc));
            assert!(ab.accept(&ab));
        }

        #[test]
        fn test_option_numeric_options() {
            let v = OptionValidator::new([1, 2, 4]);
            assert!(v.validate("scale", &json!(2), false).is_ok());
            assert!(v.validate("scale", &json!(2.0), false).is_ok());
            assert!(v.validate("scale", &json!(3), false).is_err());
        }
    }

    // **REGEX VALIDATOR TESTS**
    mod regex_validator_tests {
        use super::*;

        #[test]
        fn test_regex_match_is_anchored_at_start_only() {
            let v = RegexValidator::new("#[0-9a-f]{6}").unwrap();
            assert!(v.validate("c", &json!("#00ff00"), false).is_ok());
            assert!(v.validate("c", &json!("#00ff00 trailing"), false).is_ok());
            assert!(v.validate("c", &json!(" #00ff00"), false).is_err());
        }

        #[test]
        fn test_regex_matches_text_of_non_strings() {
            let v = RegexValidator::new(r"\d+").unwrap();
            assert!(v.validate("n", &json!(42), false).is_ok());
            assert!(v.validate("n", &json!(true), false).is_err());
        }

        #[test]
        fn test_regex_error_messages() {
            let plain = RegexValidator::new("a+").unwrap();
            let err = plain.validate("s", &json!("b"), false).unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"s\". Must satisfy this regex pattern \"a+\"."
            );

            let described = RegexValidator::new("a+").unwrap().describe("string of a's");
            let err = described.validate("s", &json!("b"), false).unwrap_err();
            assert_eq!(message(err), "Invalid value for \"s\". Must be a/an string of a's.");
        }

        #[test]
        fn test_regex_verbose_pattern_with_trailing_comment() {
            let flags = RegexFlags {
                ignore_whitespace: true,
                ..RegexFlags::default()
            };
            let v = RegexValidator::with_flags("[a-z]+ _ [0-9]+ # word then digits", flags).unwrap();
            assert!(v.validate("tag", &json!("kernel_05"), false).is_ok());
            assert!(v.validate("tag", &json!("_05"), false).is_err());
            assert!(v.validate("tag", &json!("kernel_"), false).is_err());
        }

        #[test]
        fn test_regex_flags() {
            let flags = RegexFlags {
                case_insensitive: true,
                ..RegexFlags::default()
            };
            let v = RegexValidator::with_flags("abc", flags).unwrap();
            assert!(v.validate("s", &json!("ABC"), false).is_ok());
            assert!(!v.accept(&RegexValidator::new("abc").unwrap()));
        }

        #[test]
        fn test_regex_accept_is_syntactic() {
            let a = RegexValidator::new("a+").unwrap();
            let b = RegexValidator::new("a+").unwrap().describe("other text");
            let c = RegexValidator::new("a*").unwrap();
            assert!(a.accept(&b));
            assert!(!c.accept(&a));
        }

        #[test]
        fn test_regex_invalid_pattern() {
            assert!(matches!(
                RegexValidator::new("(unclosed"),
                Err(SchemaError::InvalidPattern(_))
            ));
        }
    }

    // **TYPE VALIDATOR TESTS**
    mod type_validator_tests {
        use super::*;

        #[test]
        fn test_type_check_and_wording() {
            let v = TypeValidator::new(JsonType::Object);
            assert!(v.validate("img", &json!({"w": 1}), false).is_ok());
            let err = v.validate("img", &json!(1), false).unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"img\". Must be an object from class object"
            );
            let err = v.validate("img", &json!(1), true).unwrap_err();
            assert!(message(err).contains("a list/tuple of objects"));
        }

        #[test]
        fn test_type_subtype_membership() {
            let v = TypeValidator::new(JsonType::Number);
            assert!(v.validate("x", &json!(1), false).is_ok());
            assert!(v.validate("x", &json!(1.5), false).is_ok());
        }

        #[test]
        fn test_type_accept_identical_only() {
            let number = TypeValidator::new(JsonType::Number);
            let integer = TypeValidator::new(JsonType::Integer);
            assert!(number.accept(&number.clone()));
            assert!(!number.accept(&integer));
        }
    }

    // **LIST VALIDATOR TESTS**
    mod list_validator_tests {
        use super::*;

        fn pair() -> ListValidator {
            let inner = NumberValidator::new().with_min(0.0).build().unwrap();
            ListValidator::new(inner).with_length(2)
        }

        #[test]
        fn test_list_length_and_shape() {
            let v = pair();
            assert_eq!(v.validate("p", &json!([3, 4]), false).unwrap(), json!([3, 4]));
            assert!(v.validate("p", &json!([3, 4, 5]), false).is_err());
            let err = v.validate("p", &json!("34"), false).unwrap_err();
            assert_eq!(message(err), "Invalid value for \"p\". Must be a list or tuple.");
        }

        #[test]
        fn test_list_inner_failure_propagates_with_list_wording() {
            let err = pair().validate("p", &json!([-1, 4]), false).unwrap_err();
            assert_eq!(
                message(err),
                "Invalid value for \"p\". Must be a list/tuple of numbers between 0 and inf."
            );
        }

        #[test]
        fn test_list_length_message() {
            let err = pair().validate("p", &json!([1]), false).unwrap_err();
            assert_eq!(message(err), "Invalid value for \"p\". Must be 2 elements long.");
        }

        #[test]
        fn test_nested_lists() {
            let point = pair().build().unwrap();
            let rectangle = ListValidator::new(point).with_length(2);
            assert!(rectangle.validate("r", &json!([[0, 0], [5, 5]]), false).is_ok());
            assert!(rectangle.validate("r", &json!([[0, 0], [5]]), false).is_err());
        }

        #[test]
        fn test_list_accept() {
            let wide = ListValidator::new(NumberValidator::new().build().unwrap()).with_length(2);
            let narrow = pair();
            let unsized_list = ListValidator::new(NumberValidator::new().build().unwrap());
            assert!(wide.accept(&narrow));
            assert!(!narrow.accept(&wide));
            assert!(!unsized_list.accept(&wide));
            assert!(!wide.accept(&unsized_list));
        }

        #[test]
        fn test_list_rejects_method_child() {
            let method = MethodValidator::new(["a"]).build().unwrap();
            assert!(matches!(
                ListValidator::new(method).build(),
                Err(SchemaError::NestedMethod)
            ));
        }
    }
}
