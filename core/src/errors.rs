use crate::validation::error_codes;
use thiserror::Error;

/// **ARGUMENT ERRORS**
///
/// Raised while checking a supplied argument dictionary. Every variant carries
/// the offending parameter name and a message that can be shown to the user
/// as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    /// A required parameter (no default) was not supplied.
    #[error("Argument \"{name}\" is required but was not provided.")]
    MissingArgument { name: String },

    /// A supplied value violates its validator's constraint.
    #[error("{message}")]
    InvalidArgument { name: String, message: String },

    /// The selected method is not declared, or a supplied parameter is not
    /// legal for the selected method.
    #[error("{message}")]
    InvalidVariant { name: String, message: String },
}

impl ArgumentError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub(crate) fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_variant(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVariant {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that failed.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingArgument { name }
            | Self::InvalidArgument { name, .. }
            | Self::InvalidVariant { name, .. } => name,
        }
    }

    /// Stable error code, see [`error_codes`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => error_codes::MISSING_ARGUMENT,
            Self::InvalidArgument { .. } => error_codes::INVALID_ARGUMENT,
            Self::InvalidVariant { .. } => error_codes::INVALID_VARIANT,
        }
    }
}

/// **SCHEMA ERRORS**
///
/// Raised when a validator or an operation schema is declared inconsistently.
/// These surface at definition time, never during a `check`.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SCHEMA ERROR: min_value {min} is greater than max_value {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("SCHEMA ERROR: numeric bounds must not be NaN")]
    NanBound,

    #[error("SCHEMA ERROR: an option validator needs at least one option")]
    EmptyOptions,

    #[error("SCHEMA ERROR: default index {index} is out of range for {len} options")]
    DefaultOutOfRange { index: usize, len: usize },

    #[error("SCHEMA ERROR: invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("SCHEMA ERROR: a list validator cannot wrap a method validator")]
    NestedMethod,

    #[error("SCHEMA ERROR: the method argument name must not be empty")]
    EmptyMethodName,

    #[error("SCHEMA ERROR: default method \"{method}\" is not one of the declared methods")]
    UnknownDefaultMethod { method: String },

    #[error("SCHEMA ERROR: operation \"{operation}\" declares more than one method validator (\"{first}\" and \"{second}\")")]
    DuplicateMethod {
        operation: String,
        first: String,
        second: String,
    },

    #[error("SCHEMA ERROR: method validator under \"{key}\" reads its selection from \"{method_name}\"")]
    MethodKeyMismatch { key: String, method_name: String },

    #[error("SCHEMA ERROR: {0}")]
    Json(#[from] serde_json::Error),
}
