pub use crate::errors::{ArgumentError, SchemaError};
pub use crate::schema::{CheckedArgs, OperationSchema, OperationSchemaBuilder, OperationSpec};
pub use crate::types::{arg_map, ArgMap, JsonType};
pub use crate::validation::{
    CheckOptions, Constraint, ListValidator, MethodSelection, MethodValidator, Methods,
    NumberValidator, OptionValidator, RegexFlags, RegexValidator, TypeValidator, Validator,
    ValidatorKind, ValidatorSpec,
};
