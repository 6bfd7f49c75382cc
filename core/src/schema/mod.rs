//! Operation schemas: the parameter-name -> validator mapping an operation
//! declares, and the ordered check over a whole argument dictionary.

pub mod checker;
pub mod types;

pub use checker::{OperationSchema, OperationSchemaBuilder};
pub use types::{CheckedArgs, OperationSpec};
