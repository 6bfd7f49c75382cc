use crate::types::ArgMap;
use crate::validation::{CheckOptions, Validator};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a successful schema check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckedArgs {
    /// Selected method, when the operation declares one.
    pub method: Option<String>,
    /// Checked value (or default) of every other declared parameter.
    pub values: ArgMap,
}

impl CheckedArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Serialized form of an operation schema.
///
/// ```json
/// {
///   "name": "blur",
///   "strict": true,
///   "arguments": {
///     "method": { "kind": "method", "methods": { "gaussian": ["sigma"], "median": [] }, "default": "gaussian" },
///     "size": { "kind": "number", "min_value": 1, "only_integer": true, "only_odd": true, "default": 5 },
///     "sigma": { "kind": "number", "min_value": 0, "default": 0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSpec {
    pub name: String,
    #[serde(flatten)]
    pub options: CheckOptions,
    #[serde(default)]
    pub arguments: IndexMap<String, Validator>,
}
