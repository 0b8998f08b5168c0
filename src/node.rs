//! Generic configuration node representation
//!
//! A datastore configuration document arrives as an untyped tree of
//! JSON-style maps, already decoded by the surrounding system. Nothing in
//! it is trusted until the engine has walked it.

use serde_json::Value;

/// A single configuration node: field name to dynamically typed value.
///
/// Nodes nest to form the composite tree (`mounts` holds a sequence of
/// child nodes, `child` a single one). The validator only ever reads them.
pub type Node = serde_json::Map<String, Value>;

/// Human-readable kind name of a value, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Kind name of an optional field, `"missing"` when the field is absent.
pub fn field_kind(value: Option<&Value>) -> &'static str {
	value.map_or("missing", kind_of)
}
