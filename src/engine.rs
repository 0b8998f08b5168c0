//! Recursive validation engine
//!
//! The engine performs the dispatch step shared by every node: read the
//! declared `type`, resolve its validator in the registry, and invoke it.
//! Composite validators call back into [`validate_node`] for each child,
//! reusing the same context, which is how path uniqueness stays global to
//! the whole tree rather than per branch.

use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidateError;
use crate::logging::debug;
use crate::node::{field_kind, Node};
use crate::registry::Registry;

/// Maximum composite nesting depth accepted before validation fails.
///
/// The walk is plain recursion, so input depth is stack depth; a bound
/// keeps adversarially deep documents from exhausting the stack.
pub const MAX_DEPTH: usize = 128;

/// Validate a full configuration tree against the built-in registry.
///
/// Creates fresh shared state for the run, so repeated calls on the same
/// tree are independent and yield the same result.
pub fn validate(root: &Node) -> Result<(), ValidateError> {
	Registry::global().validate(root)
}

/// Dispatch one node to the validator registered for its declared type.
///
/// Errors from the validator are propagated unchanged; the first failure
/// anywhere in the tree aborts the whole walk.
pub fn validate_node(
	registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	let name = match node.get("type") {
		Some(Value::String(name)) => name,
		other => return Err(ValidateError::InvalidType { actual: field_kind(other) }),
	};

	if ctx.depth >= MAX_DEPTH {
		return Err(ValidateError::DepthExceeded(MAX_DEPTH));
	}

	let validator = registry
		.lookup(name)
		.ok_or_else(|| ValidateError::UnsupportedType(name.clone()))?;

	debug!("validating '{}' datastore node at depth {}", name, ctx.depth);

	ctx.depth += 1;
	let result = validator(registry, ctx, node);
	ctx.depth -= 1;
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn node(value: serde_json::Value) -> Node {
		value.as_object().unwrap().clone()
	}

	#[test]
	fn test_missing_type_field() {
		let err = validate(&node(json!({ "path": "/data/a" }))).unwrap_err();
		assert_eq!(err, ValidateError::InvalidType { actual: "missing" });
	}

	#[test]
	fn test_non_string_type_field() {
		let err = validate(&node(json!({ "type": 3 }))).unwrap_err();
		assert_eq!(err, ValidateError::InvalidType { actual: "number" });
	}

	#[test]
	fn test_unsupported_type_names_the_type() {
		let err = validate(&node(json!({ "type": "postgres" }))).unwrap_err();
		assert_eq!(err, ValidateError::UnsupportedType("postgres".into()));
	}

	#[test]
	fn test_dispatch_reaches_leaf_validator() {
		assert!(validate(&node(json!({ "type": "flat-file", "path": "/data/a" }))).is_ok());
	}
}

// vim: ts=4
