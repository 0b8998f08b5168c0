//! Measure backend validator
//!
//! A measure node wraps exactly one child backend with instrumentation,
//! tagging its metrics with a prefix.

use serde_json::Value;

use crate::context::ValidationContext;
use crate::engine;
use crate::error::ValidateError;
use crate::node::{field_kind, Node};
use crate::registry::Registry;

/// `measure`: requires a string `prefix` and a single mapping-typed
/// `child`, which is itself a full backend configuration.
pub fn measure(
	registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	match node.get("prefix") {
		Some(Value::String(_)) => {}
		other => {
			return Err(ValidateError::InvalidField {
				field: "prefix",
				expected: "string",
				actual: field_kind(other),
			})
		}
	}

	let child = match node.get("child") {
		Some(Value::Object(child)) => child,
		other => {
			return Err(ValidateError::InvalidField {
				field: "child",
				expected: "object",
				actual: field_kind(other),
			})
		}
	};

	engine::validate_node(registry, ctx, child)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn run(value: serde_json::Value) -> Result<(), ValidateError> {
		let registry = Registry::with_builtins();
		let mut ctx = ValidationContext::new();
		measure(&registry, &mut ctx, value.as_object().unwrap())
	}

	#[test]
	fn test_measure_valid() {
		assert!(run(json!({
			"type": "measure",
			"prefix": "m.",
			"child": { "type": "badger-style", "path": "/data/b" },
		}))
		.is_ok());
	}

	#[test]
	fn test_prefix_missing() {
		assert_eq!(
			run(json!({ "type": "measure", "child": { "type": "flat-file", "path": "/a" } })),
			Err(ValidateError::InvalidField { field: "prefix", expected: "string", actual: "missing" })
		);
	}

	#[test]
	fn test_child_not_an_object() {
		assert_eq!(
			run(json!({ "type": "measure", "prefix": "m.", "child": "flat-file" })),
			Err(ValidateError::InvalidField { field: "child", expected: "object", actual: "string" })
		);
	}

	#[test]
	fn test_child_error_propagates_unchanged() {
		assert_eq!(
			run(json!({ "type": "measure", "prefix": "m.", "child": { "type": "flat-file" } })),
			Err(ValidateError::InvalidField { field: "path", expected: "string", actual: "missing" })
		);
	}
}

// vim: ts=4
