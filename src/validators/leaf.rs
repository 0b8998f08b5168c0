//! Leaf backend validators
//!
//! Leaf backends hold no child configurations, so these never recurse.
//! They check the existence and type of their required fields and leave
//! path bookkeeping to [`ValidationContext::claim_path`].

use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidateError;
use crate::node::{field_kind, Node};
use crate::registry::Registry;

/// `badger-style`: single-directory store, needs only a unique `path`.
pub fn badger(
	_registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	ctx.claim_path("path", node.get("path"))
}

/// `flat-file`: file-per-key store, needs only a unique `path`.
pub fn flat_file(
	_registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	ctx.claim_path("path", node.get("path"))
}

/// `level-style`: needs a unique `path` and a `compression` algorithm
/// name. The path is checked first, so when both are wrong the path error
/// is the one reported.
pub fn level(
	_registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	ctx.claim_path("path", node.get("path"))?;

	match node.get("compression") {
		Some(Value::String(_)) => Ok(()),
		other => Err(ValidateError::InvalidField {
			field: "compression",
			expected: "string",
			actual: field_kind(other),
		}),
	}
}


// vim: ts=4
