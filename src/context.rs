//! Shared validation state for one validation run
//!
//! A fresh context is created by the `validate` entry points and threaded
//! as a mutable borrow through every recursive call of that run. It is
//! never shared between runs, which is what makes independent validations
//! safe to execute concurrently.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidateError;
use crate::logging::trace;
use crate::node::field_kind;

/// Mutable state scoped to a single top-level validation call.
pub struct ValidationContext {
	/// On-disk paths already claimed by a leaf backend anywhere in the tree
	used_paths: HashSet<String>,
	/// Current composite nesting depth, maintained by the engine
	pub(crate) depth: usize,
}

impl ValidationContext {
	pub(crate) fn new() -> Self {
		ValidationContext { used_paths: HashSet::new(), depth: 0 }
	}

	/// Claim an on-disk path for the calling backend.
	///
	/// `value` is the raw field value as read from the node (`None` when
	/// the field is absent). The path must be a string that no other node
	/// in the same tree has claimed, regardless of nesting depth or
	/// branch. `field` is only used to name the field in the error.
	pub fn claim_path(&mut self, field: &'static str, value: Option<&Value>) -> Result<(), ValidateError> {
		let path = match value {
			Some(Value::String(path)) => path,
			other => {
				return Err(ValidateError::InvalidField {
					field,
					expected: "string",
					actual: field_kind(other),
				})
			}
		};

		if self.used_paths.contains(path) {
			return Err(ValidateError::DuplicatePath(path.clone()));
		}
		self.used_paths.insert(path.clone());
		trace!("claimed on-disk path {}", path);

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_claim_path_records_and_succeeds() {
		let mut ctx = ValidationContext::new();
		assert!(ctx.claim_path("path", Some(&json!("/data/a"))).is_ok());
		assert!(ctx.claim_path("path", Some(&json!("/data/b"))).is_ok());
	}

	#[test]
	fn test_claim_path_rejects_second_claimant() {
		let mut ctx = ValidationContext::new();
		ctx.claim_path("path", Some(&json!("/data/a"))).unwrap();
		assert_eq!(
			ctx.claim_path("path", Some(&json!("/data/a"))),
			Err(ValidateError::DuplicatePath("/data/a".into()))
		);
	}

	#[test]
	fn test_claim_path_missing_field() {
		let mut ctx = ValidationContext::new();
		assert_eq!(
			ctx.claim_path("path", None),
			Err(ValidateError::InvalidField { field: "path", expected: "string", actual: "missing" })
		);
	}

	#[test]
	fn test_claim_path_wrong_kind() {
		let mut ctx = ValidationContext::new();
		assert_eq!(
			ctx.claim_path("path", Some(&json!(17))),
			Err(ValidateError::InvalidField { field: "path", expected: "string", actual: "number" })
		);
	}
}

// vim: ts=4
