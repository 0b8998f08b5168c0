//! Error types for datastore configuration validation
//!
//! Validation is fail-fast: the first violation found during the
//! depth-first walk is returned unchanged to the caller, never wrapped or
//! aggregated with later ones.

use std::error::Error;
use std::fmt;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
	/// The node has no `type` field, or it is not a string
	InvalidType { actual: &'static str },

	/// `type` names a backend kind with no registered validator
	UnsupportedType(String),

	/// A required field is absent or has the wrong shape
	InvalidField { field: &'static str, expected: &'static str, actual: &'static str },

	/// Two nodes somewhere in the tree claim the same on-disk path
	DuplicatePath(String),

	/// Two entries of one mount group share a mount point
	DuplicateMountPoint(String),

	/// Composite nesting exceeds the engine's depth bound
	DepthExceeded(usize),
}

impl fmt::Display for ValidateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidateError::InvalidType { actual } => {
				write!(f, "invalid 'type' entry in config: expected string, got {}", actual)
			}
			ValidateError::UnsupportedType(name) => {
				write!(f, "unsupported type entry in config: {}", name)
			}
			ValidateError::InvalidField { field, expected, actual } => {
				write!(f, "invalid '{}' entry in config: expected {}, got {}", field, expected, actual)
			}
			ValidateError::DuplicatePath(path) => {
				write!(f, "path '{}' is already in use", path)
			}
			ValidateError::DuplicateMountPoint(point) => {
				write!(f, "multiple mounts under one mountpoint '{}' are not allowed", point)
			}
			ValidateError::DepthExceeded(max) => {
				write!(f, "configuration nesting exceeds the maximum depth of {}", max)
			}
		}
	}
}

impl Error for ValidateError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_names_the_offending_field() {
		let err = ValidateError::InvalidField { field: "compression", expected: "string", actual: "missing" };
		let msg = err.to_string();
		assert!(msg.contains("compression"));
		assert!(msg.contains("expected string"));
		assert!(msg.contains("got missing"));
	}

	#[test]
	fn test_display_names_the_duplicate_value() {
		assert!(ValidateError::DuplicatePath("/data/a".into()).to_string().contains("/data/a"));
		assert!(ValidateError::DuplicateMountPoint("/x".into()).to_string().contains("/x"));
	}

	#[test]
	fn test_display_names_the_unsupported_type() {
		let err = ValidateError::UnsupportedType("frobnicator".into());
		assert!(err.to_string().contains("frobnicator"));
	}

	#[test]
	fn test_error_equality() {
		let a = ValidateError::DuplicatePath("/p".into());
		let b = ValidateError::DuplicatePath("/p".into());
		assert_eq!(a, b);
	}
}

// vim: ts=4
