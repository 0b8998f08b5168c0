//! Mount backend validator
//!
//! A mount node routes operations to several child backends, each under
//! its own path prefix. Every entry of `mounts` is itself a full backend
//! configuration of arbitrary type, so the validator recurses into each
//! one after checking its mount point.

use std::collections::HashSet;

use serde_json::Value;

use crate::context::ValidationContext;
use crate::engine;
use crate::error::ValidateError;
use crate::node::{field_kind, kind_of, Node};
use crate::registry::Registry;

/// `mount`: requires `mounts`, a sequence of child nodes each carrying a
/// string `mountpoint` unique among its siblings. Entries are validated
/// in order and the first failure aborts the walk.
pub fn mount(
	registry: &Registry,
	ctx: &mut ValidationContext,
	node: &Node,
) -> Result<(), ValidateError> {
	let mounts = match node.get("mounts") {
		Some(Value::Array(mounts)) => mounts,
		other => {
			return Err(ValidateError::InvalidField {
				field: "mounts",
				expected: "array",
				actual: field_kind(other),
			})
		}
	};

	// Mount points must only be unique among this node's direct children,
	// so the set is local to this call. On-disk paths stay in the shared
	// context and remain unique across the whole tree.
	let mut mount_points = HashSet::new();

	for entry in mounts {
		let entry = match entry {
			Value::Object(entry) => entry,
			other => {
				return Err(ValidateError::InvalidField {
					field: "mounts",
					expected: "object",
					actual: kind_of(other),
				})
			}
		};

		let mount_point = match entry.get("mountpoint") {
			Some(Value::String(mount_point)) => mount_point,
			other => {
				return Err(ValidateError::InvalidField {
					field: "mountpoint",
					expected: "string",
					actual: field_kind(other),
				})
			}
		};

		if !mount_points.insert(mount_point.as_str()) {
			return Err(ValidateError::DuplicateMountPoint(mount_point.clone()));
		}

		engine::validate_node(registry, ctx, entry)?;
	}

	Ok(())
}


// vim: ts=4
