//! Validator registry: backend type name to validation function
//!
//! The engine dispatches every node through a registry. The built-in
//! global registry covers the stock backend kinds and is populated once
//! per process; a caller embedding extra backend kinds builds its own
//! [`Registry`] and validates through it instead.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::context::ValidationContext;
use crate::engine;
use crate::error::ValidateError;
use crate::node::Node;
use crate::validators;

/// Validation function for one backend type.
///
/// The registry that dispatched the node is passed back in so composite
/// validators recurse through the same registry, not the global one.
pub type ValidatorFn = fn(&Registry, &mut ValidationContext, &Node) -> Result<(), ValidateError>;

/// Immutable-after-setup mapping from backend type name to validator.
pub struct Registry {
	validators: HashMap<String, ValidatorFn>,
}

impl Registry {
	/// Empty registry. Useful only as a base for [`register`](Self::register).
	pub fn new() -> Self {
		Registry { validators: HashMap::new() }
	}

	/// Registry pre-populated with the built-in backend validators.
	pub fn with_builtins() -> Self {
		let mut registry = Registry::new();
		registry.register("badger-style", validators::badger);
		registry.register("flat-file", validators::flat_file);
		registry.register("level-style", validators::level);
		registry.register("mount", validators::mount);
		registry.register("measure", validators::measure);
		registry
	}

	/// The process-lifetime registry of built-in validators, initialized
	/// on first use and never mutated afterwards.
	pub fn global() -> &'static Registry {
		static GLOBAL: OnceLock<Registry> = OnceLock::new();
		GLOBAL.get_or_init(Registry::with_builtins)
	}

	/// Register a validator for a backend type name.
	///
	/// Registration happens while the registry is being set up, before any
	/// validation runs against it. A later registration for the same name
	/// replaces the earlier one.
	pub fn register(&mut self, name: impl Into<String>, validator: ValidatorFn) {
		self.validators.insert(name.into(), validator);
	}

	/// Look up the validator for a backend type name.
	pub fn lookup(&self, name: &str) -> Option<ValidatorFn> {
		self.validators.get(name).copied()
	}

	/// Validate a configuration tree against this registry, with fresh
	/// shared state for the run.
	pub fn validate(&self, root: &Node) -> Result<(), ValidateError> {
		let mut ctx = ValidationContext::new();
		engine::validate_node(self, &mut ctx, root)
	}
}

impl Default for Registry {
	fn default() -> Self {
		Registry::new()
	}
}


// vim: ts=4
