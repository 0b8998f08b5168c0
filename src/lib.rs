//! # dsconfig - Datastore Configuration Validator
//!
//! Validates a nested datastore configuration document before the storage
//! tree is instantiated, so that malformed or inconsistent configurations
//! are rejected statically instead of surfacing as deferred I/O failures.
//!
//! Every node declares its backend kind in a `type` field. Leaf backends
//! (`badger-style`, `flat-file`, `level-style`) claim an on-disk path;
//! composite backends (`mount`, `measure`) wrap or aggregate other nodes
//! and are validated recursively. Two invariants hold across the whole
//! tree: no two backends may claim the same on-disk path, and mount points
//! must be unique within one mount group.
//!
//! ## Quick Start
//!
//! ```rust
//! use dsconfig::validate;
//! use serde_json::json;
//!
//! let root = json!({
//!     "type": "mount",
//!     "mounts": [
//!         { "mountpoint": "/blocks", "type": "flat-file", "path": "/data/blocks" },
//!         { "mountpoint": "/", "type": "level-style", "path": "/data/root", "compression": "none" },
//!     ],
//! });
//! validate(root.as_object().unwrap())?;
//! # Ok::<(), dsconfig::ValidateError>(())
//! ```
//!
//! Custom backend kinds can be validated through an explicit [`Registry`]
//! instead of the built-in global one.

pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod node;
pub mod registry;
pub mod validators;

// Re-export commonly used types and functions
pub use context::ValidationContext;
pub use engine::{validate, validate_node, MAX_DEPTH};
pub use error::ValidateError;
pub use node::Node;
pub use registry::{Registry, ValidatorFn};

// vim: ts=4
