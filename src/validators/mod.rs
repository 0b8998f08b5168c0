//! Per-backend validation functions
//!
//! Leaf backends (badger-style, flat-file, level-style) check required
//! fields and claim their on-disk path through the shared context;
//! composite backends (mount, measure) recurse into their children
//! through the engine. Unknown extra fields on any node are ignored:
//! the schema is permissive about additions, strict about requirements.

pub mod leaf;
pub mod measure;
pub mod mount;

pub use leaf::{badger, flat_file, level};
pub use measure::measure;
pub use mount::mount;

// vim: ts=4
