//! Path resolution against a namespace tree.
//!
//! Resolution never mutates the tree: it turns a path string into the node
//! that should hold the final component plus that component's name.

mod path_components;
mod resolver;

pub use path_components::{PathComponents, ROOT_MARKER, SEPARATOR, SplitPath, split_leaf};
pub use resolver::{ResolveContext, ResolveError, Resolved, resolve};
