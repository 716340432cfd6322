//! Arena-backed namespace tree.
//!
//! Nodes live in a single arena and refer to each other through [`NodeId`]
//! indices. Children form a "first child, next sibling" chain, so iteration
//! order is always creation order.

mod node;
mod node_name;
mod tree;

pub use node::{Node, NodeId, NodeKind};
pub use node_name::{MAX_NAME_LEN, NameTooLongError, NodeName};
pub use tree::{Children, NamespaceTree};
