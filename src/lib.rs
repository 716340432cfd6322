//! In-memory hierarchical namespace with path resolution.
//!
//! [`Session`] is the entry point: it owns a [`NamespaceTree`] and a current
//! working directory, and exposes directory creation, directory change and
//! tree rendering on top of [`resolve`].

pub mod filesystem;
pub mod resolver;
pub mod session;

pub use filesystem::{MAX_NAME_LEN, NamespaceTree, Node, NodeId, NodeKind, NodeName};
pub use resolver::{ResolveContext, ResolveError, Resolved, resolve};
pub use session::{CdError, CdMode, MkdirError, RenderedLine, Session, TreeRender};
