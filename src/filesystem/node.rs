use derive_more::Display;

use crate::filesystem::NodeName;

/// Stable handle of a node inside a [`NamespaceTree`](super::NamespaceTree).
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// One entry of the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: NodeName,
    kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
}

impl Node {
    pub fn directory(name: NodeName) -> Self {
        Self::detached(name, NodeKind::Directory)
    }

    pub fn file(name: NodeName) -> Self {
        Self::detached(name, NodeKind::File)
    }

    pub(crate) fn root() -> Self {
        Self::detached(NodeName::root(), NodeKind::Directory)
    }

    fn detached(name: NodeName, kind: NodeKind) -> Self {
        Node {
            name,
            kind,
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }

    pub fn name(&self) -> &NodeName {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
