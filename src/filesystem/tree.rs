use std::collections::TryReserveError;

use tracing::trace;

use crate::filesystem::{Node, NodeId};

const ROOT: NodeId = NodeId(0);

/// Owner of every node of one namespace.
///
/// The root is created together with the tree and is never removed, so
/// [`NamespaceTree::root`] is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTree {
    nodes: Vec<Node>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        NamespaceTree {
            nodes: vec![Node::root()],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Returns the node behind `id`.
    ///
    /// Panics if `id` was issued by a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `parent` in creation order.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(parent).first_child,
        }
    }

    /// First child of `parent` named exactly `name`, of any kind.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&child| self.node(child).name() == name)
    }

    /// Like [`find_child`](Self::find_child), but file markers never match.
    pub fn find_directory(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent).find(|&child| {
            let node = self.node(child);
            node.is_directory() && node.name() == name
        })
    }

    /// Links `child` as the last child of `parent`.
    ///
    /// Name uniqueness and kind of `parent` are the caller's concern. The
    /// tree is left untouched when the arena cannot grow.
    pub fn append_child(
        &mut self,
        parent: NodeId,
        mut child: Node,
    ) -> Result<NodeId, TryReserveError> {
        self.nodes.try_reserve(1)?;

        let id = NodeId(self.nodes.len());
        let last_sibling = self.children(parent).last();

        child.parent = Some(parent);
        child.first_child = None;
        child.next_sibling = None;
        self.nodes.push(child);

        match last_sibling {
            Some(last) => self.nodes[last.index()].next_sibling = Some(id),
            None => self.nodes[parent.index()].first_child = Some(id),
        }

        trace!("Linked node {} under {}", id, parent);
        Ok(id)
    }

    /// Absolute path of `id`, `/` for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if !node.name().is_root() {
                names.push(node.name().as_str());
            }
            current = node.parent();
        }

        if names.is_empty() {
            return "/".to_string();
        }

        names
            .iter()
            .rev()
            .fold(String::new(), |mut path, name| {
                path.push('/');
                path.push_str(name);
                path
            })
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a sibling chain.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a NamespaceTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}
