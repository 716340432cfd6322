use std::fmt;

use crate::filesystem::{NamespaceTree, NodeId, NodeKind, NodeName};

const INDENT: &str = "   ";
const BRANCH: &str = "|---";

/// One visited node of a tree rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    pub id: NodeId,
    pub depth: usize,
    pub name: &'a NodeName,
    pub kind: NodeKind,
}

impl fmt::Display for RenderedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        write!(f, "{BRANCH}{}", self.name)
    }
}

/// Lazy pre-order walk from a starting node.
///
/// The start node is yielded first at depth 0. Each node is followed by its
/// children one level deeper, then by its next sibling at the same depth, so
/// siblings created after the start node are walked at depth 0 too.
#[derive(Debug, Clone)]
pub struct TreeRender<'a> {
    tree: &'a NamespaceTree,
    pending: Vec<(NodeId, usize)>,
}

impl<'a> TreeRender<'a> {
    pub fn new(tree: &'a NamespaceTree, start: NodeId) -> Self {
        TreeRender {
            tree,
            pending: vec![(start, 0)],
        }
    }
}

impl<'a> Iterator for TreeRender<'a> {
    type Item = RenderedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.pending.pop()?;
        let node = self.tree.node(id);

        // Sibling goes on the stack first so the whole child subtree is
        // drained before it.
        if let Some(sibling) = node.next_sibling {
            self.pending.push((sibling, depth));
        }
        if let Some(child) = node.first_child {
            self.pending.push((child, depth + 1));
        }

        Some(RenderedLine {
            id,
            depth,
            name: node.name(),
            kind: node.kind(),
        })
    }
}
