use snafu::prelude::*;
use tracing::debug;

use crate::filesystem::{NamespaceTree, NodeId};
use crate::resolver::{PathComponents, ROOT_MARKER, SplitPath, split_leaf};

/// The pair of nodes paths are interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    pub root: NodeId,
    pub cwd: NodeId,
}

/// Outcome of a successful resolution: the node that holds (or would hold)
/// the last path component, and that component's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub parent: NodeId,
    pub leaf: &'a str,
}

/// Resolves `path` into its parent directory and leaf name.
///
/// A path without any separator names an entry of `context.cwd`. As soon as
/// a separator is present, every component before the last one is looked up
/// starting from `context.root`, relative paths included. Components only
/// match directories, and the first missing one aborts the lookup.
pub fn resolve<'a>(
    tree: &NamespaceTree,
    context: &ResolveContext,
    path: &'a str,
) -> Result<Resolved<'a>, ResolveError> {
    ensure!(!path.is_empty(), EmptyPathSnafu);

    if path == ROOT_MARKER {
        return Ok(Resolved {
            parent: context.root,
            leaf: "",
        });
    }

    let SplitPath { directory, leaf } = split_leaf(path);
    let Some(directory) = directory else {
        debug!("Resolved '{}' relative to {}", path, context.cwd);
        return Ok(Resolved {
            parent: context.cwd,
            leaf,
        });
    };

    let mut cursor = context.root;
    for token in PathComponents::new(directory) {
        cursor = tree
            .find_directory(cursor, token)
            .context(PathComponentNotFoundSnafu { token })?;
    }

    debug!("Resolved '{}' to leaf '{}' under {}", path, leaf, cursor);
    Ok(Resolved {
        parent: cursor,
        leaf,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ResolveError {
    #[snafu(display("No path provided"))]
    EmptyPath,
    #[snafu(display("Directory {} does not exist", token))]
    PathComponentNotFound { token: String },
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::filesystem::{Node, NodeName};

    struct Fixture {
        tree: NamespaceTree,
        a: NodeId,
        b: NodeId,
        notes: NodeId,
    }

    impl Fixture {
        fn context(&self, cwd: NodeId) -> ResolveContext {
            ResolveContext {
                root: self.tree.root(),
                cwd,
            }
        }
    }

    fn dir(value: &str) -> Node {
        Node::directory(NodeName::try_from(value).expect("Test name should be valid"))
    }

    /// `/a/b` plus a file marker `/notes`.
    #[fixture]
    fn populated() -> Fixture {
        let mut tree = NamespaceTree::new();
        let root = tree.root();
        let a = tree.append_child(root, dir("a")).expect("Arena should grow");
        let b = tree.append_child(a, dir("b")).expect("Arena should grow");
        let notes = tree
            .append_child(
                root,
                Node::file(NodeName::try_from("notes").expect("Test name should be valid")),
            )
            .expect("Arena should grow");
        Fixture { tree, a, b, notes }
    }

    #[rstest]
    fn empty_path_is_rejected(populated: Fixture) {
        let context = populated.context(populated.tree.root());
        assert_eq!(
            resolve(&populated.tree, &context, ""),
            Err(ResolveError::EmptyPath)
        );
    }

    #[rstest]
    fn root_marker_resolves_to_root_with_empty_leaf(populated: Fixture) {
        let context = populated.context(populated.b);
        let resolved = resolve(&populated.tree, &context, "/").expect("Root should resolve");
        assert_eq!(resolved.parent, populated.tree.root());
        assert_eq!(resolved.leaf, "");
    }

    #[rstest]
    fn bare_name_resolves_against_cwd(populated: Fixture) {
        let context = populated.context(populated.a);
        let resolved = resolve(&populated.tree, &context, "c").expect("Bare name should resolve");
        assert_eq!(resolved.parent, populated.a);
        assert_eq!(resolved.leaf, "c");
    }

    #[rstest]
    #[case("/a/b")]
    #[case("/a//b")]
    #[case("//a/b")]
    fn absolute_path_walks_from_root(populated: Fixture, #[case] path: &str) {
        let context = populated.context(populated.tree.root());
        let resolved = resolve(&populated.tree, &context, path).expect("Path should resolve");
        assert_eq!(resolved.parent, populated.a);
        assert_eq!(resolved.leaf, "b");
    }

    #[rstest]
    fn absolute_resolution_ignores_cwd(populated: Fixture) {
        let tree = &populated.tree;
        let results = [tree.root(), populated.a, populated.b]
            .into_iter()
            .map(|cwd| resolve(tree, &populated.context(cwd), "/a/b/c"))
            .collect::<Vec<_>>();

        for result in &results {
            assert_eq!(
                *result,
                Ok(Resolved {
                    parent: populated.b,
                    leaf: "c"
                })
            );
        }
    }

    #[rstest]
    fn relative_intermediate_components_restart_at_root(populated: Fixture) {
        // From inside /a, "a/b" still means /a/b, not /a/a/b.
        let context = populated.context(populated.a);
        let resolved = resolve(&populated.tree, &context, "a/b").expect("Path should resolve");
        assert_eq!(resolved.parent, populated.a);
        assert_eq!(resolved.leaf, "b");

        let missing = resolve(&populated.tree, &context, "b/c");
        assert_eq!(
            missing,
            Err(ResolveError::PathComponentNotFound {
                token: "b".to_string()
            })
        );
    }

    #[rstest]
    fn trailing_separator_yields_empty_leaf(populated: Fixture) {
        let context = populated.context(populated.tree.root());
        let resolved = resolve(&populated.tree, &context, "/a/").expect("Path should resolve");
        assert_eq!(resolved.parent, populated.a);
        assert_eq!(resolved.leaf, "");
    }

    #[test]
    fn missing_first_component_on_empty_tree() {
        let tree = NamespaceTree::new();
        let context = ResolveContext {
            root: tree.root(),
            cwd: tree.root(),
        };
        assert_eq!(
            resolve(&tree, &context, "/x/y"),
            Err(ResolveError::PathComponentNotFound {
                token: "x".to_string()
            })
        );
    }

    #[rstest]
    fn missing_component_reports_first_failure(populated: Fixture) {
        let context = populated.context(populated.tree.root());
        assert_eq!(
            resolve(&populated.tree, &context, "/a/zz/yy/leaf"),
            Err(ResolveError::PathComponentNotFound {
                token: "zz".to_string()
            })
        );
    }

    #[rstest]
    fn file_markers_are_not_traversed(populated: Fixture) {
        let context = populated.context(populated.tree.root());
        assert_eq!(populated.tree.find_child(populated.tree.root(), "notes"), Some(populated.notes));
        assert_eq!(
            resolve(&populated.tree, &context, "/notes/inner"),
            Err(ResolveError::PathComponentNotFound {
                token: "notes".to_string()
            })
        );
    }

    #[rstest]
    fn resolution_does_not_mutate_tree(populated: Fixture) {
        let before = populated.tree.clone();
        let context = populated.context(populated.tree.root());
        let _ = resolve(&populated.tree, &context, "/a/b/c");
        let _ = resolve(&populated.tree, &context, "/missing/c");
        assert_eq!(populated.tree, before);
    }
}
