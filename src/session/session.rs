use std::collections::TryReserveError;

use snafu::prelude::*;
use tracing::{debug, info};

use crate::filesystem::{NameTooLongError, NamespaceTree, Node, NodeId, NodeName};
use crate::resolver::{ROOT_MARKER, ResolveContext, ResolveError, Resolved, resolve};
use crate::session::{CdMode, TreeRender};

/// A namespace together with its current working directory.
///
/// Every directory operation goes through a session, so independent sessions
/// never observe each other.
#[derive(Debug, Clone)]
pub struct Session {
    tree: NamespaceTree,
    cwd: NodeId,
    cd_mode: CdMode,
}

impl Session {
    pub fn new() -> Self {
        Self::with_cd_mode(CdMode::default())
    }

    pub fn with_cd_mode(cd_mode: CdMode) -> Self {
        let tree = NamespaceTree::new();
        let cwd = tree.root();
        Session { tree, cwd, cd_mode }
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub fn cd_mode(&self) -> CdMode {
        self.cd_mode
    }

    pub fn context(&self) -> ResolveContext {
        ResolveContext {
            root: self.tree.root(),
            cwd: self.cwd,
        }
    }

    pub fn resolve<'a>(&self, path: &'a str) -> Result<Resolved<'a>, ResolveError> {
        resolve(&self.tree, &self.context(), path)
    }

    /// Creates a directory named by the last component of `path`.
    ///
    /// The tree is only modified when every check passed.
    pub fn make_directory(&mut self, path: &str) -> Result<NodeId, MkdirError> {
        ensure!(!path.is_empty() && path != ROOT_MARKER, EmptyPathSnafu);

        let Resolved { parent, leaf } = self.resolve(path).context(ParentNotFoundSnafu)?;
        ensure!(!leaf.is_empty(), EmptyPathSnafu);
        ensure!(
            self.tree.find_child(parent, leaf).is_none(),
            AlreadyExistsSnafu { name: leaf }
        );

        let name = NodeName::try_from(leaf).context(NameTooLongSnafu)?;
        let id = self
            .tree
            .append_child(parent, Node::directory(name))
            .context(AllocationFailureSnafu)?;

        info!("Created directory {}", self.tree.path_of(id));
        Ok(id)
    }

    /// Moves the cwd according to the session's [`CdMode`].
    ///
    /// The cwd is left as it was when resolution fails.
    pub fn change_directory(&mut self, path: &str) -> Result<(), CdError> {
        let target = match self.cd_mode {
            CdMode::Parent => {
                let Resolved { parent, leaf } = self.resolve(path)?;
                if !leaf.is_empty() {
                    debug!("Leaving '{}' of '{}' unentered in parent cd mode", leaf, path);
                }
                parent
            }
            CdMode::Descend => self.resolve_directory(path)?,
        };

        debug!(
            "Changing cwd from {} to {}",
            self.current_path(),
            self.tree.path_of(target)
        );
        self.cwd = target;
        Ok(())
    }

    /// Lazily walks the tree from the cwd, including the cwd's later siblings.
    pub fn render_tree(&self) -> TreeRender<'_> {
        TreeRender::new(&self.tree, self.cwd)
    }

    pub fn current_path(&self) -> String {
        self.tree.path_of(self.cwd)
    }

    /// Entries of the directory named by `path`, or of the cwd.
    pub fn list_directory(&self, path: Option<&str>) -> Result<Vec<&Node>, ResolveError> {
        let directory = match path {
            Some(path) => self.resolve_directory(path)?,
            None => self.cwd,
        };
        Ok(self
            .tree
            .children(directory)
            .map(|child| self.tree.node(child))
            .collect())
    }

    /// Resolves `path` all the way down: a non-empty leaf has to be an
    /// existing directory.
    fn resolve_directory(&self, path: &str) -> Result<NodeId, ResolveError> {
        let Resolved { parent, leaf } = self.resolve(path)?;
        if leaf.is_empty() {
            return Ok(parent);
        }
        self.tree
            .find_directory(parent, leaf)
            .ok_or_else(|| ResolveError::PathComponentNotFound {
                token: leaf.to_string(),
            })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Snafu)]
pub enum MkdirError {
    #[snafu(display("No path provided"))]
    EmptyPath,
    #[snafu(display("Parent directory could not be resolved"))]
    ParentNotFound { source: ResolveError },
    #[snafu(display("Directory {} already exists", name))]
    AlreadyExists { name: String },
    #[snafu(display("Directory name too long"))]
    NameTooLong { source: NameTooLongError },
    #[snafu(display("Failed to allocate a new node"))]
    AllocationFailure { source: TryReserveError },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(module(cd_error))]
pub enum CdError {
    #[snafu(display("No path provided"))]
    EmptyPath,
    #[snafu(display("Directory {} does not exist", token))]
    PathComponentNotFound { token: String },
}

impl From<ResolveError> for CdError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::EmptyPath => CdError::EmptyPath,
            ResolveError::PathComponentNotFound { token } => {
                CdError::PathComponentNotFound { token }
            }
        }
    }
}
