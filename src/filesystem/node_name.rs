use derive_more::{Deref, Display};
use snafu::{Snafu, ensure};

/// Longest name a node may carry, in UTF-8 bytes.
///
/// Mirrors a fixed 64-byte name buffer that keeps one slot for the terminator,
/// so multi-byte characters use up more of the bound.
pub const MAX_NAME_LEN: usize = 63;

/// Name of a single node, guaranteed to respect [`MAX_NAME_LEN`].
///
/// Only the root carries an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref)]
pub struct NodeName(String);

impl NodeName {
    pub(crate) fn root() -> Self {
        NodeName(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&str> for NodeName {
    type Error = NameTooLongError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let len = name.len();
        ensure!(
            len <= MAX_NAME_LEN,
            NameTooLongSnafu {
                name,
                len,
                max: MAX_NAME_LEN,
            }
        );
        Ok(NodeName(name.to_string()))
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Snafu)]
#[snafu(display("Name '{}' is {} bytes long, at most {} are allowed", name, len, max))]
pub struct NameTooLongError {
    pub name: String,
    pub len: usize,
    pub max: usize,
}
