use std::str::Split;

pub const SEPARATOR: char = '/';
pub const ROOT_MARKER: &str = "/";

/// A path cut at its last separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPath<'a> {
    /// Everything before the last separator, `None` when there is no separator.
    pub directory: Option<&'a str>,
    /// Everything after the last separator.
    pub leaf: &'a str,
}

pub fn split_leaf(path: &str) -> SplitPath<'_> {
    match path.rfind(SEPARATOR) {
        Some(index) => SplitPath {
            directory: Some(&path[..index]),
            leaf: &path[index + SEPARATOR.len_utf8()..],
        },
        None => SplitPath {
            directory: None,
            leaf: path,
        },
    }
}

/// Non-empty components of a path, in order.
///
/// Consecutive, leading and trailing separators produce no components.
#[derive(Debug, Clone)]
pub struct PathComponents<'a> {
    inner: Split<'a, char>,
}

impl<'a> PathComponents<'a> {
    pub fn new(path: &'a str) -> Self {
        PathComponents {
            inner: path.split(SEPARATOR),
        }
    }
}

impl<'a> Iterator for PathComponents<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|component| !component.is_empty())
    }
}
