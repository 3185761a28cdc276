use std::path::{Path, PathBuf};

use crate::config::DEFAULT_MEMBERS;

/// Ordered, immutable list of traversal roots.
///
/// Order is preserved exactly as given; duplicates are kept so that a
/// misconfigured list surfaces instead of being silently repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSet(Vec<PathBuf>);

impl RootSet {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(roots.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RootSet {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS.iter().copied())
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a Path;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, PathBuf>, fn(&PathBuf) -> &Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(PathBuf::as_path as fn(&PathBuf) -> &Path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_members_in_order() {
        let roots = RootSet::default();
        let first: Vec<_> = roots.iter().take(3).collect();
        assert_eq!(first, [Path::new("nl/"), Path::new("ir/"), Path::new("ir2triple/")]);
        assert_eq!(roots.len(), 9);
    }

    #[test]
    fn keeps_given_order_and_duplicates() {
        let roots = RootSet::new(["b", "a", "b"]);
        let collected: Vec<_> = (&roots).into_iter().collect();
        assert_eq!(collected, [Path::new("b"), Path::new("a"), Path::new("b")]);
        assert!(!roots.is_empty());
    }
}
