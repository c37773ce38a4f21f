use serde::Serialize;
use std::collections::HashSet;

/// Unordered, deduplicated set of key paths produced by one extraction.
///
/// Order is a presentation concern: call [`KeyPathSet::into_sorted`] when
/// the paths are about to be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyPathSet {
    paths: HashSet<String>,
}

impl KeyPathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the path was already present
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    pub fn union(&mut self, other: KeyPathSet) {
        self.paths.extend(other.paths);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Consume the set into ascending lexicographic order
    pub fn into_sorted(self) -> Vec<String> {
        let mut paths: Vec<String> = self.paths.into_iter().collect();
        paths.sort_unstable();
        paths
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for KeyPathSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
