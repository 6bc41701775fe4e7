use serde::{Deserialize, Serialize};

/// The changed paths of one revision, in the order they were supplied.
///
/// Paths are repository-relative and taken verbatim: no slash normalization, no existence check.
/// On the wire this is a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    paths: Vec<String>,
}

impl ChangeSet {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_paths_verbatim_and_in_order() {
        let set: ChangeSet = ["b/x.rs", "/a//y.cairo", "b/x.rs"].into_iter().collect();
        assert_eq!(set.paths(), ["b/x.rs", "/a//y.cairo", "b/x.rs"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn default_is_empty() {
        assert!(ChangeSet::default().is_empty());
    }
}
